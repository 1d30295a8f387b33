use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod payout;
pub mod randomness;
pub mod state;

use state::{RaffleConfig, RaffleState};

declare_id!("BWFHkU6sNkKchhQQvuLhsHW72iEH17FEXz84z4VofHjc");

#[program]
pub mod vrf_raffle {
    use super::*;

    pub fn initialize_raffle(ctx: Context<InitializeRaffle>, config: RaffleConfig) -> Result<()> {
        instructions::initialize_raffle::initialize_raffle(ctx, config)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<ViewRaffle>) -> Result<bool> {
        instructions::queries::check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        instructions::perform_upkeep::perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: [u8; 32],
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::fulfill_random_words::fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn cancel_stale_draw(ctx: Context<CancelStaleDraw>) -> Result<()> {
        instructions::cancel_stale_draw::cancel_stale_draw(ctx)
    }

    pub fn get_entrance_fee(ctx: Context<ViewRaffle>) -> Result<u64> {
        instructions::queries::get_entrance_fee(ctx)
    }

    pub fn get_raffle_state(ctx: Context<ViewRaffle>) -> Result<RaffleState> {
        instructions::queries::get_raffle_state(ctx)
    }

    pub fn get_player(ctx: Context<ViewRaffle>, index: u64) -> Result<Pubkey> {
        instructions::queries::get_player(ctx, index)
    }

    pub fn get_recent_winner(ctx: Context<ViewRaffle>) -> Result<Option<Pubkey>> {
        instructions::queries::get_recent_winner(ctx)
    }

    pub fn get_number_of_players(ctx: Context<ViewRaffle>) -> Result<u64> {
        instructions::queries::get_number_of_players(ctx)
    }

    pub fn get_last_timestamp(ctx: Context<ViewRaffle>) -> Result<i64> {
        instructions::queries::get_last_timestamp(ctx)
    }

    pub fn get_interval(ctx: Context<ViewRaffle>) -> Result<i64> {
        instructions::queries::get_interval(ctx)
    }

    pub fn get_pooled_balance(ctx: Context<ViewRaffle>) -> Result<u64> {
        instructions::queries::get_pooled_balance(ctx)
    }

    pub fn get_outstanding_request_id(ctx: Context<ViewRaffle>) -> Result<Option<[u8; 32]>> {
        instructions::queries::get_outstanding_request_id(ctx)
    }

    pub fn get_num_words(ctx: Context<ViewRaffle>) -> Result<u32> {
        instructions::queries::get_num_words(ctx)
    }

    pub fn get_request_confirmations(ctx: Context<ViewRaffle>) -> Result<u16> {
        instructions::queries::get_request_confirmations(ctx)
    }
}
