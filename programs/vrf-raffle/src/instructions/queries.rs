use anchor_lang::prelude::*;

use crate::{
    constants::{NUM_WORDS, RAFFLE_SEED, REQUEST_CONFIRMATIONS},
    state::{Raffle, RaffleState},
};

// Read-only views. Each returns its value through the transaction return data.

pub fn check_upkeep(ctx: Context<ViewRaffle>) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.raffle.check_upkeep(now))
}

pub fn get_entrance_fee(ctx: Context<ViewRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.config.entrance_fee)
}

pub fn get_raffle_state(ctx: Context<ViewRaffle>) -> Result<RaffleState> {
    Ok(ctx.accounts.raffle.raffle_state)
}

pub fn get_player(ctx: Context<ViewRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.player(index)
}

pub fn get_recent_winner(ctx: Context<ViewRaffle>) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.raffle.recent_winner)
}

pub fn get_number_of_players(ctx: Context<ViewRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.number_of_players())
}

pub fn get_last_timestamp(ctx: Context<ViewRaffle>) -> Result<i64> {
    Ok(ctx.accounts.raffle.last_draw_timestamp)
}

pub fn get_interval(ctx: Context<ViewRaffle>) -> Result<i64> {
    Ok(ctx.accounts.raffle.config.interval)
}

pub fn get_pooled_balance(ctx: Context<ViewRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.pooled_balance)
}

pub fn get_outstanding_request_id(ctx: Context<ViewRaffle>) -> Result<Option<[u8; 32]>> {
    Ok(ctx.accounts.raffle.outstanding_request_id())
}

pub fn get_num_words(_ctx: Context<ViewRaffle>) -> Result<u32> {
    Ok(NUM_WORDS)
}

pub fn get_request_confirmations(_ctx: Context<ViewRaffle>) -> Result<u16> {
    Ok(REQUEST_CONFIRMATIONS)
}

#[derive(Accounts)]
pub struct ViewRaffle<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}
