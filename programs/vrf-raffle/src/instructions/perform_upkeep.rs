use anchor_lang::prelude::*;

use crate::{
    constants::{NUM_WORDS, RAFFLE_SEED, REQUEST_CONFIRMATIONS, REQUEST_SEED},
    randomness::derive_request_id,
    state::{Raffle, RandomnessRequest, RANDOMNESS_REQUEST_ACCOUNT_SIZE},
};

/// Event emitted when a draw is requested from the oracle
#[event]
pub struct DrawRequested {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The request account the oracle answers
    pub request: Pubkey,
    /// Correlation id the fulfillment must echo
    pub request_id: [u8; 32],
    pub gas_lane: [u8; 32],
    pub subscription_id: u64,
    pub confirmations: u16,
    pub callback_compute_limit: u32,
    pub num_words: u32,
}

/// Starts a draw by issuing a single randomness request to the oracle.
///
/// Anyone may call this once `check_upkeep` holds; the caller pays rent for
/// the request account and gets it back when the request is answered or
/// cancelled.
///
/// After execution:
/// - The raffle is in Calculating state with one outstanding request
/// - A `RandomnessRequest` account carries the oracle parameters
///
/// # Errors
/// - `UpkeepNotNeeded` if the interval has not elapsed, the raffle is not
///   open, or the pool is empty. Balance, entrant count and state are logged.
pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle_key = ctx.accounts.raffle.key();
    let raffle = &mut ctx.accounts.raffle;

    let request_id = derive_request_id(&raffle_key, raffle.request_nonce);
    raffle.begin_draw(clock.unix_timestamp, request_id)?;

    let config = raffle.config;
    let request = &mut ctx.accounts.randomness_request;
    request.raffle = raffle_key;
    request.request_id = request_id;
    request.keeper = ctx.accounts.keeper.key();
    request.gas_lane = config.gas_lane;
    request.subscription_id = config.subscription_id;
    request.confirmations = REQUEST_CONFIRMATIONS;
    request.callback_compute_limit = config.callback_compute_limit;
    request.num_words = NUM_WORDS;
    request.requested_at = clock.unix_timestamp;
    request.requested_slot = clock.slot;
    request.bump = ctx.bumps.randomness_request;

    msg!(
        "Draw requested with {} entrants, pool {} lamports",
        raffle.number_of_players(),
        raffle.pooled_balance
    );

    emit!(DrawRequested {
        raffle: raffle_key,
        request: request.key(),
        request_id,
        gas_lane: config.gas_lane,
        subscription_id: config.subscription_id,
        confirmations: REQUEST_CONFIRMATIONS,
        callback_compute_limit: config.callback_compute_limit,
        num_words: NUM_WORDS,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Request account for this draw
    /// PDA with seeds ["request", raffle_key, request_nonce]
    #[account(
        init,
        payer = keeper,
        space = RANDOMNESS_REQUEST_ACCOUNT_SIZE,
        seeds = [
            REQUEST_SEED,
            raffle.key().as_ref(),
            raffle.request_nonce.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub randomness_request: Account<'info, RandomnessRequest>,

    /// Whoever triggers the upkeep
    #[account(mut)]
    pub keeper: Signer<'info>,

    pub system_program: Program<'info, System>,
}
