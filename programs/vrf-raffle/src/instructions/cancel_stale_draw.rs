use anchor_lang::prelude::*;

use crate::{
    constants::RAFFLE_SEED,
    error::RaffleError,
    state::{Raffle, RandomnessRequest},
};

/// Event emitted when an unanswered request is abandoned
#[event]
pub struct DrawCancelled {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The abandoned request
    pub request_id: [u8; 32],
    /// The timestamp of the cancellation
    pub cancelled_at: i64,
}

/// Instruction to recover a raffle stuck in Calculating state
///
/// # Security Considerations
/// 1. Only the raffle authority may cancel
/// 2. The request must have been outstanding for `DRAW_TIMEOUT_SECONDS`
/// 3. The request account must be the outstanding one
///
/// # Implementation Notes
/// - Entrants and pool are kept; the next upkeep requests a fresh draw
/// - Request rent goes back to the keeper that paid for it
/// - A late fulfillment of the cancelled id is rejected as stale
/// - No funds are transferred in this instruction
pub fn cancel_stale_draw(ctx: Context<CancelStaleDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let request_id = ctx.accounts.raffle.cancel_draw(clock.unix_timestamp)?;
    require!(
        ctx.accounts.randomness_request.request_id == request_id,
        RaffleError::UnknownOrStaleRequest
    );

    msg!("Cancelled stale draw request");

    emit!(DrawCancelled {
        raffle: ctx.accounts.raffle.key(),
        request_id,
        cancelled_at: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CancelStaleDraw<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
        has_one = authority @ RaffleError::NotRaffleAuthority,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        close = keeper,
        has_one = raffle @ RaffleError::UnknownOrStaleRequest,
        has_one = keeper @ RaffleError::KeeperMismatch,
    )]
    pub randomness_request: Account<'info, RandomnessRequest>,

    /// CHECK: rent destination, pinned by `has_one` on the request
    #[account(mut)]
    pub keeper: UncheckedAccount<'info>,

    pub authority: Signer<'info>,
}
