use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, VAULT_SEED},
    error::RaffleError,
    payout::{close_account, transfer_prize},
    state::{Raffle, RandomnessRequest, Vault, VAULT_ACCOUNT_SIZE},
};

/// Event emitted when a draw is settled
#[event]
pub struct WinnerPicked {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// Position of the winning entry in the round
    pub winner_index: u64,
    /// Lamports paid to the winner
    pub prize: u64,
    /// The request this draw answered
    pub request_id: [u8; 32],
}

/// Oracle callback resolving the outstanding randomness request.
///
/// The winner is `random_words[0] mod entrant_count`, read as a big-endian
/// uint256. The oracle computes the same index off-chain and passes the
/// matching entrant as the `winner` account.
///
/// Order of operations:
/// 1. Validate the request id against the outstanding request
/// 2. Commit all raffle bookkeeping (entrants, pool, state, timestamp)
/// 3. Check the request account and close it back to its keeper
/// 4. Emit `WinnerPicked`
/// 5. Move the prize out of the vault
///
/// The request account is read only after step 1, so answering a request
/// that was already fulfilled or cancelled (its account closed) fails as
/// stale rather than on account loading.
///
/// Any failure, including the payout, aborts the transaction and leaves the
/// raffle exactly as it was before the call.
///
/// # Errors
/// - `OnlyOracleCanFulfill` if the signer is not the configured oracle
/// - `UnknownOrStaleRequest` if the id is not the outstanding request
/// - `UnknownOrStaleRequest` if `randomness_request` is not the account
///   recorded for that id
/// - `MissingRandomWords` if no word was supplied
/// - `WinnerAccountMismatch` if `winner` is not the drawn entrant
/// - `TransferFailed` if the vault cannot pay the prize
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: [u8; 32],
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let outcome = ctx
        .accounts
        .raffle
        .settle_draw(&request_id, &random_words, now)?;

    require_keys_eq!(
        ctx.accounts.winner.key(),
        outcome.winner,
        RaffleError::WinnerAccountMismatch
    );

    let request_info = ctx.accounts.randomness_request.to_account_info();
    require_keys_eq!(
        *request_info.owner,
        crate::ID,
        RaffleError::UnknownOrStaleRequest
    );
    let request = {
        let data = request_info.try_borrow_data()?;
        RandomnessRequest::try_deserialize(&mut &data[..])
            .map_err(|_| error!(RaffleError::UnknownOrStaleRequest))?
    };
    require_keys_eq!(
        request.raffle,
        ctx.accounts.raffle.key(),
        RaffleError::UnknownOrStaleRequest
    );
    require!(
        request.request_id == outcome.request_id,
        RaffleError::UnknownOrStaleRequest
    );
    require_keys_eq!(
        ctx.accounts.keeper.key(),
        request.keeper,
        RaffleError::KeeperMismatch
    );
    close_account(&request_info, &ctx.accounts.keeper.to_account_info())?;

    msg!(
        "Winner #{} of the round: {}",
        outcome.winner_index,
        outcome.winner
    );

    emit!(WinnerPicked {
        raffle: ctx.accounts.raffle.key(),
        winner: outcome.winner,
        winner_index: outcome.winner_index,
        prize: outcome.prize,
        request_id: outcome.request_id,
    });

    let rent_floor = Rent::get()?.minimum_balance(VAULT_ACCOUNT_SIZE);
    transfer_prize(
        &ctx.accounts.vault.to_account_info(),
        &ctx.accounts.winner.to_account_info(),
        outcome.prize,
        rent_floor,
    )?;

    Ok(())
}

#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
        has_one = vault,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [
            VAULT_SEED,
            raffle.key().as_ref(),
        ],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: the request being answered; owner, raffle and id are checked
    /// in the handler after the raffle confirms the id is outstanding
    #[account(mut)]
    pub randomness_request: UncheckedAccount<'info>,

    #[account(
        address = raffle.config.oracle @ RaffleError::OnlyOracleCanFulfill,
    )]
    pub oracle: Signer<'info>,

    /// CHECK: receives the request rent; must match the recorded keeper
    #[account(mut)]
    pub keeper: UncheckedAccount<'info>,

    /// The drawn entrant receiving the prize
    #[account(mut)]
    pub winner: SystemAccount<'info>,
}
