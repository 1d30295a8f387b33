use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    constants::{RAFFLE_SEED, VAULT_SEED},
    error::RaffleError,
    state::{Raffle, Vault},
};

/// Event emitted when a player enters the raffle
#[event]
pub struct RaffleEntered {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The entrant's address
    pub player: Pubkey,
    /// Lamports paid for this entry
    pub amount: u64,
    /// Number of entries after this one
    pub entrant_count: u64,
}

/// Instruction to enter the current round
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports paid, at least the entrance fee
///
/// # Security Considerations
/// 1. Rejects payments below the entrance fee
/// 2. Rejects entries while a draw is being calculated
/// 3. Verifies the vault received exactly `amount` lamports
///
/// # Implementation Notes
/// - One call is one entry; overpayment is pooled and not refunded
/// - Updates state before performing external calls
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.raffle.admit(player, amount)?;

    // Store pre-transfer balance for verification
    let pre_transfer_balance = ctx.accounts.vault.to_account_info().lamports();

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    let post_transfer_balance = ctx.accounts.vault.to_account_info().lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(amount)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    let entrant_count = ctx.accounts.raffle.number_of_players();
    msg!("Entry #{} from {}", entrant_count, player);

    emit!(RaffleEntered {
        raffle: ctx.accounts.raffle.key(),
        player,
        amount,
        entrant_count,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
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

    /// The entrant, paying the entry amount
    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}
