use anchor_lang::{prelude::*, solana_program::system_program};

use crate::error::RaffleError;

/// Moves `amount` lamports from the program-owned vault to the winner.
///
/// The vault never drops below `rent_floor`. Balances are compared before and
/// after so a short or inflated credit fails the whole instruction.
pub fn transfer_prize<'info>(
    vault: &AccountInfo<'info>,
    winner: &AccountInfo<'info>,
    amount: u64,
    rent_floor: u64,
) -> Result<()> {
    let vault_before = vault.lamports();
    let winner_before = winner.lamports();

    let available = vault_before
        .checked_sub(rent_floor)
        .ok_or(RaffleError::TransferFailed)?;
    require!(amount <= available, RaffleError::TransferFailed);

    // Direct debit only works because the vault is a PDA owned by this program.
    vault
        .sub_lamports(amount)
        .map_err(|_| RaffleError::TransferFailed)?;
    winner
        .add_lamports(amount)
        .map_err(|_| RaffleError::TransferFailed)?;

    let expected_winner = winner_before
        .checked_add(amount)
        .ok_or(RaffleError::Overflow)?;
    require!(
        winner.lamports() == expected_winner && vault.lamports() == vault_before - amount,
        RaffleError::TransferFailed
    );

    msg!("Paid {} lamports to {}", amount, winner.key);
    Ok(())
}

/// Closes a program-owned account, returning all of its lamports to
/// `destination` and handing it back to the system program.
pub fn close_account<'info>(
    account: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<()> {
    let refund = account.lamports();
    let credited = destination
        .lamports()
        .checked_add(refund)
        .ok_or(RaffleError::Overflow)?;

    **destination.try_borrow_mut_lamports()? = credited;
    **account.try_borrow_mut_lamports()? = 0;

    account.assign(&system_program::ID);
    account.resize(0)?;
    Ok(())
}
