use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, VAULT_SEED},
    state::{Raffle, RaffleConfig, Vault, RAFFLE_ACCOUNT_SIZE, VAULT_ACCOUNT_SIZE},
};

/// Event emitted when the raffle is created
#[event]
pub struct RaffleInitialized {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The operator of the raffle
    pub authority: Pubkey,
    /// Entrance fee in lamports
    pub entrance_fee: u64,
    /// Minimum seconds between draws
    pub interval: i64,
    /// The oracle allowed to fulfill requests
    pub oracle: Pubkey,
}

/// Instruction to create the raffle and its vault
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `config` - Entrance fee, draw interval and oracle parameters
///
/// # Security Considerations
/// 1. Entrance fee must be non-zero, otherwise an empty pool could pass upkeep,
///    and at least the rent-exempt minimum of an empty account, otherwise a
///    prize paid into a drained wallet fails the runtime rent check
/// 2. Interval must be positive so every draw strictly advances the draw timestamp
/// 3. Callback compute limit must fit in a single transaction budget
///
/// # Implementation Notes
/// - Config is written once here and never mutated afterwards
/// - The signer becomes the raffle authority, used only for the recovery path
/// - The last draw timestamp starts at the current time
pub fn initialize_raffle(ctx: Context<InitializeRaffle>, config: RaffleConfig) -> Result<()> {
    config.validate(Rent::get()?.minimum_balance(0))?;

    let now = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();
    let vault_key = ctx.accounts.vault.key();
    let authority = ctx.accounts.authority.key();

    ctx.accounts.vault.raffle = raffle_key;
    ctx.accounts.vault.bump = ctx.bumps.vault;

    ctx.accounts.raffle.set_inner(Raffle::new(
        authority,
        config,
        vault_key,
        ctx.bumps.raffle,
        now,
    ));

    msg!(
        "Raffle initialized: fee={} interval={}s",
        config.entrance_fee,
        config.interval
    );

    emit!(RaffleInitialized {
        raffle: raffle_key,
        authority,
        entrance_fee: config.entrance_fee,
        interval: config.interval,
        oracle: config.oracle,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    #[account(
        init,
        payer = authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// Vault PDA holding the pooled entry fees
    #[account(
        init,
        payer = authority,
        space = VAULT_ACCOUNT_SIZE,
        seeds = [
            VAULT_SEED,
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
