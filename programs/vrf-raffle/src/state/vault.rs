use anchor_lang::prelude::*;

// 8 discriminator, 32 pubkey, 1 bump
pub const VAULT_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Program-owned custody of the pooled entry fees.
#[account]
pub struct Vault {
    pub raffle: Pubkey,
    pub bump: u8,
}
