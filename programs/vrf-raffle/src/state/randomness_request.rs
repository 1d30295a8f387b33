use anchor_lang::prelude::*;

// 8 discriminator + 32 raffle + 32 request_id + 32 keeper + 32 gas_lane +
// 8 subscription_id + 2 confirmations + 4 callback_compute_limit + 4 num_words +
// 8 requested_at + 8 requested_slot + 1 bump
pub const RANDOMNESS_REQUEST_ACCOUNT_SIZE: usize =
    8 + 32 + 32 + 32 + 32 + 8 + 2 + 4 + 4 + 8 + 8 + 1;

/// An open randomness request addressed to the oracle.
///
/// The oracle watches for these accounts, waits `confirmations` slots past
/// `requested_slot` and answers with `fulfill_random_words`. The account is
/// closed back to the keeper that paid for it once the request is fulfilled
/// or cancelled.
#[account]
pub struct RandomnessRequest {
    pub raffle: Pubkey,
    pub request_id: [u8; 32],
    /// Rent payer, refunded on close
    pub keeper: Pubkey,
    pub gas_lane: [u8; 32],
    pub subscription_id: u64,
    pub confirmations: u16,
    pub callback_compute_limit: u32,
    pub num_words: u32,
    pub requested_at: i64,
    pub requested_slot: u64,
    pub bump: u8,
}
