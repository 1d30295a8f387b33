pub const RAFFLE_SEED: &[u8] = b"raffle";
pub const VAULT_SEED: &[u8] = b"vault";
pub const REQUEST_SEED: &[u8] = b"request";

/// Block confirmations the oracle waits before answering a request.
pub const REQUEST_CONFIRMATIONS: u16 = 3;
/// Random words requested per draw. Only the first one is consumed.
pub const NUM_WORDS: u32 = 1;

/// Upper bound of a Solana transaction compute budget.
pub const MAX_CALLBACK_COMPUTE_UNITS: u32 = 1_400_000;

/// Entrant capacity of the raffle account.
pub const MAX_ENTRANTS: usize = 256;

/// How long a request may stay unanswered before the authority can cancel it.
pub const DRAW_TIMEOUT_SECONDS: i64 = 24 * 60 * 60;
