pub mod cancel_stale_draw;
pub mod enter_raffle;
pub mod fulfill_random_words;
pub mod initialize_raffle;
pub mod perform_upkeep;
pub mod queries;

pub use cancel_stale_draw::*;
pub use enter_raffle::*;
pub use fulfill_random_words::*;
pub use initialize_raffle::*;
pub use perform_upkeep::*;
pub use queries::*;
