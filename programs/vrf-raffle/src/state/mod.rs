pub use raffle::*;
pub use randomness_request::*;
pub use vault::*;

pub mod raffle;
pub mod randomness_request;
pub mod vault;
