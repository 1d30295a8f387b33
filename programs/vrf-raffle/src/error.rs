use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Entry amount is below the entrance fee")]
    InsufficientFee,
    #[msg("Raffle is not open for entries")]
    NotOpen,
    #[msg("Raffle has reached its maximum number of entrants")]
    RaffleFull,
    #[msg("Upkeep is not needed: interval, state, balance or entrants check failed")]
    UpkeepNotNeeded,
    #[msg("Randomness request is unknown, stale or already fulfilled")]
    UnknownOrStaleRequest,
    #[msg("Only the configured oracle can fulfill randomness requests")]
    OnlyOracleCanFulfill,
    #[msg("Fulfillment carried no random words")]
    MissingRandomWords,
    #[msg("Winner account does not match the drawn entrant")]
    WinnerAccountMismatch,
    #[msg("Prize transfer failed")]
    TransferFailed,
    #[msg("Entrant index is out of range")]
    IndexOutOfRange,
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Draw interval must be greater than zero")]
    InvalidInterval,
    #[msg("Callback compute limit is outside the allowed range")]
    InvalidCallbackComputeLimit,
    #[msg("No randomness request is outstanding")]
    NoOutstandingRequest,
    #[msg("Outstanding request has not timed out yet")]
    DrawNotStale,
    #[msg("Only the raffle authority can perform this action")]
    NotRaffleAuthority,
    #[msg("Rent refund must go to the keeper that opened the request")]
    KeeperMismatch,
}
