use anchor_lang::prelude::*;

use crate::{
    constants::{DRAW_TIMEOUT_SECONDS, MAX_CALLBACK_COMPUTE_UNITS, MAX_ENTRANTS},
    error::RaffleError,
    randomness::reduce_word,
};

// 8 (entrance_fee) + 8 (interval) + 32 (oracle) + 32 (gas_lane) +
// 8 (subscription_id) + 4 (callback_compute_limit)
pub const RAFFLE_CONFIG_SIZE: usize = 8 + 8 + 32 + 32 + 8 + 4;

// 32 (request_id) + 8 (requested_at)
pub const OUTSTANDING_REQUEST_SIZE: usize = 32 + 8;

// Space calculation:
// 8 (discriminator) +
// 32 (authority) +
// RAFFLE_CONFIG_SIZE (config) +
// 32 (vault) +
// 1 (raffle_state) +
// 4 + 32 * MAX_ENTRANTS (entrants) +
// 8 (pooled_balance) +
// 8 (last_draw_timestamp) +
// 1 + OUTSTANDING_REQUEST_SIZE (outstanding_request: Option<OutstandingRequest>) +
// 8 (request_nonce) +
// 33 (recent_winner: Option<Pubkey>) +
// 1 (bump)
pub const RAFFLE_ACCOUNT_SIZE: usize = 8
    + 32
    + RAFFLE_CONFIG_SIZE
    + 32
    + 1
    + 4
    + 32 * MAX_ENTRANTS
    + 8
    + 8
    + 1
    + OUTSTANDING_REQUEST_SIZE
    + 8
    + 33
    + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleState {
    Open = 0,
    Calculating = 1,
}

/// Parameters fixed at initialization.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RaffleConfig {
    /// Minimum lamports accepted per entry
    pub entrance_fee: u64,
    /// Minimum seconds between two draws
    pub interval: i64,
    /// The only signer allowed to fulfill randomness requests
    pub oracle: Pubkey,
    /// Oracle key hash selecting the proving lane
    pub gas_lane: [u8; 32],
    /// Oracle subscription billed for requests
    pub subscription_id: u64,
    /// Compute units the oracle must provision for the fulfillment
    pub callback_compute_limit: u32,
}

impl RaffleConfig {
    /// `min_entrance_fee` is the rent-exempt minimum of an empty account, so
    /// any prize can land in a winner wallet that holds nothing else.
    pub fn validate(&self, min_entrance_fee: u64) -> Result<()> {
        require!(
            self.entrance_fee > 0 && self.entrance_fee >= min_entrance_fee,
            RaffleError::InvalidEntranceFee
        );
        require!(self.interval > 0, RaffleError::InvalidInterval);
        require!(
            self.callback_compute_limit > 0
                && self.callback_compute_limit <= MAX_CALLBACK_COMPUTE_UNITS,
            RaffleError::InvalidCallbackComputeLimit
        );
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutstandingRequest {
    pub request_id: [u8; 32],
    pub requested_at: i64,
}

/// Each clause of the upkeep predicate, with the values behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub interval_elapsed: bool,
    pub is_open: bool,
    pub has_balance: bool,
    pub has_players: bool,
    pub balance: u64,
    pub entrant_count: u64,
    pub raffle_state: RaffleState,
}

impl UpkeepStatus {
    pub fn upkeep_needed(&self) -> bool {
        self.interval_elapsed && self.is_open && self.has_balance && self.has_players
    }
}

/// Bookkeeping result of a settled draw, handed to the payout step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    pub request_id: [u8; 32],
    pub winner: Pubkey,
    pub winner_index: u64,
    pub prize: u64,
}

#[account]
pub struct Raffle {
    pub authority: Pubkey,
    pub config: RaffleConfig,
    pub vault: Pubkey,
    pub raffle_state: RaffleState,
    pub entrants: Vec<Pubkey>,
    pub pooled_balance: u64,
    pub last_draw_timestamp: i64,
    pub outstanding_request: Option<OutstandingRequest>,
    pub request_nonce: u64,
    pub recent_winner: Option<Pubkey>,
    pub bump: u8,
}

impl Raffle {
    pub fn new(authority: Pubkey, config: RaffleConfig, vault: Pubkey, bump: u8, now: i64) -> Self {
        Self {
            authority,
            config,
            vault,
            raffle_state: RaffleState::Open,
            entrants: Vec::new(),
            pooled_balance: 0,
            last_draw_timestamp: now,
            outstanding_request: None,
            request_nonce: 0,
            recent_winner: None,
            bump,
        }
    }

    /// Records one entry for `player` paying `amount`.
    ///
    /// A call is a single entry no matter how much it overpays; the surplus
    /// stays in the pool.
    pub fn admit(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(
            amount >= self.config.entrance_fee,
            RaffleError::InsufficientFee
        );
        require!(
            self.raffle_state == RaffleState::Open,
            RaffleError::NotOpen
        );
        require!(self.entrants.len() < MAX_ENTRANTS, RaffleError::RaffleFull);

        self.pooled_balance = self
            .pooled_balance
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;
        self.entrants.push(player);

        Ok(())
    }

    pub fn upkeep_status(&self, now: i64) -> UpkeepStatus {
        UpkeepStatus {
            interval_elapsed: now.saturating_sub(self.last_draw_timestamp) >= self.config.interval,
            is_open: self.raffle_state == RaffleState::Open,
            has_balance: self.pooled_balance > 0,
            has_players: !self.entrants.is_empty(),
            balance: self.pooled_balance,
            entrant_count: self.entrants.len() as u64,
            raffle_state: self.raffle_state,
        }
    }

    pub fn check_upkeep(&self, now: i64) -> bool {
        self.upkeep_status(now).upkeep_needed()
    }

    /// Moves the raffle into `Calculating` with `request_id` as the single
    /// outstanding request.
    pub fn begin_draw(&mut self, now: i64, request_id: [u8; 32]) -> Result<()> {
        let status = self.upkeep_status(now);
        if !status.upkeep_needed() {
            msg!(
                "Upkeep not needed: balance={} entrants={} state={:?}",
                status.balance,
                status.entrant_count,
                status.raffle_state
            );
            msg!(
                "interval_elapsed={} is_open={} has_balance={} has_players={}",
                status.interval_elapsed,
                status.is_open,
                status.has_balance,
                status.has_players
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        self.raffle_state = RaffleState::Calculating;
        self.outstanding_request = Some(OutstandingRequest {
            request_id,
            requested_at: now,
        });
        self.request_nonce = self
            .request_nonce
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;

        Ok(())
    }

    /// Resolves the outstanding request with `random_words[0]`.
    ///
    /// Every bookkeeping change of the draw is applied here, before the
    /// caller moves any lamports. After this returns the raffle is already
    /// open for the next round and the request id can no longer match.
    pub fn settle_draw(
        &mut self,
        request_id: &[u8; 32],
        random_words: &[[u8; 32]],
        now: i64,
    ) -> Result<DrawOutcome> {
        let outstanding = self
            .outstanding_request
            .ok_or(RaffleError::UnknownOrStaleRequest)?;
        require!(
            outstanding.request_id == *request_id,
            RaffleError::UnknownOrStaleRequest
        );
        let word = random_words.first().ok_or(RaffleError::MissingRandomWords)?;

        let winner_index = reduce_word(word, self.entrants.len() as u64)?;
        let winner = self.entrants[winner_index as usize];
        let prize = self.pooled_balance;

        self.outstanding_request = None;
        self.entrants.clear();
        self.pooled_balance = 0;
        self.recent_winner = Some(winner);
        self.last_draw_timestamp = now;
        self.raffle_state = RaffleState::Open;

        Ok(DrawOutcome {
            request_id: outstanding.request_id,
            winner,
            winner_index,
            prize,
        })
    }

    /// Abandons a request the oracle never answered. Entrants and pool are kept.
    pub fn cancel_draw(&mut self, now: i64) -> Result<[u8; 32]> {
        let outstanding = self
            .outstanding_request
            .ok_or(RaffleError::NoOutstandingRequest)?;
        let waited = now
            .checked_sub(outstanding.requested_at)
            .ok_or(RaffleError::Overflow)?;
        require!(waited >= DRAW_TIMEOUT_SECONDS, RaffleError::DrawNotStale);

        self.outstanding_request = None;
        self.raffle_state = RaffleState::Open;

        Ok(outstanding.request_id)
    }

    pub fn player(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.entrants.get(index))
            .copied()
            .ok_or_else(|| error!(RaffleError::IndexOutOfRange))
    }

    pub fn number_of_players(&self) -> u64 {
        self.entrants.len() as u64
    }

    pub fn outstanding_request_id(&self) -> Option<[u8; 32]> {
        self.outstanding_request.map(|request| request.request_id)
    }
}
