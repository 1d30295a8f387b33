use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use arrayref::array_refs;

use crate::{constants::REQUEST_SEED, error::RaffleError};

/// Derives the correlation id for the `nonce`-th randomness request of a raffle.
///
/// The id is unique per (raffle, nonce) pair, so an answer to a previous draw
/// can never be mistaken for the current one.
pub fn derive_request_id(raffle: &Pubkey, nonce: u64) -> [u8; 32] {
    hashv(&[REQUEST_SEED, raffle.as_ref(), &nonce.to_le_bytes()]).to_bytes()
}

/// Reduces a big-endian 256-bit random word modulo `modulus`.
///
/// The word is folded one 64-bit limb at a time, which gives the exact
/// `word mod modulus` result of uint256 arithmetic without a bignum type.
pub fn reduce_word(word: &[u8; 32], modulus: u64) -> Result<u64> {
    require!(modulus > 0, RaffleError::IndexOutOfRange);

    let (l0, l1, l2, l3) = array_refs![word, 8, 8, 8, 8];
    let modulus = modulus as u128;

    let remainder = [l0, l1, l2, l3].iter().fold(0u128, |acc, limb| {
        // acc < modulus <= u64::MAX, so the shift cannot overflow
        ((acc << 64) | u64::from_be_bytes(**limb) as u128) % modulus
    });

    Ok(remainder as u64)
}

/// Encodes a small integer as a big-endian 256-bit word.
#[cfg(test)]
pub(crate) fn word_from_u64(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}
