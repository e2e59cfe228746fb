//! Per-round winner logic.

use crate::Player;
use tracing::instrument;

/// Decides a single round from the number of primes up to the round's number.
///
/// Players alternately remove a prime and all its multiples, Maria first, so
/// the round lasts exactly `prime_count` moves. An odd count leaves Ben
/// without a move; an even count (including zero) leaves Maria stuck.
#[instrument(level = "trace")]
pub fn round_winner(prime_count: usize) -> Player {
    if prime_count % 2 == 1 {
        Player::Maria
    } else {
        Player::Ben
    }
}
