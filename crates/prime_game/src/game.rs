//! Game evaluation: from rounds and numbers to a winner.

use crate::rules::Tally;
use crate::{Outcome, Player};
use derive_getters::Getters;
use prime_sieve::PrimeCountPrefix;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One round of the game, played on the integers `1..=number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct RoundResult {
    /// The round's upper integer.
    number: usize,
    /// Primes in `1..=number`; also the number of moves in the round.
    prime_count: usize,
    /// Who took the round.
    winner: Player,
}

/// Full record of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameReport {
    /// Requested number of rounds; only checked to be at least 1.
    rounds: i64,
    /// Round numbers, in play order.
    numbers: Vec<usize>,
    /// Per-round results, empty when the input was rejected.
    results: Vec<RoundResult>,
    /// Rounds won by each player.
    tally: Tally,
    /// The game-level decision.
    outcome: Outcome,
}

impl GameReport {
    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// Whether the input was rejected before any round was played.
    pub fn is_rejected(&self) -> bool {
        self.results.is_empty()
    }

    fn rejected(rounds: i64, numbers: &[usize]) -> Self {
        Self {
            rounds,
            numbers: numbers.to_vec(),
            results: Vec::new(),
            tally: Tally::new(),
            outcome: Outcome::NoWinner,
        }
    }
}

/// Plays every round and records the results.
///
/// Input is rejected with [`Outcome::NoWinner`] when `rounds < 1` or
/// `numbers` is empty; no table is built in that case. Otherwise primes are
/// sieved once up to the largest number and each round is decided by the
/// parity of its prime count.
#[instrument(skip(numbers), fields(len = numbers.len()))]
pub fn play(rounds: i64, numbers: &[usize]) -> GameReport {
    if rounds < 1 {
        debug!("Rejected: fewer than one round");
        return GameReport::rejected(rounds, numbers);
    }
    let Some(&max_number) = numbers.iter().max() else {
        debug!("Rejected: no numbers");
        return GameReport::rejected(rounds, numbers);
    };

    let prefix = PrimeCountPrefix::new(max_number);
    let counts = prefix.as_slice();
    let mut tally = Tally::new();
    let results: Vec<RoundResult> = numbers
        .iter()
        .map(|&number| {
            // The table is sized to `max_number`, so `number` is always in range.
            let prime_count = counts[number];
            let winner = tally.record(prime_count);
            RoundResult {
                number,
                prime_count,
                winner,
            }
        })
        .collect();

    let outcome = tally.outcome();
    debug!(
        maria_wins = tally.maria_wins(),
        ben_wins = tally.ben_wins(),
        "Rounds tallied"
    );
    info!(%outcome, "Game decided");

    GameReport {
        rounds,
        numbers: numbers.to_vec(),
        results,
        tally,
        outcome,
    }
}

/// Decides the game without keeping per-round detail.
#[instrument(skip(numbers), fields(len = numbers.len()))]
pub fn evaluate(rounds: i64, numbers: &[usize]) -> Outcome {
    *play(rounds, numbers).outcome()
}

/// Name of the winner, or `None` for a tie or rejected input.
pub fn is_winner(rounds: i64, numbers: &[usize]) -> Option<Player> {
    evaluate(rounds, numbers).winner()
}
