//! Round counters and the game-level decision.

use super::round_winner;
use crate::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Rounds won by each player so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Rounds won by Maria.
    maria_wins: usize,
    /// Rounds won by Ben.
    ben_wins: usize,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one round decided by `prime_count` and returns its winner.
    pub fn record(&mut self, prime_count: usize) -> Player {
        let winner = round_winner(prime_count);
        match winner {
            Player::Maria => self.maria_wins += 1,
            Player::Ben => self.ben_wins += 1,
        }
        winner
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::Maria => self.maria_wins,
            Player::Ben => self.ben_wins,
        }
    }

    /// Total rounds recorded.
    pub fn total(&self) -> usize {
        self.maria_wins + self.ben_wins
    }

    /// The player with strictly more rounds, or no winner on a tie.
    #[instrument]
    pub fn outcome(&self) -> Outcome {
        use std::cmp::Ordering;

        match self.maria_wins.cmp(&self.ben_wins) {
            Ordering::Greater => Outcome::Won(Player::Maria),
            Ordering::Less => Outcome::Won(Player::Ben),
            Ordering::Equal => Outcome::NoWinner,
        }
    }
}

impl FromIterator<usize> for Tally {
    fn from_iter<I: IntoIterator<Item = usize>>(prime_counts: I) -> Self {
        let mut tally = Self::new();
        for count in prime_counts {
            tally.record(count);
        }
        tally
    }
}
