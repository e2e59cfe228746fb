//! Core domain types for the prime game.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Player {
    /// Maria moves first; she takes every round with an odd prime count.
    Maria,
    /// Ben moves second; he takes every round with an even prime count.
    Ben,
}

/// Result of a whole game.
///
/// Renders as the winner's name, or `None` when nobody won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// One player took strictly more rounds.
    #[display("{_0}")]
    Won(Player),
    /// Rounds were split evenly, or the input was rejected.
    #[display("None")]
    NoWinner,
}

impl Outcome {
    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::NoWinner => None,
        }
    }
}

impl From<Option<Player>> for Outcome {
    fn from(winner: Option<Player>) -> Self {
        winner.map_or(Outcome::NoWinner, Outcome::Won)
    }
}
