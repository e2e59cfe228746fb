//! Prime game library.
//!
//! Maria and Ben play several rounds. In each round they start from the
//! integers `1..=n` and take turns, Maria first, picking a prime and
//! removing it together with all its multiples. Whoever cannot move loses
//! the round; whoever takes more rounds wins the game.
//!
//! A round with `π(n)` primes lasts exactly `π(n)` moves, so the whole game
//! reduces to the parity of prime counts, computed with one sieve sized to
//! the largest round.
//!
//! # Example
//!
//! ```
//! use prime_game::{Player, is_winner};
//!
//! assert_eq!(is_winner(5, &[2, 5, 1, 4, 3]), Some(Player::Ben));
//! assert_eq!(is_winner(5, &[2, 3]), None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod game;
mod rules;
mod types;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Evaluation
pub use game::{GameReport, RoundResult, evaluate, is_winner, play};

// Crate-level exports - Rules
pub use rules::{Tally, round_winner};

// Crate-level exports - Game types
pub use types::{Outcome, Player};

// Re-export the sieve so callers need only one dependency.
pub use prime_sieve::{PrimeCountPrefix, PrimeTable};
