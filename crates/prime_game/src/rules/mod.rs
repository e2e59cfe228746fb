//! Game rules for the prime game.
//!
//! Pure functions deciding who takes a round and who takes the game.
//! Rules only see prime counts; building those counts is the evaluator's job.

pub mod round;
pub mod tally;

pub use round::round_winner;
pub use tally::Tally;
