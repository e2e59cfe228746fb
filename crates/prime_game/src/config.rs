//! Game input loaded from TOML files.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Input for one game: a round count and the number played in each round.
///
/// Missing fields in a file fall back to the classic example game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rounds; games with fewer than one round have no winner.
    #[serde(default = "default_rounds")]
    rounds: i64,

    /// Upper integer of each round, in play order.
    #[serde(default = "default_numbers")]
    numbers: Vec<usize>,
}

#[instrument]
fn default_rounds() -> i64 {
    5
}

#[instrument]
fn default_numbers() -> Vec<usize> {
    vec![2, 5, 1, 4, 3]
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_rounds(), default_numbers())
    }
}

impl GameConfig {
    /// Creates a game configuration.
    pub fn new(rounds: i64, numbers: Vec<usize>) -> Self {
        Self { rounds, numbers }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading game from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read game file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(rounds = config.rounds, len = config.numbers.len(), "Game loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse game: {}", e)))
    }

    /// Replaces fields with any values given explicitly.
    pub fn with_overrides(mut self, rounds: Option<i64>, numbers: Option<Vec<usize>>) -> Self {
        if let Some(rounds) = rounds {
            debug!(rounds, "Overriding rounds");
            self.rounds = rounds;
        }
        if let Some(numbers) = numbers {
            debug!(len = numbers.len(), "Overriding numbers");
            self.numbers = numbers;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_example_game() {
        let config = GameConfig::default();
        assert_eq!(*config.rounds(), 5);
        assert_eq!(config.numbers(), &vec![2, 5, 1, 4, 3]);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = GameConfig::from_toml("rounds = 3").unwrap();
        assert_eq!(*config.rounds(), 3);
        assert_eq!(config.numbers(), &vec![2, 5, 1, 4, 3]);
    }

    #[test]
    fn test_empty_numbers_parse() {
        let config = GameConfig::from_toml("numbers = []").unwrap();
        assert!(config.numbers().is_empty());
    }

    #[test]
    fn test_negative_number_rejected() {
        let err = GameConfig::from_toml("numbers = [1, -2]").unwrap_err();
        assert!(err.message.contains("Failed to parse game"));
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default().with_overrides(Some(0), None);
        assert_eq!(*config.rounds(), 0);
        assert_eq!(config.numbers(), &vec![2, 5, 1, 4, 3]);

        let config = GameConfig::default().with_overrides(None, Some(vec![9]));
        assert_eq!(*config.rounds(), 5);
        assert_eq!(config.numbers(), &vec![9]);
    }
}
