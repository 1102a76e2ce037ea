//! Game parameters fixed at session construction.

use crate::{MastermindError, MastermindErrorKind, MastermindResult};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Configuration for one game.
///
/// Defaults reproduce the classic two-slot game: values `1..=2`,
/// three attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of the secret and of every guess.
    sequence_length: usize,
    /// Smallest allowed value (inclusive).
    number_min: i32,
    /// Largest allowed value (inclusive).
    number_max: i32,
    /// Number of guesses allowed.
    max_attempts: usize,
}

impl GameConfig {
    /// Creates a configuration without validating it.
    ///
    /// Use [`GameConfig::validate`] or let [`crate::GameSession::new`] do it.
    #[instrument]
    pub fn new(
        sequence_length: usize,
        number_min: i32,
        number_max: i32,
        max_attempts: usize,
    ) -> Self {
        Self {
            sequence_length,
            number_min,
            number_max,
            max_attempts,
        }
    }

    /// Checks that the parameters describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for a zero length, zero attempts or an
    /// inverted value range.
    #[instrument]
    pub fn validate(&self) -> MastermindResult<()> {
        if self.sequence_length == 0 {
            return Err(MastermindError::new(MastermindErrorKind::InvalidConfig(
                "sequence_length must be at least 1".to_string(),
            )));
        }
        if self.max_attempts == 0 {
            return Err(MastermindError::new(MastermindErrorKind::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            )));
        }
        if self.number_min > self.number_max {
            return Err(MastermindError::new(MastermindErrorKind::InvalidConfig(
                format!(
                    "number_min {} is greater than number_max {}",
                    self.number_min, self.number_max
                ),
            )));
        }
        Ok(())
    }

    /// Returns true if `value` lies within `[number_min, number_max]`.
    pub fn in_range(&self, value: i32) -> bool {
        (self.number_min..=self.number_max).contains(&value)
    }

    /// Returns a copy with the sequence length replaced.
    pub fn with_sequence_length(mut self, sequence_length: usize) -> Self {
        self.sequence_length = sequence_length;
        self
    }

    /// Returns a copy with the value range replaced.
    pub fn with_range(mut self, number_min: i32, number_max: i32) -> Self {
        self.number_min = number_min;
        self.number_max = number_max;
        self
    }

    /// Returns a copy with the attempt budget replaced.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(2, 1, 2, 3)
    }
}
