//! Error types for the game core.

use crate::SessionState;
use derive_more::{Display, Error};
use tracing::instrument;

/// The specific failure behind a [`MastermindError`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MastermindErrorKind {
    /// Secret construction data was malformed.
    #[display("Invalid secret: {}", _0)]
    InvalidSecret(String),

    /// Positional access outside the sequence.
    #[display("Position {} is out of range for length {}", position, len)]
    IndexOutOfRange {
        /// Requested position.
        position: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// Guess length does not match the configured sequence length.
    #[display("Guess has {} slots, expected {}", actual, expected)]
    InvalidGuessLength {
        /// Configured sequence length.
        expected: usize,
        /// Length of the submitted guess.
        actual: usize,
    },

    /// A guess slot was left unset.
    #[display("Guess slot {} is unset", _0)]
    IncompleteGuess(usize),

    /// A guess was submitted after the game ended.
    #[display("Game is already over ({})", _0)]
    GameAlreadyOver(SessionState),

    /// Game configuration is unusable.
    #[display("Invalid config: {}", _0)]
    InvalidConfig(String),

    /// Every slot of a guess draft is already filled.
    #[display("All {} slots are filled; submit or reset the guess", _0)]
    GuessFull(usize),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct MastermindError {
    /// What went wrong.
    pub kind: MastermindErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MastermindError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: MastermindErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &MastermindErrorKind {
        &self.kind
    }
}

impl From<MastermindErrorKind> for MastermindError {
    #[track_caller]
    fn from(kind: MastermindErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result alias for game operations.
pub type MastermindResult<T> = Result<T, MastermindError>;
