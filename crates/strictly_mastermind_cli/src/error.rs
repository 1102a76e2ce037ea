//! Error types for the hosting layer.

use derive_more::{Display, Error, From};
use strictly_mastermind::MastermindError;
use tracing::instrument;

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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Number supplier failure.
///
/// When a supplier fails no session is created; retrying is up to the caller.
#[derive(Debug, Clone, Display, Error)]
#[display("Supplier error: {} at {}:{}", message, file, line)]
pub struct SupplierError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SupplierError {
    /// Creates a new supplier error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for SupplierError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("HTTP error: {}", err))
    }
}

/// Failure to start a game: either no numbers or unusable numbers.
#[derive(Debug, Clone, Display, Error, From)]
pub enum StartError {
    /// The supplier produced nothing.
    #[display("{}", _0)]
    Supplier(SupplierError),
    /// The supplied numbers or config were rejected by the core.
    #[display("{}", _0)]
    Game(MastermindError),
}
