//! Strictly Mastermind - pure guess-the-code game logic
//!
//! A hidden numeric sequence is scored against repeated guesses. Each guessed
//! position is classified as an exact match, a value present elsewhere, or
//! no match, until the sequence is found or attempts run out.
//!
//! # Architecture
//!
//! - **SecretSequence**: immutable target with an O(1) presence index
//! - **GameSession**: validates, scores and records guesses; owns the
//!   `InProgress -> Won | Lost` state machine
//! - **GuessDraft**: slot-by-slot guess entry with reset
//! - **Feedback**: player-facing verdict for a scored guess
//!
//! # Example
//!
//! ```
//! use strictly_mastermind::{GameConfig, GameSession, Mark, SecretSequence, SessionState};
//!
//! # fn main() -> Result<(), strictly_mastermind::MastermindError> {
//! let config = GameConfig::default();
//! let secret = SecretSequence::from_config(vec![1, 2], &config)?;
//! let mut session = GameSession::new(secret, config)?;
//!
//! let scored = session.submit_guess(vec![1, 1])?;
//! assert_eq!(scored.marks(), &[Mark::ExactMatch, Mark::ValuePresent]);
//! assert_eq!(GameSession::summarize(&scored), (1, 1));
//!
//! session.submit_guess(vec![1, 2])?;
//! assert_eq!(session.current_state(), SessionState::Won);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod draft;
mod error;
mod feedback;
pub mod invariants;
mod secret;
mod session;
mod types;

pub use config::GameConfig;
pub use draft::GuessDraft;
pub use error::{MastermindError, MastermindErrorKind, MastermindResult};
pub use feedback::Feedback;
pub use secret::SecretSequence;
pub use session::GameSession;
pub use types::{Guess, Mark, ScoredGuess, SessionState};
