//! Turn loop connecting a session to its input and output.

use crate::{GuessInput, GuessSource, ResultSink};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::io;
use strictly_mastermind::{GameSession, SessionState};
use tracing::{info, instrument, warn};

/// Final outcome of one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameReport {
    /// State when the loop stopped; `InProgress` if the player quit.
    state: SessionState,
    /// Guesses scored.
    attempts_used: usize,
    /// The secret, present only once the game has ended.
    secret: Option<Vec<i32>>,
}

impl GameReport {
    /// Snapshots `session`.
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            state: session.current_state(),
            attempts_used: session.attempts_used(),
            secret: session.reveal().map(<[i32]>::to_vec),
        }
    }
}

/// Plays `session` until it ends or `source` quits.
///
/// Rejected guesses and partial drafts are shown to `sink` and cost no
/// attempt.
#[instrument(skip_all)]
pub fn play<S, K>(session: &mut GameSession, source: &mut S, sink: &mut K) -> io::Result<GameReport>
where
    S: GuessSource + ?Sized,
    K: ResultSink + ?Sized,
{
    while !session.is_over() {
        sink.prompt(session)?;
        match source.next_guess(session)? {
            GuessInput::Quit => {
                info!(attempts_used = session.attempts_used(), "Player quit");
                break;
            }
            GuessInput::Pending(draft) => sink.drafted(&draft)?,
            GuessInput::Invalid(message) => {
                warn!(%message, "Unreadable guess");
                sink.invalid_input(&message)?;
            }
            GuessInput::Guess(guess) => match session.submit_guess(guess) {
                Ok(scored) => sink.scored(session, &scored)?,
                Err(error) => sink.rejected(&error)?,
            },
        }
    }

    let report = GameReport::from_session(session);
    info!(state = %report.state, attempts_used = report.attempts_used, "Game finished");
    sink.finished(&report)?;
    Ok(report)
}
