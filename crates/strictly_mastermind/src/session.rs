//! One game, driven from start to a terminal state.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::{
    Feedback, GameConfig, Guess, Mark, MastermindError, MastermindErrorKind, MastermindResult,
    ScoredGuess, SecretSequence, SessionState,
};
use tracing::{debug, info, instrument, warn};

/// Guesses scored against one secret.
///
/// State machine: `InProgress` until a guess is all exact (`Won`) or the
/// attempt budget is spent (`Lost`). Both terminal states reject further
/// guesses with `GameAlreadyOver`.
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: SecretSequence,
    config: GameConfig,
    pub(crate) history: Vec<ScoredGuess>,
    attempts_used: usize,
    pub(crate) state: SessionState,
}

impl GameSession {
    /// Binds a new session to `secret`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `config` fails validation, or
    /// `InvalidSecret` if the secret length differs from
    /// `config.sequence_length`.
    #[instrument(skip(secret), fields(secret_len = secret.len()))]
    pub fn new(secret: SecretSequence, config: GameConfig) -> MastermindResult<Self> {
        config.validate()?;

        if secret.len() != *config.sequence_length() {
            return Err(MastermindError::new(MastermindErrorKind::InvalidSecret(format!(
                "secret has {} values, expected {}",
                secret.len(),
                config.sequence_length()
            ))));
        }

        info!(
            sequence_length = config.sequence_length(),
            max_attempts = config.max_attempts(),
            "New game session"
        );

        Ok(Self {
            secret,
            config,
            history: Vec::with_capacity(*config.max_attempts()),
            attempts_used: 0,
            state: SessionState::InProgress,
        })
    }

    /// Scores `guess`, records it and advances the state machine.
    ///
    /// A failed call leaves the session untouched.
    ///
    /// # Errors
    ///
    /// - `GameAlreadyOver` if the session is `Won` or `Lost`.
    /// - `InvalidGuessLength` if the guess length differs from the secret.
    /// - `IncompleteGuess` if any slot is unset.
    #[instrument(skip(self, guess), fields(attempt = self.attempts_used + 1))]
    pub fn submit_guess(&mut self, guess: impl Into<Guess>) -> MastermindResult<ScoredGuess> {
        let guess = guess.into();

        if self.state.is_terminal() {
            warn!(state = %self.state, "Guess submitted after game over");
            return Err(MastermindError::new(MastermindErrorKind::GameAlreadyOver(
                self.state,
            )));
        }

        let expected = *self.config.sequence_length();
        if guess.len() != expected {
            warn!(expected, actual = guess.len(), "Guess length mismatch");
            return Err(MastermindError::new(MastermindErrorKind::InvalidGuessLength {
                expected,
                actual: guess.len(),
            }));
        }

        if let Some(position) = guess.first_unset() {
            warn!(position, "Guess slot unset");
            return Err(MastermindError::new(MastermindErrorKind::IncompleteGuess(
                position,
            )));
        }
        let values: Vec<i32> = guess.slots().iter().flatten().copied().collect();

        let marks = self.score(&values)?;
        let scored = ScoredGuess::new(values, marks);
        debug!(guess = ?scored.guess(), marks = ?scored.marks(), "Guess scored");

        self.history.push(scored.clone());
        self.attempts_used += 1;

        if scored.is_solved() {
            self.state = SessionState::Won;
            info!(attempts_used = self.attempts_used, "Secret found");
        } else if self.attempts_used == *self.config.max_attempts() {
            self.state = SessionState::Lost;
            info!(attempts_used = self.attempts_used, "Attempts exhausted");
        }

        debug_assert!(
            SessionInvariants::check_all(&*self).is_ok(),
            "session invariants violated: {:?}",
            SessionInvariants::check_all(&*self)
        );

        Ok(scored)
    }

    /// Marks each position independently.
    ///
    /// Presence is a membership test on the whole secret: a value occurring
    /// once can earn `ValuePresent` at several guessed positions.
    fn score(&self, values: &[i32]) -> MastermindResult<Vec<Mark>> {
        values
            .iter()
            .enumerate()
            .map(|(position, &value)| -> MastermindResult<Mark> {
                Ok(if value == self.secret.value_at(position)? {
                    Mark::ExactMatch
                } else if self.secret.contains(value) {
                    Mark::ValuePresent
                } else {
                    Mark::NoMatch
                })
            })
            .collect()
    }

    /// Guesses left before the session is lost.
    pub fn remaining_attempts(&self) -> usize {
        self.config.max_attempts() - self.attempts_used
    }

    /// Current lifecycle state.
    pub fn current_state(&self) -> SessionState {
        self.state
    }

    /// Returns true once the session is `Won` or `Lost`.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Counts `(exact, value_present)` marks of `scored`.
    pub fn summarize(scored: &ScoredGuess) -> (usize, usize) {
        scored.counts()
    }

    /// Player-facing verdict for `scored`.
    pub fn feedback(&self, scored: &ScoredGuess) -> Feedback {
        let (exact, present) = Self::summarize(scored);
        Feedback::from_counts(exact, present, *self.config.sequence_length())
    }

    /// Scored guesses in submission order.
    pub fn history(&self) -> &[ScoredGuess] {
        &self.history
    }

    /// The most recent scored guess.
    pub fn last_guess(&self) -> Option<&ScoredGuess> {
        self.history.last()
    }

    /// Completed submissions so far.
    pub fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    /// Parameters this session was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The secret values, available only once the game has ended.
    pub fn reveal(&self) -> Option<&[i32]> {
        self.is_over().then(|| self.secret.values())
    }
}
