//! Core domain types for the guessing game.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Classification of one guessed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Guessed value equals the secret value at the same position.
    #[strum(to_string = "exact")]
    ExactMatch,
    /// Guessed value occurs somewhere in the secret.
    #[strum(to_string = "present")]
    ValuePresent,
    /// Guessed value does not occur in the secret.
    #[strum(to_string = "miss")]
    NoMatch,
}

/// Lifecycle state of a [`crate::GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum SessionState {
    /// Guesses are still accepted.
    InProgress,
    /// The secret was found.
    Won,
    /// Attempts ran out.
    Lost,
}

impl SessionState {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionState::InProgress)
    }
}

/// One candidate sequence.
///
/// A slot is `None` when the player left it unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Guess {
    slots: Vec<Option<i32>>,
}

impl Guess {
    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the guess has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The raw slots.
    pub fn slots(&self) -> &[Option<i32>] {
        &self.slots
    }

    /// Index of the first unset slot, if any.
    pub fn first_unset(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }
}

impl From<Vec<i32>> for Guess {
    fn from(values: Vec<i32>) -> Self {
        Self::new(values.into_iter().map(Some).collect())
    }
}

impl From<&[i32]> for Guess {
    fn from(values: &[i32]) -> Self {
        Self::new(values.iter().copied().map(Some).collect())
    }
}

impl From<Vec<Option<i32>>> for Guess {
    fn from(slots: Vec<Option<i32>>) -> Self {
        Self::new(slots)
    }
}

/// A submitted guess together with its per-position marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ScoredGuess {
    guess: Vec<i32>,
    marks: Vec<Mark>,
}

impl ScoredGuess {
    /// The guessed values.
    pub fn guess(&self) -> &[i32] {
        &self.guess
    }

    /// One mark per guessed position.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Returns true if every mark is [`Mark::ExactMatch`].
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|m| *m == Mark::ExactMatch)
    }

    /// Counts `(exact, value_present)` marks.
    pub fn counts(&self) -> (usize, usize) {
        self.marks.iter().fold((0, 0), |(exact, present), mark| match mark {
            Mark::ExactMatch => (exact + 1, present),
            Mark::ValuePresent => (exact, present + 1),
            Mark::NoMatch => (exact, present),
        })
    }
}
