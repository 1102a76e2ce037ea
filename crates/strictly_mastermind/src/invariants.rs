//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every submission.
//! The session asserts them in debug builds; tests check them directly.

use crate::{GameSession, Mark, SessionState};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: one history entry per attempt used.
pub struct HistoryMatchesAttempts;

impl Invariant<GameSession> for HistoryMatchesAttempts {
    fn holds(session: &GameSession) -> bool {
        session.history().len() == session.attempts_used()
    }

    fn description() -> &'static str {
        "History length equals attempts used"
    }
}

/// Invariant: attempts never exceed the configured budget.
pub struct AttemptsWithinBudget;

impl Invariant<GameSession> for AttemptsWithinBudget {
    fn holds(session: &GameSession) -> bool {
        session.attempts_used() <= *session.config().max_attempts()
    }

    fn description() -> &'static str {
        "Attempts used never exceed max attempts"
    }
}

/// Invariant: the state agrees with the history.
///
/// `Won` iff the last guess is all exact; `Lost` iff the budget is spent
/// without a win.
pub struct TerminalStateConsistent;

impl Invariant<GameSession> for TerminalStateConsistent {
    fn holds(session: &GameSession) -> bool {
        let solved = session
            .last_guess()
            .is_some_and(|g| g.marks().iter().all(|m| *m == Mark::ExactMatch));
        let exhausted = session.attempts_used() == *session.config().max_attempts();
        let earlier_win = session
            .history()
            .iter()
            .rev()
            .skip(1)
            .any(|g| g.is_solved());

        !earlier_win
            && match session.current_state() {
                SessionState::Won => solved,
                SessionState::Lost => exhausted && !solved,
                SessionState::InProgress => !exhausted && !solved,
            }
    }

    fn description() -> &'static str {
        "Session state matches history and attempt budget"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    HistoryMatchesAttempts,
    AttemptsWithinBudget,
    TerminalStateConsistent,
);
