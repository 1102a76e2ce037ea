//! Player-facing verdict for a scored guess.

use serde::{Deserialize, Serialize};

/// Outcome message derived from mark counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Feedback {
    /// Every position matched.
    #[display("Correct!")]
    Correct,
    /// Some exact matches and some values present elsewhere.
    #[display("{} correct value and location + {} correct value", exact, present)]
    Mixed {
        /// Exact matches.
        exact: usize,
        /// Values present elsewhere.
        present: usize,
    },
    /// Only exact matches, but not all positions.
    #[display("{} correct value and location", _0)]
    ExactOnly(usize),
    /// Only values present elsewhere.
    #[display("{} correct value but incorrect location", _0)]
    ValueOnly(usize),
    /// Nothing matched.
    #[display("Wrong numbers!")]
    Miss,
}

impl Feedback {
    /// Picks the verdict for `(exact, present)` counts over `length` positions.
    pub fn from_counts(exact: usize, present: usize, length: usize) -> Self {
        match (exact, present) {
            (e, _) if e == length => Feedback::Correct,
            (0, 0) => Feedback::Miss,
            (0, p) => Feedback::ValueOnly(p),
            (e, 0) => Feedback::ExactOnly(e),
            (e, p) => Feedback::Mixed {
                exact: e,
                present: p,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_each_verdict() {
        assert_eq!(Feedback::from_counts(2, 0, 2), Feedback::Correct);
        assert_eq!(
            Feedback::from_counts(1, 1, 2),
            Feedback::Mixed { exact: 1, present: 1 }
        );
        assert_eq!(Feedback::from_counts(1, 0, 2), Feedback::ExactOnly(1));
        assert_eq!(Feedback::from_counts(0, 2, 2), Feedback::ValueOnly(2));
        assert_eq!(Feedback::from_counts(0, 0, 2), Feedback::Miss);
    }

    #[test]
    fn messages() {
        assert_eq!(Feedback::Correct.to_string(), "Correct!");
        assert_eq!(
            Feedback::Mixed { exact: 1, present: 1 }.to_string(),
            "1 correct value and location + 1 correct value"
        );
        assert_eq!(
            Feedback::ExactOnly(1).to_string(),
            "1 correct value and location"
        );
        assert_eq!(
            Feedback::ValueOnly(2).to_string(),
            "2 correct value but incorrect location"
        );
        assert_eq!(Feedback::Miss.to_string(), "Wrong numbers!");
    }
}
