//! One-shot scoring of a guess against a known secret.

use derive_getters::Getters;
use serde::Serialize;
use strictly_mastermind::{
    Feedback, GameConfig, GameSession, Mark, MastermindResult, SecretSequence,
};
use tracing::instrument;

/// Scored guess with its counts and verdict.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ScoreReport {
    /// Guessed values.
    guess: Vec<i32>,
    /// One mark per position.
    marks: Vec<Mark>,
    /// Exact matches.
    exact: usize,
    /// Values present elsewhere.
    present: usize,
    /// Player-facing verdict.
    feedback: String,
}

/// Scores `guess` against `secret` using the value range of `game`.
///
/// The sequence length is taken from `secret`.
#[instrument(skip(game))]
pub fn score_once(secret: Vec<i32>, guess: Vec<i32>, game: GameConfig) -> MastermindResult<ScoreReport> {
    let config = game
        .with_sequence_length(secret.len())
        .with_max_attempts(1);
    let secret = SecretSequence::from_config(secret, &config)?;
    let mut session = GameSession::new(secret, config)?;

    let scored = session.submit_guess(guess)?;
    let (exact, present) = GameSession::summarize(&scored);
    Ok(ScoreReport {
        guess: scored.guess().to_vec(),
        marks: scored.marks().to_vec(),
        exact,
        present,
        feedback: Feedback::from_counts(exact, present, scored.marks().len()).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_mastermind::MastermindErrorKind;

    #[test]
    fn scores_against_secret() {
        let report = score_once(vec![1, 2], vec![2, 1], GameConfig::default()).unwrap();
        assert_eq!(report.marks(), &[Mark::ValuePresent, Mark::ValuePresent]);
        assert_eq!((*report.exact(), *report.present()), (0, 2));
        assert_eq!(report.feedback(), "2 correct value but incorrect location");
    }

    #[test]
    fn secret_outside_range_is_rejected() {
        let err = score_once(vec![9, 1], vec![1, 1], GameConfig::default()).unwrap_err();
        assert!(matches!(err.kind(), MastermindErrorKind::InvalidSecret(_)));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = score_once(vec![1, 2], vec![1], GameConfig::default()).unwrap_err();
        assert!(matches!(
            err.kind(),
            MastermindErrorKind::InvalidGuessLength { .. }
        ));
    }
}
