//! Tests for guess scoring and the session state machine.

use strictly_mastermind::{
    GameConfig, GameSession, Guess, GuessDraft, Mark, MastermindErrorKind, SecretSequence,
    SessionState,
};

fn new_session(secret: Vec<i32>, config: GameConfig) -> GameSession {
    let secret = SecretSequence::from_config(secret, &config).expect("Valid secret");
    GameSession::new(secret, config).expect("Valid session")
}

/// Every sequence of `len` values drawn from `min..=max`.
fn all_sequences(len: usize, min: i32, max: i32) -> Vec<Vec<i32>> {
    (0..len).fold(vec![Vec::new()], |acc, _| {
        acc.into_iter()
            .flat_map(|prefix| {
                (min..=max).map(move |v| {
                    let mut next = prefix.clone();
                    next.push(v);
                    next
                })
            })
            .collect()
    })
}

#[test]
fn test_two_slot_walkthrough() {
    let mut session = new_session(vec![1, 2], GameConfig::default().with_max_attempts(3));

    let first = session.submit_guess(vec![1, 1]).expect("First guess");
    assert_eq!(first.marks(), &[Mark::ExactMatch, Mark::ValuePresent]);
    assert_eq!(GameSession::summarize(&first), (1, 1));
    assert_eq!(session.current_state(), SessionState::InProgress);

    let second = session.submit_guess(vec![2, 1]).expect("Second guess");
    assert_eq!(second.marks(), &[Mark::ValuePresent, Mark::ValuePresent]);
    assert_eq!(GameSession::summarize(&second), (0, 2));

    let third = session.submit_guess(vec![1, 2]).expect("Third guess");
    assert_eq!(third.marks(), &[Mark::ExactMatch, Mark::ExactMatch]);
    assert_eq!(session.current_state(), SessionState::Won);
    assert_eq!(session.remaining_attempts(), 0);
}

#[test]
fn test_single_attempt_loss() {
    let config = GameConfig::new(2, 1, 2, 1);
    let mut session = new_session(vec![1, 1], config);

    let scored = session.submit_guess(vec![2, 2]).expect("Guess");
    assert_eq!(scored.marks(), &[Mark::NoMatch, Mark::NoMatch]);
    assert_eq!(session.attempts_used(), 1);
    assert_eq!(session.current_state(), SessionState::Lost);
}

#[test]
fn test_exact_iff_equal_for_all_guesses() {
    let config = GameConfig::new(3, 1, 3, 1);
    for secret in all_sequences(3, 1, 3) {
        for guess in all_sequences(3, 1, 3) {
            let mut session = new_session(secret.clone(), config);
            let scored = session.submit_guess(guess.clone()).expect("Guess");

            assert_eq!(scored.marks().len(), guess.len());
            for (i, mark) in scored.marks().iter().enumerate() {
                let expected = if guess[i] == secret[i] {
                    Mark::ExactMatch
                } else if secret.contains(&guess[i]) {
                    Mark::ValuePresent
                } else {
                    Mark::NoMatch
                };
                assert_eq!(*mark, expected, "secret {secret:?} guess {guess:?} pos {i}");
            }
        }
    }
}

#[test]
fn test_correct_guess_wins_on_any_attempt() {
    for misses in 0..4 {
        let mut session = new_session(vec![3, 1, 4], GameConfig::new(3, 1, 6, 5));
        for _ in 0..misses {
            session.submit_guess(vec![6, 6, 6]).expect("Miss");
        }
        session.submit_guess(vec![3, 1, 4]).expect("Hit");
        assert_eq!(session.current_state(), SessionState::Won);
        assert_eq!(session.attempts_used(), misses + 1);
    }
}

#[test]
fn test_winning_on_last_attempt_is_not_a_loss() {
    let mut session = new_session(vec![1, 2], GameConfig::default().with_max_attempts(2));
    session.submit_guess(vec![2, 1]).expect("Miss");
    session.submit_guess(vec![1, 2]).expect("Hit");
    assert_eq!(session.current_state(), SessionState::Won);
}

#[test]
fn test_attempts_track_history() {
    let mut session = new_session(vec![1, 2], GameConfig::default().with_max_attempts(4));
    for n in 1..=4 {
        session.submit_guess(vec![2, 2]).expect("Guess");
        assert_eq!(session.attempts_used(), n);
        assert_eq!(session.history().len(), session.attempts_used());
        assert_eq!(session.remaining_attempts(), 4 - n);
    }
    assert_eq!(session.current_state(), SessionState::Lost);
}

#[test]
fn test_lost_session_rejects_guesses_without_mutation() {
    let mut session = new_session(vec![1, 1], GameConfig::new(2, 1, 2, 1));
    session.submit_guess(vec![2, 2]).expect("Guess");

    let err = session.submit_guess(vec![1, 1]).unwrap_err();
    assert_eq!(
        err.kind(),
        &MastermindErrorKind::GameAlreadyOver(SessionState::Lost)
    );
    assert_eq!(session.attempts_used(), 1);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_won_session_rejects_guesses_without_mutation() {
    let mut session = new_session(vec![1, 2], GameConfig::default());
    session.submit_guess(vec![1, 2]).expect("Guess");

    let err = session.submit_guess(vec![1, 2]).unwrap_err();
    assert_eq!(
        err.kind(),
        &MastermindErrorKind::GameAlreadyOver(SessionState::Won)
    );
    assert_eq!(session.attempts_used(), 1);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_wrong_length_rejected() {
    let mut session = new_session(vec![1, 2], GameConfig::default());
    let err = session.submit_guess(vec![1, 2, 1]).unwrap_err();
    assert!(matches!(
        err.kind(),
        MastermindErrorKind::InvalidGuessLength {
            expected: 2,
            actual: 3
        }
    ));
    assert_eq!(session.attempts_used(), 0);
}

#[test]
fn test_draft_feeds_session() {
    let mut session = new_session(vec![2, 1], GameConfig::default());
    let mut draft = GuessDraft::new(*session.config().sequence_length());

    draft.place(2).expect("Place");
    let err = session.submit_guess(draft.to_guess()).unwrap_err();
    assert_eq!(err.kind(), &MastermindErrorKind::IncompleteGuess(1));

    draft.place(1).expect("Place");
    let scored = session.submit_guess(draft.to_guess()).expect("Guess");
    assert!(scored.is_solved());
}

#[test]
fn test_guess_from_slice() {
    let mut session = new_session(vec![1, 2], GameConfig::default());
    let values = [2, 2];
    let scored = session.submit_guess(Guess::from(&values[..])).expect("Guess");
    assert_eq!(scored.guess(), &values);
}
