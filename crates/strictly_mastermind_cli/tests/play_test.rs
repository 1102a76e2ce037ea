//! Tests for the console turn loop.

use strictly_mastermind::{GameConfig, GameSession, SecretSequence, SessionState};
use strictly_mastermind_cli::{ConsoleSink, ConsoleSource, play};

fn new_session(secret: Vec<i32>, config: GameConfig) -> GameSession {
    let secret = SecretSequence::from_config(secret, &config).expect("Valid secret");
    GameSession::new(secret, config).expect("Valid session")
}

/// Plays `input` against `session`, returning the report and the output text.
fn run(session: &mut GameSession, input: &str) -> (strictly_mastermind_cli::GameReport, String) {
    let mut source = ConsoleSource::new(input.as_bytes());
    let mut sink = ConsoleSink::new(Vec::new());
    let report = play(session, &mut source, &mut sink).expect("Play failed");
    let output = String::from_utf8(sink.into_inner()).expect("UTF-8 output");
    (report, output)
}

#[test]
fn test_win_reports_feedback() {
    let mut session = new_session(vec![1, 2], GameConfig::default());
    let (report, output) = run(&mut session, "1 1\n2,1\n1 2\n");

    assert_eq!(*report.state(), SessionState::Won);
    assert_eq!(*report.attempts_used(), 3);
    assert_eq!(report.secret().as_deref(), Some(&[1, 2][..]));
    assert!(output.contains("1 correct value and location + 1 correct value"));
    assert!(output.contains("2 correct value but incorrect location"));
    assert!(output.contains("Correct!"));
    assert!(output.contains("Solved in 3 guesses."));
}

#[test]
fn test_loss_reveals_secret() {
    let mut session = new_session(vec![1, 1], GameConfig::new(2, 1, 2, 1));
    let (report, output) = run(&mut session, "2 2\n");

    assert_eq!(*report.state(), SessionState::Lost);
    assert!(output.contains("Wrong numbers!"));
    assert!(output.contains("Game over!"));
    assert!(output.contains("The secret was 1 1."));
}

#[test]
fn test_rejected_guesses_cost_nothing() {
    let mut session = new_session(vec![1, 2], GameConfig::default());
    let (report, output) = run(&mut session, "1\nsubmit\n1 2 1\nabc\n2\n");

    assert_eq!(*report.state(), SessionState::Won);
    assert_eq!(*report.attempts_used(), 1);
    assert_eq!(output.matches("Invalid guess").count(), 3);
    assert!(output.contains("Guess slot 1 is unset"));
}

#[test]
fn test_out_of_range_values_cost_nothing() {
    let mut session = new_session(vec![1, 2], GameConfig::default());
    let (report, output) = run(&mut session, "9 9\n12 7\n1 2\n");

    assert_eq!(*report.state(), SessionState::Won);
    assert_eq!(*report.attempts_used(), 1);
    assert!(output.contains("Invalid guess: 9 is outside 1 to 2"));
    assert!(output.contains("Invalid guess: 12 is outside 1 to 2"));
    assert!(!output.contains("Wrong numbers!"));
}

#[test]
fn test_reset_clears_guess_boxes() {
    let mut session = new_session(vec![1, 2], GameConfig::default());
    let (report, output) = run(&mut session, "2\nreset\n1\n2\n");

    assert_eq!(*report.state(), SessionState::Won);
    assert_eq!(*report.attempts_used(), 1);
    assert!(output.contains("Boxes: 2 _"));
    assert!(output.contains("Boxes: _ _"));
    assert!(output.contains("Boxes: 1 _"));
}

#[test]
fn test_boxes_clear_after_each_guess() {
    let mut session = new_session(vec![1, 2], GameConfig::default());
    let (report, output) = run(&mut session, "1 1\n2\nquit\n");

    assert_eq!(*report.attempts_used(), 1);
    assert!(output.contains("Boxes: 2 _"));
}

#[test]
fn test_quit_abandons_without_reveal() {
    let mut session = new_session(vec![1, 2], GameConfig::default());
    let (report, output) = run(&mut session, "2 2\nquit\n");

    assert_eq!(*report.state(), SessionState::InProgress);
    assert_eq!(*report.attempts_used(), 1);
    assert_eq!(*report.secret(), None);
    assert!(output.contains("Game abandoned."));
}

#[test]
fn test_end_of_input_stops_loop() {
    let mut session = new_session(vec![1, 2], GameConfig::default());
    let (report, _) = run(&mut session, "");
    assert_eq!(*report.attempts_used(), 0);
    assert_eq!(session.current_state(), SessionState::InProgress);
}

#[test]
fn test_prompt_shows_remaining_attempts() {
    let mut session = new_session(vec![1, 2], GameConfig::default());
    let (_, output) = run(&mut session, "2 2\n");
    assert!(output.contains("Guess 2 numbers from 1 to 2 (3 left): "));
    assert!(output.contains("(2 left): "));
}
