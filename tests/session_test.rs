//! Tests for the full session lifecycle: start, guess evaluation, endings.

use guess_the_number::{Difficulty, FixedSecret, GameSession, GuessError, GuessOutcome};

fn session_with_secret(difficulty: Difficulty, secret: u32) -> GameSession {
    GameSession::start(difficulty, &mut FixedSecret::new(secret))
}

#[test]
fn test_win_on_medium_after_hints() {
    let mut session = session_with_secret(Difficulty::Medium, 42);

    // Low guess
    let report = session.evaluate_guess(10).expect("Active session");
    assert_eq!(*report.outcome(), GuessOutcome::TooLow);
    assert_eq!(*report.attempts_used(), 1);
    assert_eq!(*report.remaining(), 7);
    assert!(!session.is_over());

    // High guess
    let report = session.evaluate_guess(80).expect("Active session");
    assert_eq!(*report.outcome(), GuessOutcome::TooHigh);
    assert_eq!(*report.attempts_used(), 2);
    assert!(!session.is_over());

    // Exact guess ends the session
    let report = session.evaluate_guess(42).expect("Active session");
    assert_eq!(*report.outcome(), GuessOutcome::Correct);
    assert_eq!(*report.attempts_used(), 3);
    assert!(session.is_over());
}

#[test]
fn test_exhaustion_reveals_the_secret() {
    let mut session = session_with_secret(Difficulty::Easy, 7);

    // Nine wrong guesses keep the session alive
    for attempt in 1..=9 {
        let report = session.evaluate_guess(10).expect("Active session");
        assert_eq!(*report.outcome(), GuessOutcome::TooHigh);
        assert_eq!(*report.attempts_used(), attempt);
        assert!(!session.is_over());
    }

    // The tenth wrong guess exhausts the budget
    let report = session.evaluate_guess(10).expect("Active session");
    assert_eq!(*report.outcome(), GuessOutcome::OutOfAttempts { secret: 7 });
    assert_eq!(*report.attempts_used(), 10);
    assert_eq!(*report.remaining(), 0);
    assert!(session.is_over());
}

#[test]
fn test_correct_final_guess_wins() {
    let mut session = session_with_secret(Difficulty::Medium, 42);

    for _ in 0..7 {
        session.evaluate_guess(10).expect("Active session");
    }
    assert_eq!(session.remaining_attempts(), 1);

    // Correctness is checked before the budget, so this is a win
    let report = session.evaluate_guess(42).expect("Active session");
    assert_eq!(*report.outcome(), GuessOutcome::Correct);
    assert_eq!(*report.attempts_used(), 8);
    assert!(session.is_over());
}

#[test]
fn test_new_session_replaces_played_one() {
    let mut session = session_with_secret(Difficulty::Medium, 42);
    session.evaluate_guess(10).expect("Active session");
    session.evaluate_guess(80).expect("Active session");

    // Switching difficulty means starting over with a fresh secret
    let session = GameSession::start(Difficulty::Hard, &mut FixedSecret::new(900));
    assert_eq!(session.attempts_used(), 0);
    assert!(!session.is_over());
    assert!(session.settings().contains(session.secret_number()));
    assert_eq!(session.settings().difficulty(), Difficulty::Hard);
}

#[test]
fn test_finished_session_refuses_further_guesses() {
    let mut session = session_with_secret(Difficulty::Medium, 42);
    session.evaluate_guess(42).expect("Active session");
    assert!(session.is_over());

    let snapshot = session.clone();
    for _ in 0..3 {
        let result = session.evaluate_guess(42);
        assert_eq!(result, Err(GuessError::AlreadyOver));
    }

    // Refused guesses leave the session untouched
    assert_eq!(session, snapshot);
    assert_eq!(session.attempts_used(), 1);
}

#[test]
fn test_exhausted_session_also_refuses() {
    let mut session = session_with_secret(Difficulty::Hard, 500);
    for _ in 0..6 {
        session.evaluate_guess(1).expect("Active session");
    }
    assert!(session.is_over());

    assert_eq!(session.evaluate_guess(500), Err(GuessError::AlreadyOver));
    assert_eq!(session.attempts_used(), 6);
}

#[test]
fn test_attempts_count_every_evaluated_guess() {
    let mut session = session_with_secret(Difficulty::Easy, 25);

    for n in 1..=5 {
        session.evaluate_guess(1).expect("Active session");
        assert_eq!(session.attempts_used(), n);
        assert_eq!(session.remaining_attempts(), 10 - n);
    }
}

#[test]
fn test_boundary_guesses_are_classified() {
    let mut session = session_with_secret(Difficulty::Medium, 50);

    let report = session.evaluate_guess(1).expect("Active session");
    assert_eq!(*report.outcome(), GuessOutcome::TooLow);
    let report = session.evaluate_guess(100).expect("Active session");
    assert_eq!(*report.outcome(), GuessOutcome::TooHigh);
}

#[test]
fn test_report_messages_match_the_outcome() {
    let mut session = session_with_secret(Difficulty::Medium, 42);

    let report = session.evaluate_guess(10).expect("Active session");
    assert_eq!(report.to_string(), "Too low!");
    let report = session.evaluate_guess(80).expect("Active session");
    assert_eq!(report.to_string(), "Too high!");
    let report = session.evaluate_guess(42).expect("Active session");
    assert_eq!(report.to_string(), "Perfect! You got it in 3 tries!");

    let error = session.evaluate_guess(42).expect_err("Session over");
    assert_eq!(error.to_string(), "Game over! Start a new game to play again.");
}

#[test]
fn test_exhaustion_message_reveals_the_secret() {
    let mut session = session_with_secret(Difficulty::Hard, 777);
    for _ in 0..5 {
        session.evaluate_guess(1).expect("Active session");
    }

    let report = session.evaluate_guess(1).expect("Active session");
    assert_eq!(report.to_string(), "Out of tries! The number was 777.");
    assert_eq!(report.outcome().revealed_secret(), Some(777));
}
