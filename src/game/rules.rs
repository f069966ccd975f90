//! Guess classification against the secret number.

use super::outcome::GuessOutcome;
use std::cmp::Ordering;
use tracing::instrument;

/// Classifies a guess against the secret number.
///
/// Returns one of the three comparison outcomes. This never produces
/// `OutOfAttempts`; the session layer upgrades the final wrong guess
/// after checking the attempt budget.
#[instrument]
pub fn classify(guess: u32, secret: u32) -> GuessOutcome {
    match guess.cmp(&secret) {
        Ordering::Less => GuessOutcome::TooLow,
        Ordering::Greater => GuessOutcome::TooHigh,
        Ordering::Equal => GuessOutcome::Correct,
    }
}
