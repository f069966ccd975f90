//! Guess outcomes, the per-guess report, and the post-game refusal.
//!
//! Outcomes are values returned from evaluation; refusals are errors.
//! A guess submitted after the session ended is refused, not classified.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Classification of one evaluated guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GuessOutcome {
    /// The guess is below the secret number.
    #[display("Too low!")]
    TooLow,

    /// The guess is above the secret number.
    #[display("Too high!")]
    TooHigh,

    /// The guess matches the secret number. The session is over.
    #[display("Correct!")]
    Correct,

    /// The last allowed guess was wrong. The session is over and the
    /// secret is revealed.
    #[display("Out of tries! The number was {secret}.")]
    OutOfAttempts {
        /// The secret number, revealed now that no attempts remain.
        secret: u32,
    },
}

impl GuessOutcome {
    /// Returns true if this outcome ends the session.
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Correct | Self::OutOfAttempts { .. })
    }

    /// Returns the revealed secret, if this outcome reveals one.
    pub fn revealed_secret(&self) -> Option<u32> {
        match self {
            Self::OutOfAttempts { secret } => Some(*secret),
            _ => None,
        }
    }
}

/// Report returned for each evaluated guess.
///
/// Carries the classification together with the attempt counters the
/// caller displays after every guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GuessReport {
    /// Classification of the guess.
    outcome: GuessOutcome,
    /// Attempts consumed so far, including this guess.
    attempts_used: u32,
    /// Attempts left before the session ends.
    remaining: u32,
}

impl GuessReport {
    /// Creates a report for one evaluated guess.
    pub(crate) fn new(outcome: GuessOutcome, attempts_used: u32, remaining: u32) -> Self {
        Self {
            outcome,
            attempts_used,
            remaining,
        }
    }
}

impl std::fmt::Display for GuessReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            GuessOutcome::Correct => {
                write!(f, "Perfect! You got it in {} tries!", self.attempts_used)
            }
            outcome => outcome.fmt(f),
        }
    }
}

/// Error returned when a guess cannot be evaluated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, Serialize,
    Deserialize,
)]
pub enum GuessError {
    /// The session has already ended; the guess was refused unevaluated.
    #[display("Game over! Start a new game to play again.")]
    AlreadyOver,
}
