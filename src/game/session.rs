//! The game session: settings, secret number, attempt budget, terminal flag.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::invariants::{InvariantSet, SessionInvariants};
use super::outcome::{GuessError, GuessOutcome, GuessReport};
use super::rng::SecretSource;
use super::rules;
use super::types::{Difficulty, DifficultySettings};

/// One playthrough: difficulty-derived settings, the secret number,
/// attempts used, and whether the session has ended.
///
/// Sessions are replaced wholesale by [`GameSession::start`] whenever a
/// new game begins, whether from a difficulty change or an explicit
/// reset. A session is never partially reset in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(super) settings: DifficultySettings,
    pub(super) secret_number: u32,
    pub(super) attempts_used: u32,
    pub(super) over: bool,
}

impl GameSession {
    /// Starts a fresh session for the given difficulty.
    ///
    /// Resolves the difficulty to its settings and draws a new secret
    /// number uniformly from the settings range (inclusive bounds).
    #[instrument(skip(source))]
    pub fn start(difficulty: Difficulty, source: &mut dyn SecretSource) -> Self {
        let settings = difficulty.settings();
        let secret_number = source.draw(settings.min_value(), settings.max_value());
        info!(
            difficulty = difficulty.label(),
            min = settings.min_value(),
            max = settings.max_value(),
            max_attempts = settings.max_attempts(),
            "Starting new game session"
        );
        debug!(secret_number, "Secret number drawn");

        let session = Self {
            settings,
            secret_number,
            attempts_used: 0,
            over: false,
        };
        debug_assert!(SessionInvariants::check_all(&session).is_ok());
        session
    }

    /// Evaluates one guess against the secret number.
    ///
    /// An active session consumes one attempt and classifies the guess
    /// three ways. A correct guess ends the session; a wrong guess that
    /// consumes the final attempt ends it with
    /// [`GuessOutcome::OutOfAttempts`], revealing the secret.
    /// Correctness is decided before the attempt budget is checked, so
    /// a correct final guess reports `Correct`.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::AlreadyOver`] once the session has ended.
    /// The refusal leaves the session completely untouched.
    #[instrument(skip(self), fields(difficulty = self.settings.difficulty().label()))]
    pub fn evaluate_guess(&mut self, guess: u32) -> Result<GuessReport, GuessError> {
        if self.over {
            warn!(guess, "Guess refused: session already over");
            return Err(GuessError::AlreadyOver);
        }

        self.attempts_used += 1;

        let mut outcome = rules::classify(guess, self.secret_number);
        if outcome == GuessOutcome::Correct {
            self.over = true;
        } else if self.attempts_used == self.settings.max_attempts() {
            self.over = true;
            outcome = GuessOutcome::OutOfAttempts {
                secret: self.secret_number,
            };
        }

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariants violated after guess evaluation"
        );

        let remaining = self.settings.max_attempts() - self.attempts_used;
        info!(
            guess,
            outcome = ?outcome,
            attempts_used = self.attempts_used,
            remaining,
            "Guess evaluated"
        );
        Ok(GuessReport::new(outcome, self.attempts_used, remaining))
    }

    /// Returns the settings this session was started with.
    pub fn settings(&self) -> DifficultySettings {
        self.settings
    }

    /// Returns the secret number for this session.
    pub fn secret_number(&self) -> u32 {
        self.secret_number
    }

    /// Returns the number of guesses evaluated so far.
    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Returns the number of guesses left before the session ends.
    pub fn remaining_attempts(&self) -> u32 {
        self.settings.max_attempts() - self.attempts_used
    }

    /// Returns true once the session has ended.
    pub fn is_over(&self) -> bool {
        self.over
    }
}
