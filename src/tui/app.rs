//! Application state and logic.

use guess_the_number::{Difficulty, GameSession, GuessError, GuessReport, SecretSource};
use tracing::{debug, info, instrument, warn};

use super::input::GuessInput;

/// Feedback line shown beneath the guess field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// The session evaluated the guess and reported on it.
    Report(GuessReport),
    /// The session refused the guess.
    Refused(GuessError),
    /// The input layer rejected the submission before it reached the session.
    Hint(String),
}

/// Main application state.
///
/// Owns the active session and the secret source. Every session
/// replacement, whether from a difficulty change or an explicit reset,
/// goes through [`GameSession::start`] with a fresh secret.
pub struct App {
    source: Box<dyn SecretSource>,
    session: GameSession,
    input: GuessInput,
    feedback: Option<Feedback>,
}

impl App {
    /// Creates the application with an initial session at the given difficulty.
    pub fn new(difficulty: Difficulty, mut source: Box<dyn SecretSource>) -> Self {
        let session = GameSession::start(difficulty, source.as_mut());
        let input = GuessInput::for_settings(&session.settings());
        Self {
            source,
            session,
            input,
            feedback: None,
        }
    }

    /// Gets the active session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the difficulty of the active session.
    pub fn difficulty(&self) -> Difficulty {
        self.session.settings().difficulty()
    }

    /// Gets the guess entry buffer.
    pub fn input(&self) -> &GuessInput {
        &self.input
    }

    /// Gets the feedback from the most recent submission, if any.
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Switches to the given difficulty, starting a fresh session.
    ///
    /// Re-selecting the current difficulty leaves the session alone;
    /// only an actual change discards the game in progress.
    #[instrument(skip(self))]
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty == self.difficulty() {
            debug!(difficulty = difficulty.label(), "Difficulty unchanged");
            return;
        }
        info!(difficulty = difficulty.label(), "Difficulty changed");
        self.session = GameSession::start(difficulty, self.source.as_mut());
        self.input = GuessInput::for_settings(&self.session.settings());
        self.feedback = None;
    }

    /// Cycles the difficulty selector forward.
    pub fn next_difficulty(&mut self) {
        self.select_difficulty(self.difficulty().next());
    }

    /// Cycles the difficulty selector backward.
    pub fn prev_difficulty(&mut self) {
        self.select_difficulty(self.difficulty().prev());
    }

    /// Abandons the current session and starts a new one at the same difficulty.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!(difficulty = self.difficulty().label(), "New game requested");
        self.session = GameSession::start(self.difficulty(), self.source.as_mut());
        self.input = GuessInput::for_settings(&self.session.settings());
        self.feedback = None;
    }

    /// Appends a digit to the guess field.
    pub fn push_digit(&mut self, c: char) {
        self.input.push_digit(c);
    }

    /// Removes the last digit from the guess field.
    pub fn backspace(&mut self) {
        self.input.backspace();
    }

    /// Submits the typed guess to the session.
    ///
    /// Empty, unparseable, and out-of-range submissions never reach the
    /// session; they produce a range hint and leave the field as typed
    /// for correction. Evaluated guesses clear the field.
    #[instrument(skip(self), fields(typed = self.input.text()))]
    pub fn submit_guess(&mut self) {
        let settings = self.session.settings();
        let hint = format!(
            "Enter a number between {} and {}.",
            settings.min_value(),
            settings.max_value()
        );

        let Some(guess) = self.input.value() else {
            debug!("Submission rejected: not a number");
            self.feedback = Some(Feedback::Hint(hint));
            return;
        };
        if !settings.contains(guess) {
            debug!(guess, "Submission rejected: out of range");
            self.feedback = Some(Feedback::Hint(hint));
            return;
        }

        match self.session.evaluate_guess(guess) {
            Ok(report) => {
                self.input.clear();
                self.feedback = Some(Feedback::Report(report));
            }
            Err(error) => {
                warn!(guess, %error, "Guess refused");
                self.feedback = Some(Feedback::Refused(error));
            }
        }
    }

    /// Progress line, shown once at least one guess has been evaluated.
    pub fn attempts_line(&self) -> Option<String> {
        if self.session.is_over() || self.session.attempts_used() == 0 {
            return None;
        }
        Some(format!(
            "Attempts: {}/{}",
            self.session.attempts_used(),
            self.session.settings().max_attempts()
        ))
    }

    /// Warning line, shown while the session is active and nearly exhausted.
    pub fn attempts_warning(&self) -> Option<String> {
        if self.session.is_over() || self.session.remaining_attempts() >= 3 {
            return None;
        }
        Some(format!(
            "Only {} guesses left!",
            self.session.remaining_attempts()
        ))
    }
}
