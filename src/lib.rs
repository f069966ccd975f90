//! Guess the Number - core logic for a terminal guessing game.
//!
//! The library models one playthrough as a [`GameSession`]. A difficulty
//! preset fixes the guess range and the attempt budget. Each guess is
//! classified against a secret number drawn at session start, until the
//! player finds it or runs out of attempts.
//!
//! # Architecture
//!
//! - **Session**: settings, secret number, attempt counter, terminal flag
//! - **Outcomes**: per-guess classification plus the post-game refusal
//! - **Sources**: injectable randomness for secret-number draws
//!
//! # Example
//!
//! ```
//! use guess_the_number::{Difficulty, FixedSecret, GameSession, GuessOutcome};
//!
//! let mut session = GameSession::start(Difficulty::Medium, &mut FixedSecret::new(42));
//!
//! let report = session.evaluate_guess(10)?;
//! assert_eq!(*report.outcome(), GuessOutcome::TooLow);
//!
//! let report = session.evaluate_guess(42)?;
//! assert_eq!(*report.outcome(), GuessOutcome::Correct);
//! assert!(session.is_over());
//! # Ok::<(), guess_the_number::GuessError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;

// Crate-level exports - Difficulty presets
pub use game::{Difficulty, DifficultySettings};

// Crate-level exports - Session and outcomes
pub use game::{GameSession, GuessError, GuessOutcome, GuessReport};

// Crate-level exports - Secret-number sources
pub use game::{FixedSecret, RandomSecret, SecretSource, SeededSecret};
