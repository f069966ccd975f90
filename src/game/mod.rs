//! Number-guessing game implementation.

mod invariants;
mod outcome;
mod rng;
mod rules;
mod session;
mod types;

pub use outcome::{GuessError, GuessOutcome, GuessReport};
pub use rng::{FixedSecret, RandomSecret, SecretSource, SeededSecret};
pub use session::GameSession;
pub use types::{Difficulty, DifficultySettings};
