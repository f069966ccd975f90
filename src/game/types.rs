//! Core domain types: difficulty presets and their resolved settings.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// Difficulty preset for a game session.
///
/// Defaults to [`Difficulty::Medium`], the preset the selector starts on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, ValueEnum,
)]
pub enum Difficulty {
    /// Small range, generous attempt budget.
    Easy,
    /// Mid-size range, moderate attempt budget.
    #[default]
    Medium,
    /// Large range, tight attempt budget.
    Hard,
}

impl Difficulty {
    /// Returns the display label for this preset.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Cycles to the next preset (wraps around).
    #[instrument]
    pub fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    /// Cycles to the previous preset (wraps around).
    #[instrument]
    pub fn prev(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Medium => Self::Easy,
            Self::Hard => Self::Medium,
        }
    }

    /// Resolves this preset to its fixed settings record.
    ///
    /// The presets are: Easy 1-50 with 10 attempts, Medium 1-100 with 8
    /// attempts, Hard 1-1000 with 6 attempts.
    pub fn settings(self) -> DifficultySettings {
        match self {
            Self::Easy => DifficultySettings {
                difficulty: self,
                min_value: 1,
                max_value: 50,
                max_attempts: 10,
            },
            Self::Medium => DifficultySettings {
                difficulty: self,
                min_value: 1,
                max_value: 100,
                max_attempts: 8,
            },
            Self::Hard => DifficultySettings {
                difficulty: self,
                min_value: 1,
                max_value: 1000,
                max_attempts: 6,
            },
        }
    }
}

/// Settings resolved from a [`Difficulty`], fixed for the life of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultySettings {
    /// The preset these settings were resolved from.
    difficulty: Difficulty,
    /// Smallest valid secret number (inclusive).
    min_value: u32,
    /// Largest valid secret number (inclusive).
    max_value: u32,
    /// Number of guesses allowed before the session ends.
    max_attempts: u32,
}

impl DifficultySettings {
    /// Returns the preset these settings were resolved from.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the smallest valid secret number.
    pub fn min_value(&self) -> u32 {
        self.min_value
    }

    /// Returns the largest valid secret number.
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Returns the allowed number of guesses.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Checks whether a guess lies within the valid range.
    pub fn contains(&self, value: u32) -> bool {
        (self.min_value..=self.max_value).contains(&value)
    }
}

impl Default for DifficultySettings {
    fn default() -> Self {
        Difficulty::default().settings()
    }
}
