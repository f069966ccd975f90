//! Digit buffer for the guess entry field.

use guess_the_number::DifficultySettings;

/// Collects typed digits until the player submits a guess.
///
/// The buffer only ever holds ASCII digits and is capped at the width
/// of the largest value in the active range, so it can never overflow
/// a `u32` when parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessInput {
    buffer: String,
    max_digits: usize,
}

impl GuessInput {
    /// Creates an empty buffer sized for the given difficulty range.
    pub fn for_settings(settings: &DifficultySettings) -> Self {
        Self {
            buffer: String::new(),
            max_digits: settings.max_value().to_string().len(),
        }
    }

    /// Appends a digit. Non-digit characters and overlong input are ignored.
    pub fn push_digit(&mut self, c: char) {
        if c.is_ascii_digit() && self.buffer.len() < self.max_digits {
            self.buffer.push(c);
        }
    }

    /// Removes the most recently typed digit, if any.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Discards everything typed so far.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// The raw text typed so far.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Parses the buffer as a guess, or `None` when empty.
    pub fn value(&self) -> Option<u32> {
        self.buffer.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guess_the_number::Difficulty;

    fn medium_input() -> GuessInput {
        GuessInput::for_settings(&Difficulty::Medium.settings())
    }

    #[test]
    fn collects_digits_in_order() {
        let mut input = medium_input();
        input.push_digit('4');
        input.push_digit('2');
        assert_eq!(input.text(), "42");
        assert_eq!(input.value(), Some(42));
    }

    #[test]
    fn ignores_non_digit_characters() {
        let mut input = medium_input();
        input.push_digit('a');
        input.push_digit('-');
        input.push_digit(' ');
        assert_eq!(input.text(), "");
        assert_eq!(input.value(), None);
    }

    #[test]
    fn caps_length_at_range_width() {
        // Medium tops out at 100, so three digits fit and a fourth is dropped.
        let mut input = medium_input();
        for c in ['9', '9', '9', '9'] {
            input.push_digit(c);
        }
        assert_eq!(input.text(), "999");
    }

    #[test]
    fn hard_range_allows_four_digits() {
        let mut input = GuessInput::for_settings(&Difficulty::Hard.settings());
        for c in ['1', '0', '0', '0'] {
            input.push_digit(c);
        }
        assert_eq!(input.value(), Some(1000));
    }

    #[test]
    fn backspace_removes_last_digit() {
        let mut input = medium_input();
        input.push_digit('4');
        input.push_digit('2');
        input.backspace();
        assert_eq!(input.text(), "4");
        input.backspace();
        input.backspace();
        assert_eq!(input.text(), "");
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut input = medium_input();
        input.push_digit('7');
        input.clear();
        assert_eq!(input.value(), None);
    }
}
