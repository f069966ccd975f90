//! First-class invariants for the game session.
//!
//! Invariants are logical properties that must hold throughout session
//! execution. They are checked in debug builds after every mutation and
//! are testable independently.

use super::session::GameSession;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples, enabling composition of
/// multiple invariants into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: attempts used never exceed the allowed budget.
pub struct AttemptsWithinLimit;

impl Invariant<GameSession> for AttemptsWithinLimit {
    fn holds(session: &GameSession) -> bool {
        session.attempts_used <= session.settings.max_attempts()
    }

    fn description() -> &'static str {
        "Attempts used never exceed the allowed budget"
    }
}

/// Invariant: the secret number lies within the settings range.
pub struct SecretWithinRange;

impl Invariant<GameSession> for SecretWithinRange {
    fn holds(session: &GameSession) -> bool {
        session.settings.contains(session.secret_number)
    }

    fn description() -> &'static str {
        "Secret number lies within the settings range"
    }
}

/// Invariant: a session that has consumed its full budget is over.
pub struct OverAtAttemptLimit;

impl Invariant<GameSession> for OverAtAttemptLimit {
    fn holds(session: &GameSession) -> bool {
        session.attempts_used < session.settings.max_attempts() || session.over
    }

    fn description() -> &'static str {
        "A session at its attempt limit is over"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (AttemptsWithinLimit, SecretWithinRange, OverAtAttemptLimit);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rng::FixedSecret;
    use crate::game::types::Difficulty;

    #[test]
    fn test_invariant_set_holds_for_fresh_session() {
        let session = GameSession::start(Difficulty::Medium, &mut FixedSecret::new(42));
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_guesses() {
        let mut session = GameSession::start(Difficulty::Medium, &mut FixedSecret::new(42));
        session.evaluate_guess(10).unwrap();
        session.evaluate_guess(80).unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_attempt_overflow() {
        let mut session = GameSession::start(Difficulty::Hard, &mut FixedSecret::new(500));

        // Corrupt the counter past the budget.
        session.attempts_used = session.settings.max_attempts() + 1;

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert!(!violations.is_empty());
        assert!(
            violations
                .iter()
                .any(|v| v.description == AttemptsWithinLimit::description())
        );
    }

    #[test]
    fn test_invariant_set_detects_out_of_range_secret() {
        let mut session = GameSession::start(Difficulty::Easy, &mut FixedSecret::new(25));

        // Corrupt the secret outside the Easy range.
        session.secret_number = 500;

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description == SecretWithinRange::description())
        );
    }

    #[test]
    fn test_exhausted_session_must_be_over() {
        let mut session = GameSession::start(Difficulty::Hard, &mut FixedSecret::new(500));

        // A full budget with the terminal flag cleared is a violation.
        session.attempts_used = session.settings.max_attempts();
        session.over = false;

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description == OverAtAttemptLimit::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = GameSession::start(Difficulty::Easy, &mut FixedSecret::new(7));

        type TwoInvariants = (AttemptsWithinLimit, SecretWithinRange);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
