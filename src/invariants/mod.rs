//! First-class invariants for the snapshot-history engine.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as
//! documentation of system guarantees.

use crate::game::Game;
use tracing::instrument;

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
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
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

// Implement InvariantSet for 2-tuples
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

pub mod alternating_marks;
pub mod cursor_in_range;
pub mod snapshot_chain;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_range::CursorInRangeInvariant;
pub use snapshot_chain::SnapshotChainInvariant;

/// All engine invariants as a composable set.
pub type GameInvariants = (
    SnapshotChainInvariant,
    AlternatingMarksInvariant,
    CursorInRangeInvariant,
);

/// Asserts that all game invariants hold (panics on violation in debug
/// builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    debug_assert!(
        GameInvariants::check_all(game).is_ok(),
        "game invariant violated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Board, Player, Square};

    fn played(cells: &[Position]) -> Game {
        cells.iter().fold(Game::new(), |game, &pos| {
            game.play(pos).expect("legal move")
        })
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = played(&[Position::TopLeft, Position::Center, Position::TopRight]);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_time_travel() {
        let game = played(&[Position::TopLeft, Position::Center, Position::TopRight]);
        let game = game.jump_to(1).expect("recorded snapshot");
        let game = game.play(Position::BottomLeft).expect("legal move");
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = played(&[Position::Center]);

        // Corrupt the tip snapshot by overwriting an occupied square.
        game.snapshots[1].set(Position::Center, Square::Occupied(Player::O));

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new();

        type TwoInvariants = (SnapshotChainInvariant, CursorInRangeInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_violation_reports_description() {
        let mut game = played(&[Position::Center]);
        game.snapshots.push(Board::new());

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations[0].description,
            SnapshotChainInvariant::description()
        );
    }
}
