//! Cursor range invariant: the cursor addresses a recorded snapshot.

use super::Invariant;
use crate::game::Game;

/// Invariant: The cursor is a valid index into the snapshot history.
///
/// Every operation that shortens or extends the history repositions the
/// cursor, so it can never dangle past the branch tip.
pub struct CursorInRangeInvariant;

impl Invariant<Game> for CursorInRangeInvariant {
    fn holds(game: &Game) -> bool {
        game.cursor() < game.history().len()
    }

    fn description() -> &'static str {
        "Cursor addresses a recorded snapshot"
    }
}
