//! Snapshot chain invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::game::Game;
use crate::types::Square;

/// Invariant: Adjacent snapshots differ in exactly one cell.
///
/// The chain starts at an all-empty board, and every later snapshot is
/// its predecessor with a single cell flipped from empty to occupied.
/// Marks are never moved, cleared, or overwritten along the chain.
pub struct SnapshotChainInvariant;

impl Invariant<Game> for SnapshotChainInvariant {
    fn holds(game: &Game) -> bool {
        let first = match game.history().first() {
            Some(board) => board,
            None => return false,
        };
        if first.squares().iter().any(|s| *s != Square::Empty) {
            return false;
        }

        for pair in game.history().windows(2) {
            let mut added = 0;
            for (before, after) in pair[0].squares().iter().zip(pair[1].squares()) {
                match (before, after) {
                    (before, after) if before == after => {}
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    _ => return false,
                }
            }
            if added != 1 {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ by exactly one new mark"
    }
}
