//! Alternating marks invariant: marks are added X, O, X, O, ...

use super::Invariant;
use crate::game::Game;
use crate::types::{Player, Square};

/// Invariant: Marks are added in strict alternation starting with X.
///
/// The mark added between snapshot i and snapshot i+1 belongs to X when
/// i is even and to O when i is odd, which is also what ties the cursor
/// parity to the side to move.
pub struct AlternatingMarksInvariant;

impl Invariant<Game> for AlternatingMarksInvariant {
    fn holds(game: &Game) -> bool {
        for (step, pair) in game.history().windows(2).enumerate() {
            let expected = if step % 2 == 0 { Player::X } else { Player::O };

            let added = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .find_map(|(before, after)| match (before, after) {
                    (Square::Empty, Square::Occupied(player)) => Some(*player),
                    _ => None,
                });

            if added != Some(expected) {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Marks are added in strict alternation (X, O, X, O, ...)"
    }
}
