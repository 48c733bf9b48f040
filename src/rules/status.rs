//! Status derivation: composes win and draw checks into a single tag.

use super::draw::is_full;
use super::win::{Win, check_winner};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of a board.
///
/// The engine exposes the tag and lets the rendering layer decide how
/// to word it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the wrapped player moves next.
    InProgress(Player),
    /// Game ended with a completed line.
    Won(Win),
    /// Board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(win) => Some(win.player),
            _ => None,
        }
    }

    /// Returns true if the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(player) => write!(f, "Player {player} to move"),
            GameStatus::Won(win) => write!(f, "Player {} wins", win.player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Derives the status of a board.
///
/// A win takes precedence over a draw, which takes precedence over an
/// ongoing game.
#[instrument]
pub fn status(board: &Board) -> GameStatus {
    if let Some(win) = check_winner(board) {
        return GameStatus::Won(win);
    }
    if is_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress(to_move(board))
}

/// The side to move on a board: X when the mark counts are equal.
#[instrument]
pub fn to_move(board: &Board) -> Player {
    let marks = board
        .squares()
        .iter()
        .filter(|s| **s != Square::Empty)
        .count();
    if marks % 2 == 0 { Player::X } else { Player::O }
}
