//! Snapshot-history game engine with time travel.
//!
//! The engine records one board snapshot per accepted move and a cursor
//! selecting the displayed snapshot. Traveling to a past snapshot is
//! pure navigation; the first move played from there discards the
//! abandoned future and records a new branch in its place, so history
//! never holds more than one branch.

use crate::descriptor::{MoveDescriptor, SortOrder};
use crate::invariants;
use crate::position::Position;
use crate::rules;
use crate::rules::{GameStatus, Line};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Rejection outcomes
// ─────────────────────────────────────────────────────────────

/// Errors that can occur when playing a move.
///
/// These are expected outcomes of user input (a click on an occupied
/// square, a click after the game ended) and are safe to ignore.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The displayed snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The cell index does not address a board square.
    #[display("Cell index {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// Errors that can occur when navigating history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested index addresses no recorded snapshot.
    #[display("Move {index} is out of range (history length {len})")]
    OutOfRange {
        /// The requested snapshot index.
        index: usize,
        /// Number of recorded snapshots.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

// ─────────────────────────────────────────────────────────────
//  Engine
// ─────────────────────────────────────────────────────────────

/// Tic-tac-toe game with snapshot history and time travel.
///
/// Operations are functional: they borrow `self` and return the next
/// state, so a rejected operation leaves the caller's copy untouched.
/// The caller holds the canonical value and replaces it on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) cursor: usize,
}

impl Game {
    /// Creates a new game: a single empty snapshot, cursor at game start.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Returns the displayed board snapshot.
    pub fn board(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Returns the index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns all recorded snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the player to move: X on even snapshots, O on odd.
    pub fn to_move(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        rules::status(self.board())
    }

    /// Returns the winner on the displayed snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.board()).map(|win| win.player)
    }

    /// Returns the completed line on the displayed snapshot, if any.
    pub fn winning_line(&self) -> Option<Line> {
        rules::check_winner(self.board()).map(|win| win.line)
    }

    /// Returns true if the displayed snapshot is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Returns positions still open on the displayed snapshot.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.board())
    }

    // ─────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────

    /// Plays the side to move at `pos`, returning the advanced game.
    ///
    /// Snapshots beyond the cursor are discarded: playing from a past
    /// snapshot starts a new branch in place of the abandoned future.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the displayed snapshot has a
    /// winner, [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(position = ?pos, player = ?self.to_move()))]
    pub fn play(&self, pos: Position) -> Result<Self, MoveError> {
        if rules::check_winner(self.board()).is_some() {
            debug!("move rejected: game over");
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(pos) {
            debug!("move rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let mut next = self.board().clone();
        next.set(pos, Square::Occupied(self.to_move()));

        let mut snapshots = self.snapshots[..=self.cursor].to_vec();
        snapshots.push(next);
        let game = Self {
            cursor: snapshots.len() - 1,
            snapshots,
        };

        invariants::assert_invariants(&game);
        debug!(cursor = game.cursor, "move accepted");
        Ok(game)
    }

    /// Plays at a raw cell index (0-8), as delivered by a click event.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for indices past the board,
    /// otherwise the same outcomes as [`Game::play`].
    #[instrument(skip(self))]
    pub fn play_at(&self, index: usize) -> Result<Self, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(pos)
    }

    /// Travels to a recorded snapshot without altering history.
    ///
    /// Truncation of an abandoned future happens on the next accepted
    /// [`Game::play`], not here.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if the index addresses no
    /// recorded snapshot.
    #[instrument(skip(self))]
    pub fn jump_to(&self, index: usize) -> Result<Self, JumpError> {
        if index >= self.snapshots.len() {
            debug!("jump rejected: out of range");
            return Err(JumpError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        Ok(Self {
            snapshots: self.snapshots.clone(),
            cursor: index,
        })
    }

    /// Projects the history into move list entries for navigation UI.
    ///
    /// Ascending is oldest first; descending is the exact reversal of
    /// the ascending sequence. Entries keep the indices they were built
    /// with, and projecting never touches engine state.
    #[instrument(skip(self))]
    pub fn move_list(&self, order: SortOrder) -> Vec<MoveDescriptor> {
        let mut moves: Vec<MoveDescriptor> = (0..self.snapshots.len())
            .map(|index| MoveDescriptor::new(index, index == self.cursor))
            .collect();
        if order == SortOrder::Descending {
            moves.reverse();
        }
        moves
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
