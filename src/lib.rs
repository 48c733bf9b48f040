//! Pure tic-tac-toe game logic with snapshot history and time travel.
//!
//! The crate has two layers:
//!
//! - **Rules**: total functions over a [`Board`]: [`rules::check_winner()`]
//!   (with the completed line for highlighting), [`rules::is_draw()`], and
//!   [`rules::status()`]. Leaf layer, no state.
//! - **Engine**: [`Game`] records one board snapshot per accepted move
//!   plus a cursor selecting the displayed snapshot and the side to
//!   move. Traveling to a past snapshot is pure navigation; playing from
//!   there discards the abandoned future and records a new branch.
//!
//! Everything is synchronous pure computation. Illegal requests (an
//! occupied square, a finished game, an unrecorded snapshot) come back
//! as plain error values and leave the caller's state untouched.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Game, GameStatus, Position, SortOrder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let game = Game::new()
//!     .play(Position::Center)?
//!     .play(Position::TopLeft)?
//!     .play(Position::TopRight)?;
//! assert_eq!(game.history().len(), 4);
//!
//! // Travel back and branch: the abandoned future is discarded on the
//! // next accepted move.
//! let game = game.jump_to(1)?.play(Position::BottomLeft)?;
//! assert_eq!(game.history().len(), 3);
//! assert!(matches!(game.status(), GameStatus::InProgress(_)));
//!
//! for entry in game.move_list(SortOrder::Ascending) {
//!     println!("{} (current: {})", entry.label(), entry.is_current());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod descriptor;
mod game;
mod position;
mod types;

// Public rule and invariant layers
pub mod invariants;
pub mod rules;

// Crate-level exports - engine
pub use game::{Game, JumpError, MoveError};

// Crate-level exports - move list projection
pub use descriptor::{MoveDescriptor, SortOrder};

// Crate-level exports - domain types
pub use position::Position;
pub use rules::{GameStatus, LINES, Line, Win};
pub use types::{Board, Player, Square};
