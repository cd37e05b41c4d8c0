//! ntoe - move selection for tic-tac-toe on an N x N board
//!
//! Given any board position, ntoe weights every empty slot for the player
//! about to move and returns the heaviest one. Each call depends only on the
//! current grid, so one [`Board`] can be reused across games or positions.
//!
//! # Architecture
//!
//! - **Board**: the grid, its bulk and single-cell mutations, and the
//!   precomputed winning lines (rows, columns and diagonals of `win_length`)
//! - **Rules**: win and draw detection over those lines
//! - **Scoring**: per-slot weights, tie-breaking and move advice
//!
//! Boards are deliberately permissive: piece counts and turn order are never
//! checked, so arbitrary hypothetical positions can be analyzed.
//!
//! # Example
//!
//! ```
//! use ntoe::{Board, Player, Slot};
//!
//! # fn example() -> Result<(), ntoe::BoardError> {
//! let mut board = Board::new(3)?;
//! board.add_placement((0, 0), Player::X)?;
//! board.add_placement((0, 1), Player::X)?;
//!
//! assert_eq!(board.best_slot(Player::X)?, Slot::new(0, 2));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod lines;
pub mod rules;
mod scoring;
mod types;

pub use board::Board;
pub use error::BoardError;
pub use lines::{Direction, Line};
pub use rules::Outcome;
pub use scoring::{Advice, DEFAULT_DEFENSIVENESS, LINE_BASE, Scoring, SlotWeights, TieBreak, Weight};
pub use types::{Cell, ParsePlayerError, Player, Slot};
