//! Game rules for N x N tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board) deciding whether a game is
//! won, drawn or still open. Rules are kept apart from weighting so drivers
//! can ask "is this over?" without scoring anything.

pub mod draw;
pub mod win;

pub use draw::{can_still_win, is_dead};
pub use win::{check_winner, has_won};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Some line is still open to at least one player.
    InProgress,
    /// A player holds a complete line.
    Won(Player),
    /// Neither player can complete any line.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "{} has won", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates the status of the board.
///
/// X is checked before O; a malformed board holding lines for both reports X.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_dead(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

impl Board {
    /// Returns the status of the board.
    pub fn outcome(&self) -> Outcome {
        outcome(self)
    }

    /// Returns the first player found holding a complete line.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self)
    }

    /// Checks whether `player` holds a complete line.
    pub fn has_won(&self, player: Player) -> bool {
        has_won(self, player)
    }

    /// Checks whether some line is still free of `player`'s opponent.
    pub fn can_still_win(&self, player: Player) -> bool {
        can_still_win(self, player)
    }
}
