//! Draw detection.
//!
//! A position is dead once no line remains that either player could still
//! fill. That happens no later than the board filling up, and often earlier.

use super::super::{Board, Cell, Player};
use tracing::instrument;

/// Checks whether some line holds no mark of `player`'s opponent.
#[instrument(skip(board))]
pub fn can_still_win(board: &Board, player: Player) -> bool {
    let blocker = Cell::Occupied(player.opponent());
    board
        .lines()
        .iter()
        .any(|line| line.slots().iter().all(|&slot| board.cell_at(slot) != blocker))
}

/// Checks whether neither player can complete any line.
#[instrument(skip(board))]
pub fn is_dead(board: &Board) -> bool {
    !can_still_win(board, Player::X) && !can_still_win(board, Player::O)
}
