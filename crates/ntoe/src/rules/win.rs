//! Win detection.

use super::super::{Board, Cell, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks whether `player` holds every slot of some line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    board
        .lines()
        .iter()
        .any(|line| line.slots().iter().all(|&slot| board.cell_at(slot) == mark))
}

/// Returns the first player, in X, O order, holding a complete line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| has_won(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_column() {
        let board = Board::parse(3, 3, ".O.|XO.|XO.").unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::parse(3, 3, "..X|OX.|XO.").unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_short_line_on_large_board() {
        let mut board = Board::with_win_length(5, 3).unwrap();
        for slot in [(1, 2), (2, 3), (3, 4)] {
            board.add_placement(slot, Player::O).unwrap();
        }
        assert!(has_won(&board, Player::O));
        assert!(!has_won(&board, Player::X));
    }

    #[test]
    fn test_full_length_needed_without_win_length() {
        let board = Board::parse(4, 4, "XXX.|....|....|....").unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
