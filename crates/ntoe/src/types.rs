//! Core domain types: players, cells and slots.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the character used for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Maps a mark character to its player.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' => Some(Player::X),
            'O' => Some(Player::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when a string does not name a player.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown player {:?} (expected X or O)", input)]
pub struct ParsePlayerError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Player {
    type Err = ParsePlayerError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(ParsePlayerError {
                input: other.to_string(),
            }),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the player whose mark is here, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Interprets one character of a textual board.
    ///
    /// Returns `None` for decoration characters that carry no cell.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            other => Player::from_symbol(other).map(Cell::Occupied),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Occupied(player) => write!(f, "{}", player),
        }
    }
}

/// A (row, column) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    /// Zero-based row.
    row: usize,
    /// Zero-based column.
    col: usize,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index of this slot on a board of the given size.
    pub(crate) fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`Slot::index`].
    pub(crate) fn from_index(index: usize, size: usize) -> Self {
        Self::new(index / size, index % size)
    }
}

impl From<(usize, usize)> for Slot {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("X".parse::<Player>(), Ok(Player::X));
        assert_eq!(" o ".parse::<Player>(), Ok(Player::O));
        let err = "Z".parse::<Player>().unwrap_err();
        assert!(err.to_string().contains("Z"));
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::from_symbol('.'), Some(Cell::Empty));
        assert_eq!(Cell::from_symbol(' '), Some(Cell::Empty));
        assert_eq!(Cell::from_symbol('X'), Some(Cell::Occupied(Player::X)));
        assert_eq!(Cell::from_symbol('|'), None);
        assert_eq!(Cell::Occupied(Player::O).to_string(), "O");
    }

    #[test]
    fn test_slot_index_roundtrip_on_5x5() {
        let slot = Slot::new(3, 1);
        assert_eq!(slot.index(5), 16);
        assert_eq!(Slot::from_index(16, 5), slot);
    }
}
