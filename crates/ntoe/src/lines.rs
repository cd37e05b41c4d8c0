//! Winning-line geometry for an N x N board.
//!
//! A line is a run of `win_length` contiguous slots along one of four
//! directions. Lines are generated from coordinates rather than listed,
//! so the same code serves 3x3 boards and 15x15 five-in-a-row alike.

use super::Slot;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// Direction a line runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Left to right along a row.
    Row,
    /// Top to bottom along a column.
    Column,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// Slot `step` cells along this direction from the window anchored at
    /// `(row, col)` with the given span.
    fn step(self, row: usize, col: usize, span: usize, step: usize) -> Slot {
        match self {
            Direction::Row => Slot::new(row, col + step),
            Direction::Column => Slot::new(row + step, col),
            Direction::Diagonal => Slot::new(row + step, col + step),
            Direction::AntiDiagonal => Slot::new(row + step, col + span - 1 - step),
        }
    }

    /// Anchors of every window of `span` cells in this direction.
    fn anchors(self, size: usize, span: usize) -> Vec<(usize, usize)> {
        let starts = size - span + 1;
        match self {
            Direction::Row => (0..size)
                .flat_map(|row| (0..starts).map(move |col| (row, col)))
                .collect(),
            Direction::Column => (0..size)
                .flat_map(|col| (0..starts).map(move |row| (row, col)))
                .collect(),
            Direction::Diagonal | Direction::AntiDiagonal => (0..starts)
                .flat_map(|row| (0..starts).map(move |col| (row, col)))
                .collect(),
        }
    }
}

/// A set of slots that wins the game when all hold the same mark.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    direction: Direction,
    slots: Vec<Slot>,
}

impl Line {
    /// Returns the direction of this line.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the slots on this line, in order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Checks whether the line passes through `slot`.
    pub fn contains(&self, slot: Slot) -> bool {
        self.slots.contains(&slot)
    }
}

/// Enumerates every winning line on a `size` x `size` board.
///
/// Callers guarantee `1 <= win_length <= size`. With `k = size - win_length + 1`
/// there are `2k(2 * size - win_length + 1)` lines.
#[instrument]
pub(crate) fn win_lines(size: usize, win_length: usize) -> Vec<Line> {
    let lines: Vec<Line> = Direction::iter()
        .flat_map(|direction| {
            direction
                .anchors(size, win_length)
                .into_iter()
                .map(move |(row, col)| Line {
                    direction,
                    slots: (0..win_length)
                        .map(|step| direction.step(row, col, win_length, step))
                        .collect(),
                })
        })
        .collect();
    trace!(count = lines.len(), "Generated win lines");
    lines
}

/// Maps each row-major slot index to the indices of the lines through it.
pub(crate) fn index_lines(size: usize, lines: &[Line]) -> Vec<Vec<usize>> {
    let mut through = vec![Vec::new(); size * size];
    for (line_idx, line) in lines.iter().enumerate() {
        for slot in line.slots() {
            through[slot.index(size)].push(line_idx);
        }
    }
    through
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_count(n: usize, m: usize) -> usize {
        let k = n - m + 1;
        2 * k * (2 * n - m + 1)
    }

    #[test]
    fn test_classic_board_has_eight_lines() {
        let lines = win_lines(3, 3);
        assert_eq!(lines.len(), 8);
        let anti = lines
            .iter()
            .find(|l| l.direction() == Direction::AntiDiagonal)
            .unwrap();
        assert_eq!(
            anti.slots(),
            &[Slot::new(0, 2), Slot::new(1, 1), Slot::new(2, 0)]
        );
    }

    #[test]
    fn test_line_counts_match_formula() {
        for (n, m) in [(1, 1), (3, 2), (4, 4), (5, 4), (7, 5), (6, 1)] {
            assert_eq!(win_lines(n, m).len(), expected_count(n, m), "n={n} m={m}");
        }
    }

    #[test]
    fn test_every_line_has_win_length_slots_in_bounds() {
        for line in win_lines(6, 4) {
            assert_eq!(line.slots().len(), 4);
            assert!(line.slots().iter().all(|s| s.row() < 6 && s.col() < 6));
        }
    }

    #[test]
    fn test_center_of_classic_board_is_on_four_lines() {
        let lines = win_lines(3, 3);
        let through = index_lines(3, &lines);
        assert_eq!(through[Slot::new(1, 1).index(3)].len(), 4);
        assert_eq!(through[Slot::new(0, 0).index(3)].len(), 3);
        assert_eq!(through[Slot::new(0, 1).index(3)].len(), 2);
    }
}
