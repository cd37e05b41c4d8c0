//! Errors surfaced by board construction, mutation and slot selection.

use super::Slot;

/// Error that can occur when building, mutating or querying a board.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum BoardError {
    /// Board size must be at least 1.
    #[display("Invalid board size {}: must be at least 1", size)]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },

    /// Win length must lie in `1..=size`.
    #[display("Invalid win length {} for a {}x{} board", win_length, size, size)]
    InvalidWinLength {
        /// Board size.
        size: usize,
        /// The rejected win length.
        win_length: usize,
    },

    /// Bulk replacement did not describe an N x N grid.
    #[display("Board shape mismatch: expected {} cells, found {}", expected, found)]
    ShapeMismatch {
        /// Cells required (N squared, or N per row).
        expected: usize,
        /// Cells supplied.
        found: usize,
    },

    /// Coordinate lies outside the board.
    #[display("Slot {} is out of bounds for a {}x{} board", slot, size, size)]
    OutOfBounds {
        /// The rejected slot.
        slot: Slot,
        /// Board size.
        size: usize,
    },

    /// Every cell is occupied.
    #[display("No empty slot remains on the board")]
    NoEmptySlot,

    /// Defensiveness must be finite and non-negative.
    #[display("Invalid defensiveness {}: must be finite and non-negative", value)]
    InvalidDefensiveness {
        /// The rejected value.
        value: f64,
    },
}

impl std::error::Error for BoardError {}
