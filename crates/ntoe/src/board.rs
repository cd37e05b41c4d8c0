//! The N x N board and its mutation operations.

use super::error::BoardError;
use super::lines::{self, Line};
use super::{Cell, Player, Slot};
use tracing::{debug, instrument};

/// An N x N tic-tac-toe board.
///
/// The board never checks that piece counts are consistent with turn order.
/// Any grid of `Empty`, `X` and `O` is accepted so hypothetical positions can
/// be analyzed offline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_length: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
    lines: Vec<Line>,
    /// Line indices passing through each cell, row-major.
    lines_through: Vec<Vec<usize>>,
}

impl Board {
    /// Creates an empty `size` x `size` board where a line spans the whole board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size < 1`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Self::with_win_length(size, size)
    }

    /// Creates an empty board where `win_length` marks in a row win.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size < 1` or `size * size`
    /// overflows, and [`BoardError::InvalidWinLength`] unless
    /// `1 <= win_length <= size`.
    #[instrument]
    pub fn with_win_length(size: usize, win_length: usize) -> Result<Self, BoardError> {
        let cell_count = match size.checked_mul(size) {
            Some(count) if size >= 1 => count,
            _ => return Err(BoardError::InvalidSize { size }),
        };
        if win_length < 1 || win_length > size {
            return Err(BoardError::InvalidWinLength { size, win_length });
        }

        let lines = lines::win_lines(size, win_length);
        let lines_through = lines::index_lines(size, &lines);
        debug!(size, win_length, lines = lines.len(), "Created board");

        Ok(Self {
            size,
            win_length,
            cells: vec![Cell::Empty; cell_count],
            lines,
            lines_through,
        })
    }

    /// Creates a board and fills it from its textual form.
    ///
    /// See [`Board::set_board_str`] for the accepted format.
    #[instrument(skip(text))]
    pub fn parse(size: usize, win_length: usize, text: &str) -> Result<Self, BoardError> {
        let mut board = Self::with_win_length(size, win_length)?;
        board.set_board_str(text)?;
        Ok(board)
    }

    /// Returns the board size N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of marks in a row needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Returns every winning line on the board.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Iterates over the winning lines passing through `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `slot` is not on the board.
    pub fn lines_through(
        &self,
        slot: impl Into<Slot>,
    ) -> Result<impl Iterator<Item = &Line>, BoardError> {
        let index = self.index_of(slot.into())?;
        Ok(self.lines_through[index].iter().map(|&i| &self.lines[i]))
    }

    /// Checks whether `slot` lies on the board.
    pub fn contains(&self, slot: Slot) -> bool {
        slot.row() < self.size && slot.col() < self.size
    }

    /// Reads the cell at `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `slot` is not on the board.
    pub fn get(&self, slot: impl Into<Slot>) -> Result<Cell, BoardError> {
        let index = self.index_of(slot.into())?;
        Ok(self.cells[index])
    }

    /// Places `player`'s mark at `slot`.
    ///
    /// An occupied cell is overwritten without complaint, and turn order is
    /// not checked.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `slot` is not on the board.
    #[instrument(skip(self, slot))]
    pub fn add_placement(&mut self, slot: impl Into<Slot>, player: Player) -> Result<(), BoardError> {
        let slot = slot.into();
        let index = self.index_of(slot)?;
        if let Some(previous) = self.cells[index].player() {
            debug!(%slot, %previous, "Overwriting occupied slot");
        }
        self.cells[index] = Cell::Occupied(player);
        debug!(%slot, "Placed mark");
        Ok(())
    }

    /// Replaces the whole grid.
    ///
    /// The board is left unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ShapeMismatch`] unless `grid` has N rows of N cells.
    #[instrument(skip(self, grid), fields(size = self.size))]
    pub fn set_board<R: AsRef<[Cell]>>(&mut self, grid: &[R]) -> Result<(), BoardError> {
        if grid.len() != self.size {
            return Err(BoardError::ShapeMismatch {
                expected: self.size,
                found: grid.len(),
            });
        }
        if let Some(row) = grid.iter().map(AsRef::as_ref).find(|r| r.len() != self.size) {
            return Err(BoardError::ShapeMismatch {
                expected: self.size,
                found: row.len(),
            });
        }

        self.cells = grid
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Ok(())
    }

    /// Replaces the whole grid from its textual form.
    ///
    /// `X` and `O` are marks, `.` and space are empty cells, and any other
    /// character is decoration that is ignored, so `"XX.|.O.|..."` and a
    /// multi-line layout both work. The board is left unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ShapeMismatch`] unless exactly N squared cells are read.
    #[instrument(skip(self, text), fields(size = self.size))]
    pub fn set_board_str(&mut self, text: &str) -> Result<(), BoardError> {
        let cells: Vec<Cell> = text.chars().filter_map(Cell::from_symbol).collect();
        let expected = self.cells.len();
        if cells.len() != expected {
            return Err(BoardError::ShapeMismatch {
                expected,
                found: cells.len(),
            });
        }
        self.cells = cells;
        Ok(())
    }

    /// Iterates over the empty slots in row-major order.
    pub fn empty_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| Slot::from_index(i, self.size))
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Line indices through the cell at a row-major index.
    pub(crate) fn line_indices_at(&self, index: usize) -> &[usize] {
        &self.lines_through[index]
    }

    /// Cell at a slot known to be on the board.
    pub(crate) fn cell_at(&self, slot: Slot) -> Cell {
        self.cells[slot.index(self.size)]
    }

    fn index_of(&self, slot: Slot) -> Result<usize, BoardError> {
        if self.contains(slot) {
            Ok(slot.index(self.size))
        } else {
            Err(BoardError::OutOfBounds {
                slot,
                size: self.size,
            })
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_grid(f, self.size, self.cells.iter())
    }
}

/// Writes N x N items as rows joined by ` | `, separated by dashed lines.
pub(crate) fn write_grid<T: std::fmt::Display>(
    f: &mut std::fmt::Formatter<'_>,
    size: usize,
    items: impl Iterator<Item = T>,
) -> std::fmt::Result {
    let separator = "----".repeat(size);
    for (i, item) in items.enumerate() {
        let col = i % size;
        if col == 0 && i > 0 {
            writeln!(f)?;
            writeln!(f, "{}", separator)?;
        }
        if col > 0 {
            write!(f, " | ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
