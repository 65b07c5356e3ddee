//! Board module - the 10x24 grid of cells
//!
//! Uses a flat array for cache locality and structural equality/hashing.
//! Coordinates are (row, col): row 0 at the top, rows 0-2 hidden above play,
//! rows 3-22 visible, row 23 a hidden sentinel below the field.

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, CELL_COUNT, FLOOR_ROW, VISIBLE_BOTTOM, VISIBLE_TOP};

/// The board - 24 rows x 10 columns using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create a board from a flat row-major cell array
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT || col < 0 || col >= BOARD_WIDTH {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    /// Get cell at (row, col), or `None` if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a position is within bounds and holds a non-empty cell
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(cell) if !cell.is_empty())
    }

    /// Check if a row is entirely empty
    pub fn is_row_empty(&self, row: i8) -> bool {
        self.row(row).iter().all(|cell| cell.is_empty())
    }

    /// Check if a row is completely filled
    pub fn is_row_filled(&self, row: i8) -> bool {
        self.row(row).iter().all(|cell| !cell.is_empty())
    }

    /// Get one row as a slice.
    ///
    /// Panics on an out-of-range row; that is a programming error, not a
    /// player-facing condition.
    pub fn row(&self, row: i8) -> &[Cell] {
        assert!((0..BOARD_HEIGHT).contains(&row), "row {row} out of range");
        let start = (row as usize) * (BOARD_WIDTH as usize);
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Remove every completely filled row and insert that many empty rows at
    /// the top, preserving the total row count. Returns the number removed.
    pub fn clear_lines(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut write_row = BOARD_HEIGHT as usize;

        // Compact unfilled rows downward, scanning bottom to top.
        for read_row in (0..BOARD_HEIGHT).rev() {
            if self.is_row_filled(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row as usize {
                    let src = (read_row as usize) * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        for cell in &mut self.cells[..write_row * width] {
            *cell = Cell::Empty;
        }
        cleared
    }

    /// Return a copy with every non-empty cell replaced by [`Cell::Garbage`],
    /// discarding piece identity. Idempotent.
    pub fn to_garbage(&self) -> Self {
        let mut cells = self.cells;
        for cell in &mut cells {
            if !cell.is_empty() {
                *cell = Cell::Garbage;
            }
        }
        Self { cells }
    }

    /// The lowest row above the sentinel that is still entirely empty,
    /// scanning upward from row 22. `None` when every such row has a filled
    /// cell. Used to bound the placement search's starting depth.
    pub fn bottommost_visible_empty_row(&self) -> Option<i8> {
        (0..FLOOR_ROW).rev().find(|&row| self.is_row_empty(row))
    }

    /// Check if the visible region (rows 3..=22) is completely empty
    pub fn is_visibly_empty(&self) -> bool {
        (VISIBLE_TOP..=VISIBLE_BOTTOM).all(|row| self.is_row_empty(row))
    }

    /// Get a reference to the internal cell array, row-major
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
