//! Active piece - a board with a tetromino yet to be locked
//!
//! Every control application is value-producing: it returns a new
//! [`ActivePiece`] (or, for [`ActivePiece::drop_and_lock`], a plain
//! [`Board`]) instead of mutating in place, so callers can keep prior
//! snapshots without aliasing hazards. Illegal moves are silent no-ops,
//! mirroring normal play feedback.

use crate::core::board::Board;
use crate::core::pieces::{PieceShape, Tetromino};
use crate::core::rotation::{RotationSystem, Srs};
use crate::types::{BOARD_WIDTH, Control, FLOOR_ROW, PieceKind};

/// A board plus the currently falling tetromino and its (row, col) anchor.
///
/// Equality and hashing cover the board cells, the tetromino identity, the
/// anchor and the rotation system, which is exactly the node identity the
/// placement search deduplicates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece<S = Srs>
where
    S: RotationSystem,
{
    board: Board,
    tetromino: Tetromino,
    row: i8,
    col: i8,
    rotation_system: S,
}

impl ActivePiece<Srs> {
    /// Spawn `kind` on `board` under SRS.
    pub fn spawn(board: Board, kind: PieceKind) -> Self {
        Self::spawn_with(board, kind, Srs)
    }
}

impl<S> ActivePiece<S>
where
    S: RotationSystem + Clone,
{
    /// Spawn `kind` on `board` at the rotation system's spawn state and
    /// anchor.
    pub fn spawn_with(board: Board, kind: PieceKind, rotation_system: S) -> Self {
        let tetromino = Tetromino::get(kind, rotation_system.spawn_rotation());
        let (row, col) = rotation_system.spawn_offset(tetromino);
        Self {
            board,
            tetromino,
            row,
            col,
            rotation_system,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tetromino(&self) -> Tetromino {
        self.tetromino
    }

    /// Anchor (row, col) of the tetromino's 5x5 box on the board.
    pub fn anchor(&self) -> (i8, i8) {
        (self.row, self.col)
    }

    /// The four board coordinates currently occupied by the tetromino.
    pub fn occupied_cells(&self) -> PieceShape {
        self.occupied_cells_at(self.row, self.col)
    }

    fn occupied_cells_at(&self, row: i8, col: i8) -> PieceShape {
        self.tetromino
            .minos()
            .map(|(mino_row, mino_col)| (row + mino_row, col + mino_col))
    }

    /// Would the piece be legal anchored at (row, col)? Legal means every
    /// occupied cell lies within the horizontal bounds, above the sentinel
    /// row, and on an empty board cell.
    fn is_legal_at(&self, row: i8, col: i8) -> bool {
        self.occupied_cells_at(row, col).iter().all(|&(r, c)| {
            (0..FLOOR_ROW).contains(&r)
                && (0..BOARD_WIDTH).contains(&c)
                && !self.board.is_occupied(r, c)
        })
    }

    /// Check the current anchor for legality.
    pub fn is_legal(&self) -> bool {
        self.is_legal_at(self.row, self.col)
    }

    /// A legal placement that could still fall further. A piece is supported
    /// (not floating) as soon as one cell directly below it, outside the
    /// piece itself, is the sentinel row or a filled cell.
    fn is_floating(&self) -> bool {
        let cells = self.occupied_cells();
        for &(row, col) in &cells {
            let below = (row + 1, col);
            if cells.contains(&below) {
                continue;
            }
            if below.0 == FLOOR_ROW || self.board.is_occupied(below.0, below.1) {
                return false;
            }
        }
        true
    }

    /// Restable: legal now and resting, so locking here is valid.
    pub fn is_restable(&self) -> bool {
        self.is_legal() && !self.is_floating()
    }

    fn translated(&self, row_delta: i8, col_delta: i8) -> Self {
        let (row, col) = (self.row + row_delta, self.col + col_delta);
        let mut next = self.clone();
        if self.is_legal_at(row, col) {
            next.row = row;
            next.col = col;
        }
        next
    }

    fn rotated(&self, target: Tetromino) -> Self {
        let kicks = self.rotation_system.kick_tests(self.tetromino, target.rotation());
        for (kick_row, kick_col) in kicks {
            let mut candidate = self.clone();
            candidate.tetromino = target;
            let (row, col) = (self.row + kick_row, self.col + kick_col);
            if candidate.is_legal_at(row, col) {
                candidate.row = row;
                candidate.col = col;
                return candidate;
            }
        }
        // Every kick failed: the rotation has no effect.
        self.clone()
    }

    pub fn move_left(&self) -> Self {
        self.translated(0, -1)
    }

    pub fn move_right(&self) -> Self {
        self.translated(0, 1)
    }

    pub fn soft_drop(&self) -> Self {
        self.translated(1, 0)
    }

    /// Batch soft drop: the greatest fall the board allows, without locking.
    pub fn hard_drop(&self) -> Self {
        let mut next = self.clone();
        while next.is_legal_at(next.row + 1, next.col) {
            next.row += 1;
        }
        next
    }

    pub fn rotate_cw(&self) -> Self {
        self.rotated(self.tetromino.rotate_cw())
    }

    pub fn rotate_ccw(&self) -> Self {
        self.rotated(self.tetromino.rotate_ccw())
    }

    pub fn rotate_180(&self) -> Self {
        self.rotated(self.tetromino.rotate_180())
    }

    /// Apply one control, yielding the resulting placement. Note that
    /// `HardDrop` here only drops; locking is a separate, explicit step.
    pub fn apply(&self, control: Control) -> Self {
        match control {
            Control::MoveLeft => self.move_left(),
            Control::MoveRight => self.move_right(),
            Control::SoftDrop => self.soft_drop(),
            Control::HardDrop => self.hard_drop(),
            Control::RotateCw => self.rotate_cw(),
            Control::RotateCcw => self.rotate_ccw(),
            Control::Rotate180 => self.rotate_180(),
        }
    }

    /// Merge the tetromino into the board at the current anchor, writing its
    /// cell tag. Does not clear lines; the anchor is assumed legal.
    pub fn lock(&self) -> Board {
        let mut board = self.board.clone();
        for (row, col) in self.occupied_cells() {
            board.set(row, col, self.tetromino.cell());
        }
        board
    }

    /// Gameplay hard drop: fall as far as possible, lock, clear lines.
    /// Returns the resulting board and the number of lines cleared.
    pub fn drop_and_lock(&self) -> (Board, usize) {
        let mut board = self.hard_drop().lock();
        let cleared = board.clear_lines();
        (board, cleared)
    }
}
