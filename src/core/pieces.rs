//! Pieces module - tetromino occupancy masks
//!
//! Every (piece kind, rotation state) pair maps to four (row, col) offsets
//! inside a canonical 5x5 box, precomputed for all 28 combinations. Rotating
//! a tetromino is a table lookup, never a runtime matrix transform, so
//! repeated rotation is bit-identical with no drift.
//!
//! The North masks follow the SRS spawn shapes, e.g. T:
//!
//! ```text
//!   . . . . .
//!   . . T . .
//!   . T T T .
//!   . . . . .
//!   . . . . .
//! ```

use crate::types::{Cell, PieceKind, Rotation};

/// Offset of a single mino inside the 5x5 box, as (row, col)
pub type MinoOffset = (i8, i8);

/// Shape of a piece - four mino offsets
pub type PieceShape = [MinoOffset; 4];

/// An immutable tetromino value keyed by (kind, rotation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    kind: PieceKind,
    rotation: Rotation,
}

impl Tetromino {
    pub fn get(kind: PieceKind, rotation: Rotation) -> Self {
        Self { kind, rotation }
    }

    pub fn kind(self) -> PieceKind {
        self.kind
    }

    pub fn rotation(self) -> Rotation {
        self.rotation
    }

    /// The cell tag written when this piece locks.
    pub fn cell(self) -> Cell {
        self.kind.cell()
    }

    /// The four (row, col) mino offsets of this piece in its 5x5 box.
    pub fn minos(self) -> PieceShape {
        shape(self.kind, self.rotation)
    }

    pub fn rotate_cw(self) -> Self {
        Self::get(self.kind, self.rotation.rotate_cw())
    }

    pub fn rotate_ccw(self) -> Self {
        Self::get(self.kind, self.rotation.rotate_ccw())
    }

    pub fn rotate_180(self) -> Self {
        Self::get(self.kind, self.rotation.rotate_180())
    }
}

/// Get the mino offsets for a piece kind and rotation
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => i_shape(rotation),
        PieceKind::O => o_shape(rotation),
        PieceKind::T => t_shape(rotation),
        PieceKind::S => s_shape(rotation),
        PieceKind::Z => z_shape(rotation),
        PieceKind::J => j_shape(rotation),
        PieceKind::L => l_shape(rotation),
    }
}

fn i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 1), (2, 2), (2, 3), (2, 4)],
        Rotation::East => [(1, 2), (2, 2), (3, 2), (4, 2)],
        Rotation::South => [(2, 0), (2, 1), (2, 2), (2, 3)],
        Rotation::West => [(0, 2), (1, 2), (2, 2), (3, 2)],
    }
}

/// O occupies the same four cells in every rotation state only after its
/// per-state reference offset is applied; the raw box shifts.
fn o_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 2), (1, 3), (2, 2), (2, 3)],
        Rotation::East => [(2, 2), (2, 3), (3, 2), (3, 3)],
        Rotation::South => [(2, 1), (2, 2), (3, 1), (3, 2)],
        Rotation::West => [(1, 1), (1, 2), (2, 1), (2, 2)],
    }
}

fn t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 2), (2, 1), (2, 2), (2, 3)],
        Rotation::East => [(1, 2), (2, 2), (2, 3), (3, 2)],
        Rotation::South => [(2, 1), (2, 2), (2, 3), (3, 2)],
        Rotation::West => [(1, 2), (2, 1), (2, 2), (3, 2)],
    }
}

fn s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 2), (1, 3), (2, 1), (2, 2)],
        Rotation::East => [(1, 2), (2, 2), (2, 3), (3, 3)],
        Rotation::South => [(2, 2), (2, 3), (3, 1), (3, 2)],
        Rotation::West => [(1, 1), (2, 1), (2, 2), (3, 2)],
    }
}

fn z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 1), (1, 2), (2, 2), (2, 3)],
        Rotation::East => [(1, 3), (2, 2), (2, 3), (3, 2)],
        Rotation::South => [(2, 1), (2, 2), (3, 2), (3, 3)],
        Rotation::West => [(1, 2), (2, 1), (2, 2), (3, 1)],
    }
}

fn j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 1), (2, 1), (2, 2), (2, 3)],
        Rotation::East => [(1, 2), (1, 3), (2, 2), (3, 2)],
        Rotation::South => [(2, 1), (2, 2), (2, 3), (3, 3)],
        Rotation::West => [(1, 2), (2, 2), (3, 1), (3, 2)],
    }
}

fn l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 3), (2, 1), (2, 2), (2, 3)],
        Rotation::East => [(1, 2), (2, 2), (3, 2), (3, 3)],
        Rotation::South => [(2, 1), (2, 2), (2, 3), (3, 1)],
        Rotation::West => [(1, 1), (1, 2), (2, 2), (3, 2)],
    }
}
