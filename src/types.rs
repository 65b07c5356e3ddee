//! Core types shared across the crate
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: i8 = 10;
pub const BOARD_HEIGHT: i8 = 24;

/// First and last rows of the visible 20-row play field.
/// Rows 0-2 are hidden overflow above play; row 23 is a hidden sentinel
/// below the field that a resting piece may never occupy.
pub const VISIBLE_TOP: i8 = 3;
pub const VISIBLE_BOTTOM: i8 = 22;
pub const FLOOR_ROW: i8 = 23;

/// Total number of cells on the board
pub const CELL_COUNT: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// One grid unit of a board.
///
/// Nine states: empty, one per tetromino class, and generic garbage.
/// The numeric values are part of the fumen codec's cell arithmetic and
/// must not be reordered.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty = 0,
    I = 1,
    L = 2,
    O = 3,
    Z = 4,
    T = 5,
    J = 6,
    S = 7,
    Garbage = 8,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Numeric value used by the codec's diff arithmetic.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Cell::value`]; `None` for anything outside 0..=8.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::I),
            2 => Some(Cell::L),
            3 => Some(Cell::O),
            4 => Some(Cell::Z),
            5 => Some(Cell::T),
            6 => Some(Cell::J),
            7 => Some(Cell::S),
            8 => Some(Cell::Garbage),
            _ => None,
        }
    }
}

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// All seven piece kinds, for iteration in tests and callers.
pub const ALL_PIECES: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
];

impl PieceKind {
    /// The cell tag this piece writes when locked.
    pub fn cell(self) -> Cell {
        match self {
            PieceKind::I => Cell::I,
            PieceKind::O => Cell::O,
            PieceKind::T => Cell::T,
            PieceKind::S => Cell::S,
            PieceKind::Z => Cell::Z,
            PieceKind::J => Cell::J,
            PieceKind::L => Cell::L,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation states (North = spawn orientation).
///
/// The four states form a cyclic group: clockwise is +1, counterclockwise
/// is -1 and a half turn is +2, all modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Rotate 180 degrees
    pub fn rotate_180(self) -> Self {
        self.rotate_cw().rotate_cw()
    }
}

/// Piece controls.
///
/// `Rotate180` exists as a control but is policy-dependent: SRS defines no
/// 180 kick table, so the placement search does not traverse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Rotate180,
}
