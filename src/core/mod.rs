//! Core module - pure placement logic with no external I/O
//!
//! Everything here is deterministic and value-semantic: boards and active
//! pieces are snapshots, and every transition returns a new value.

pub mod active;
pub mod board;
pub mod pieces;
pub mod rotation;
pub mod search;

// Re-export commonly used types
pub use active::ActivePiece;
pub use board::Board;
pub use pieces::Tetromino;
pub use rotation::{Kick, KickList, RotationSystem, Srs};
pub use search::{possible_boards, possible_boards_below_height};
