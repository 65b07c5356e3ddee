//! Exhaustive tetromino placement enumeration.
//!
//! Given a board and a piece to spawn, this crate computes every distinct
//! locked-board outcome a player could produce with that one piece: a
//! breadth-first reachability search over the movement and rotation
//! controls, under a pluggable wall-kick rotation policy (SRS by default),
//! with line clears applied at lock time. Results can be compared, stored
//! and round-tripped exactly through the fumen v115 board codec.
//!
//! # Module Structure
//!
//! - [`types`]: cell, piece, rotation and control enums plus board constants
//! - [`core::board`]: the 10x24 grid with row and line-clear operations
//! - [`core::pieces`]: precomputed occupancy masks for all 28 piece states
//! - [`core::rotation`]: the [`core::RotationSystem`] strategy and SRS kicks
//! - [`core::active`]: the falling piece and its value-producing controls
//! - [`core::search`]: the exhaustive placement search
//! - [`codec`]: lossless board-sequence encoding and decoding
//!
//! # Example
//!
//! ```
//! use tetris_placements::core::{possible_boards, ActivePiece, Board};
//! use tetris_placements::types::PieceKind;
//!
//! let spawned = ActivePiece::spawn(Board::new(), PieceKind::T);
//! let boards = possible_boards(&spawned, false);
//! assert_eq!(boards.len(), 34);
//! ```

pub mod codec;
pub mod core;
pub mod types;

pub use crate::core::{possible_boards, possible_boards_below_height, ActivePiece, Board};
pub use crate::types::{Cell, Control, PieceKind, Rotation};
