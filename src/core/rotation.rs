//! Rotation policy - spawn placement and wall-kick tables
//!
//! A [`RotationSystem`] answers exactly three queries: where a piece spawns,
//! in which rotation state, and which kick translations to try after a
//! rotation. The placement engine is written against the trait, so alternate
//! rotation systems slot in without touching the search.
//!
//! [`Srs`] implements the Super Rotation System. Its kick lists are derived,
//! not hand-authored: each piece group carries per-rotation-state reference
//! points, and the kicks for a transition A -> B are the pairwise differences
//! ref(A) - ref(B). Reference data per <https://harddrop.com/wiki/SRS>.

use arrayvec::ArrayVec;

use crate::core::pieces::Tetromino;
use crate::types::{PieceKind, Rotation};

/// A kick translation to try after a rotation, as (row, col).
/// Positive row is downward.
pub type Kick = (i8, i8);

/// Ordered kick candidates; SRS has at most five per transition.
pub type KickList = ArrayVec<Kick, 5>;

/// Strategy object for spawning and rotating pieces on a 10x24 board.
pub trait RotationSystem {
    /// Anchor (row, col) of the piece's 5x5 box at spawn.
    fn spawn_offset(&self, tetromino: Tetromino) -> (i8, i8);

    /// Rotation state pieces spawn in.
    fn spawn_rotation(&self) -> Rotation;

    /// Ordered kick translations to try when rotating `tetromino` into
    /// `target`. The engine must accept the first legal candidate and leave
    /// the piece untouched when every candidate fails.
    fn kick_tests(&self, tetromino: Tetromino, target: Rotation) -> KickList;
}

/// The Super Rotation System.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Srs;

// Reference points as (row, col); row grows downward, so the published
// (x, y-up) tables appear here with y negated and the axes swapped.
const JLSTZ_REFERENCE: [&[Kick]; 4] = [
    &[(0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],      // North
    &[(0, 0), (0, 1), (1, 1), (-2, 0), (-2, 1)],    // East
    &[(0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],      // South
    &[(0, 0), (0, -1), (1, -1), (-2, 0), (-2, -1)], // West
];

const I_REFERENCE: [&[Kick]; 4] = [
    &[(0, 0), (0, -1), (0, 2), (0, -1), (0, 2)],      // North
    &[(0, -1), (0, 0), (0, 0), (-1, 0), (2, 0)],      // East
    &[(-1, -1), (-1, 1), (-1, -2), (0, 1), (0, -2)],  // South
    &[(-1, 0), (-1, 0), (-1, 0), (1, 0), (-2, 0)],    // West
];

const O_REFERENCE: [&[Kick]; 4] = [
    &[(0, 0)],  // North
    &[(1, 0)],  // East
    &[(1, -1)], // South
    &[(0, -1)], // West
];

fn reference_points(kind: PieceKind, rotation: Rotation) -> &'static [Kick] {
    let table = match kind {
        PieceKind::I => &I_REFERENCE,
        PieceKind::O => &O_REFERENCE,
        _ => &JLSTZ_REFERENCE,
    };
    let idx = match rotation {
        Rotation::North => 0,
        Rotation::East => 1,
        Rotation::South => 2,
        Rotation::West => 3,
    };
    table[idx]
}

impl RotationSystem for Srs {
    fn spawn_offset(&self, _tetromino: Tetromino) -> (i8, i8) {
        // Static in SRS: box anchored at row 0, col 2.
        (0, 2)
    }

    fn spawn_rotation(&self) -> Rotation {
        Rotation::North
    }

    fn kick_tests(&self, tetromino: Tetromino, target: Rotation) -> KickList {
        let from = tetromino.rotation();
        let mut kicks = KickList::new();

        // SRS defines no 180 kick table: a half turn gets one unkicked try.
        if target == from.rotate_180() {
            kicks.push((0, 0));
            return kicks;
        }

        let old = reference_points(tetromino.kind(), from);
        let new = reference_points(tetromino.kind(), target);
        for (&(old_row, old_col), &(new_row, new_col)) in old.iter().zip(new) {
            kicks.push((old_row - new_row, old_col - new_col));
        }
        kicks
    }
}
