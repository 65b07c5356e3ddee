//! Placement search - exhaustive enumeration of locked-board outcomes
//!
//! A breadth-first traversal of the control graph from a spawned piece:
//! nodes are full [`ActivePiece`] values, edges are the six searchable
//! controls, and the visited set deduplicates on structural identity, so the
//! traversal terminates on the finite state space. Every restable node is
//! locked, its lines cleared, and the distinct resulting boards collected.
//!
//! Rotate-180 is deliberately not an edge: SRS gives it no kick table, and
//! every placement it could produce is reachable with two quarter turns.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::core::active::ActivePiece;
use crate::core::board::Board;
use crate::core::rotation::RotationSystem;
use crate::types::{BOARD_HEIGHT, Control};

const SEARCH_CONTROLS: [Control; 6] = [
    Control::MoveLeft,
    Control::MoveRight,
    Control::SoftDrop,
    Control::HardDrop,
    Control::RotateCw,
    Control::RotateCcw,
];

/// Every distinct board a player could produce by placing `spawned`
/// somewhere and letting lines clear. With `anonymize`, piece identity is
/// erased to the generic garbage tag before collecting.
pub fn possible_boards<S>(spawned: &ActivePiece<S>, anonymize: bool) -> HashSet<Board>
where
    S: RotationSystem + Clone + Eq + Hash,
{
    let mut boards = HashSet::new();
    for placement in reachable_placements(spawned) {
        if !placement.is_restable() {
            continue;
        }
        let mut board = placement.lock();
        board.clear_lines();
        boards.insert(if anonymize { board.to_garbage() } else { board });
    }
    boards
}

/// Same search as [`possible_boards`], post-filtered to boards whose stack
/// stays within `height` rows of the bottom of the visible field. Restricted
/// modes (e.g. perfect-clear practice at height 4) use this.
pub fn possible_boards_below_height<S>(
    spawned: &ActivePiece<S>,
    height: i8,
    anonymize: bool,
) -> HashSet<Board>
where
    S: RotationSystem + Clone + Eq + Hash,
{
    let mut boards = possible_boards(spawned, anonymize);
    // Widened comparison: row + height + 2 can exceed i8 for large bounds.
    // A board with no empty visible row left is always over the bound.
    boards.retain(|board| {
        board.bottommost_visible_empty_row().map_or(false, |row| {
            i16::from(row) + i16::from(height) + 2 >= i16::from(BOARD_HEIGHT)
        })
    });
    boards
}

/// The full reachable set of placements, restable or not.
fn reachable_placements<S>(spawned: &ActivePiece<S>) -> HashSet<ActivePiece<S>>
where
    S: RotationSystem + Clone + Eq + Hash,
{
    // Drop toward the bottom-most empty row before searching. Anything above
    // that line is reachable from the dropped start by later soft drops too,
    // so this only shrinks the explored graph, never the result set. The two
    // row margin keeps kick room above the stack.
    let mut start = spawned.clone();
    let drops = start
        .board()
        .bottommost_visible_empty_row()
        .map_or(0, |row| (row - spawned.anchor().0 - 2).max(0));
    for _ in 0..drops {
        start = start.soft_drop();
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start.clone());
    queue.push_back(start);

    while let Some(placement) = queue.pop_front() {
        for control in SEARCH_CONTROLS {
            let next = placement.apply(control);
            if visited.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn search_terminates_and_finds_bottom_row_for_o() {
        let spawned = ActivePiece::spawn(Board::new(), PieceKind::O);
        let placements = reachable_placements(&spawned);
        // O on an empty board: 9 anchors per reachable row, all 4 rotation
        // states present, every state restable only on the floor.
        let restable = placements.iter().filter(|p| p.is_restable()).count();
        assert!(restable >= 9);
        assert!(placements.iter().all(|p| p.is_legal()));
    }
}
