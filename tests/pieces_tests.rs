//! Active piece tests - spawn positions, movement and rotation on a board

use std::collections::BTreeSet;

use tetris_placements::core::{ActivePiece, Board};
use tetris_placements::types::{Cell, PieceKind};

fn coords(piece: &ActivePiece) -> BTreeSet<(i8, i8)> {
    piece.occupied_cells().into_iter().collect()
}

fn cells(list: &[(i8, i8)]) -> BTreeSet<(i8, i8)> {
    list.iter().copied().collect()
}

#[test]
fn test_spawn_positions() {
    let expected: [(PieceKind, [(i8, i8); 4]); 7] = [
        (PieceKind::I, [(2, 3), (2, 4), (2, 5), (2, 6)]),
        (PieceKind::J, [(1, 3), (2, 3), (2, 4), (2, 5)]),
        (PieceKind::L, [(1, 5), (2, 3), (2, 4), (2, 5)]),
        (PieceKind::O, [(1, 4), (1, 5), (2, 4), (2, 5)]),
        (PieceKind::S, [(1, 4), (1, 5), (2, 3), (2, 4)]),
        (PieceKind::T, [(1, 4), (2, 3), (2, 4), (2, 5)]),
        (PieceKind::Z, [(1, 3), (1, 4), (2, 4), (2, 5)]),
    ];
    for (kind, cell_list) in expected {
        let piece = ActivePiece::spawn(Board::new(), kind);
        assert_eq!(coords(&piece), cells(&cell_list), "{kind:?} spawn");
        assert!(piece.is_legal());
    }
}

#[test]
fn test_i_move_left_until_wall() {
    let piece = ActivePiece::spawn(Board::new(), PieceKind::I);
    assert_eq!(coords(&piece), cells(&[(2, 3), (2, 4), (2, 5), (2, 6)]));

    let one = piece.move_left();
    // The original snapshot is untouched.
    assert_eq!(coords(&piece), cells(&[(2, 3), (2, 4), (2, 5), (2, 6)]));
    assert_eq!(coords(&one), cells(&[(2, 2), (2, 3), (2, 4), (2, 5)]));

    let two = one.move_left();
    assert_eq!(coords(&two), cells(&[(2, 1), (2, 2), (2, 3), (2, 4)]));

    let at_wall = two.move_left();
    assert_eq!(coords(&at_wall), cells(&[(2, 0), (2, 1), (2, 2), (2, 3)]));

    // Into the wall: no movement.
    let blocked = at_wall.move_left();
    assert_eq!(coords(&blocked), coords(&at_wall));
}

#[test]
fn test_i_move_right_until_wall() {
    let mut piece = ActivePiece::spawn(Board::new(), PieceKind::I);
    for _ in 0..3 {
        piece = piece.move_right();
    }
    assert_eq!(coords(&piece), cells(&[(2, 6), (2, 7), (2, 8), (2, 9)]));

    let blocked = piece.move_right();
    assert_eq!(coords(&blocked), coords(&piece));
}

#[test]
fn test_i_soft_drop_to_bottom() {
    let mut piece = ActivePiece::spawn(Board::new(), PieceKind::I);
    for row in 3..23 {
        piece = piece.soft_drop();
        assert_eq!(
            coords(&piece),
            cells(&[(row, 3), (row, 4), (row, 5), (row, 6)])
        );
    }
    // At the bottom the drop is a no-op.
    let bottom = piece.soft_drop();
    assert_eq!(coords(&bottom), cells(&[(22, 3), (22, 4), (22, 5), (22, 6)]));
}

#[test]
fn test_o_hard_drop_to_bottom_rows() {
    let (board, cleared) = ActivePiece::spawn(Board::new(), PieceKind::O).drop_and_lock();
    assert_eq!(cleared, 0);
    for row in 0..21 {
        assert!(board.is_row_empty(row));
    }
    for row in [21, 22] {
        assert_eq!(
            board.row(row),
            &[
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::O,
                Cell::O,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
            ]
        );
    }
    assert!(board.is_row_empty(23));
}

#[test]
fn test_o_hard_drop_with_obstruction() {
    let mut board = Board::new();
    for (row, col) in [(10, 4), (13, 5), (15, 5), (18, 4), (20, 5)] {
        board.set(row, col, Cell::Garbage);
    }
    let dropped = ActivePiece::spawn(board, PieceKind::O).hard_drop();
    assert_eq!(coords(&dropped), cells(&[(8, 4), (8, 5), (9, 4), (9, 5)]));
    assert!(dropped.is_restable());
}

#[test]
fn test_o_hard_drop_in_place() {
    let mut board = Board::new();
    board.set(3, 5, Cell::Garbage);
    let piece = ActivePiece::spawn(board, PieceKind::O);
    let dropped = piece.hard_drop();
    assert_eq!(coords(&dropped), cells(&[(1, 4), (1, 5), (2, 4), (2, 5)]));
}

#[test]
fn test_i_rotate_cw_full_cycle() {
    let i0 = ActivePiece::spawn(Board::new(), PieceKind::I);
    assert_eq!(coords(&i0), cells(&[(2, 3), (2, 4), (2, 5), (2, 6)]));

    let i90 = i0.rotate_cw();
    assert_eq!(coords(&i90), cells(&[(1, 5), (2, 5), (3, 5), (4, 5)]));

    let i180 = i90.rotate_cw();
    assert_eq!(coords(&i180), cells(&[(3, 3), (3, 4), (3, 5), (3, 6)]));

    let i270 = i180.rotate_cw();
    assert_eq!(coords(&i270), cells(&[(1, 4), (2, 4), (3, 4), (4, 4)]));

    let i360 = i270.rotate_cw();
    assert_eq!(coords(&i360), coords(&i0));
}

#[test]
fn test_i_rotate_ccw_full_cycle() {
    let i0 = ActivePiece::spawn(Board::new(), PieceKind::I);

    let i270 = i0.rotate_ccw();
    assert_eq!(coords(&i270), cells(&[(1, 4), (2, 4), (3, 4), (4, 4)]));

    let i180 = i270.rotate_ccw();
    assert_eq!(coords(&i180), cells(&[(3, 3), (3, 4), (3, 5), (3, 6)]));

    let i90 = i180.rotate_ccw();
    assert_eq!(coords(&i90), cells(&[(1, 5), (2, 5), (3, 5), (4, 5)]));

    let back = i90.rotate_ccw();
    assert_eq!(coords(&back), coords(&i0));
}

#[test]
fn test_t_rotate_cw_full_cycle() {
    let t0 = ActivePiece::spawn(Board::new(), PieceKind::T);
    assert_eq!(coords(&t0), cells(&[(1, 4), (2, 3), (2, 4), (2, 5)]));

    let t90 = t0.rotate_cw();
    assert_eq!(coords(&t90), cells(&[(1, 4), (2, 4), (2, 5), (3, 4)]));

    let t180 = t90.rotate_cw();
    assert_eq!(coords(&t180), cells(&[(2, 3), (2, 4), (2, 5), (3, 4)]));

    let t270 = t180.rotate_cw();
    assert_eq!(coords(&t270), cells(&[(1, 4), (2, 3), (2, 4), (3, 4)]));

    let t360 = t270.rotate_cw();
    assert_eq!(coords(&t360), coords(&t0));
}

#[test]
fn test_o_rotation_never_moves_cells() {
    // Per-state box shifts cancel against the single derived kick.
    let o = ActivePiece::spawn(Board::new(), PieceKind::O);
    let spawn_coords = coords(&o);
    let mut cw = o.clone();
    let mut ccw = o;
    for _ in 0..4 {
        cw = cw.rotate_cw();
        ccw = ccw.rotate_ccw();
        assert_eq!(coords(&cw), spawn_coords);
        assert_eq!(coords(&ccw), spawn_coords);
    }
}

#[test]
fn test_half_turn_applies_unkicked() {
    // A half turn gets exactly one zero-offset attempt; in the open it
    // succeeds in place.
    let t0 = ActivePiece::spawn(Board::new(), PieceKind::T);
    let t180 = t0.rotate_180();
    assert_eq!(coords(&t180), cells(&[(2, 3), (2, 4), (2, 5), (3, 4)]));
    assert_eq!(coords(&t180.rotate_180()), coords(&t0));
}

#[test]
fn test_blocked_half_turn_is_a_no_op() {
    // Garbage under the stem blocks the only half-turn candidate.
    let mut board = Board::new();
    board.set(3, 4, Cell::Garbage);
    let t0 = ActivePiece::spawn(board, PieceKind::T);
    let turned = t0.rotate_180();
    assert_eq!(coords(&turned), coords(&t0));
}

#[test]
fn test_lock_preserves_piece_identity() {
    let board = ActivePiece::spawn(Board::new(), PieceKind::T).hard_drop().lock();
    assert_eq!(board.get(22, 4), Some(Cell::T));
    assert_eq!(board.get(21, 4), Some(Cell::T));
    assert_eq!(board.get(22, 3), Some(Cell::T));
    assert_eq!(board.get(22, 5), Some(Cell::T));
}
