//! Piece tests - shapes, movement, origin rotation and placement

use blockfall::core::{base_shape, Board, ScriptedKinds, SimpleRng, Tetromino, SPAWN_POSITION};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

// ============== Shape Tests ==============

#[test]
fn test_base_shapes() {
    assert_eq!(base_shape(PieceKind::Straight), [(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(base_shape(PieceKind::Square), [(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(base_shape(PieceKind::T), [(1, 0), (2, 0), (3, 0), (2, 1)]);
    assert_eq!(base_shape(PieceKind::L), [(0, 1), (0, 2), (0, 3), (1, 3)]);
    assert_eq!(base_shape(PieceKind::Skew), [(0, 1), (1, 1), (1, 0), (2, 0)]);
}

#[test]
fn test_every_base_shape_fits_at_spawn() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let piece = Tetromino::new(kind);
        assert_eq!(piece.position(), SPAWN_POSITION);
        assert!(piece.can_move(0, 0, &board), "{kind:?} should fit at spawn");
    }
}

#[test]
fn test_random_spawn_is_deterministic_per_seed() {
    let mut a = SimpleRng::new(99);
    let mut b = SimpleRng::new(99);
    for _ in 0..50 {
        assert_eq!(
            Tetromino::spawn(None, &mut a).kind(),
            Tetromino::spawn(None, &mut b).kind()
        );
    }
}

// ============== Movement Tests ==============

#[test]
fn test_can_move_respects_walls() {
    let board = Board::new();
    let mut piece = Tetromino::new(PieceKind::Square);

    // Square spans x = 5..=6; five steps left reaches the wall
    for _ in 0..5 {
        assert!(piece.can_move(-1, 0, &board));
        piece.move_by(-1, 0);
    }
    assert!(!piece.can_move(-1, 0, &board));
    assert_eq!(piece.position(), (0, 0));

    // Up out of the board is rejected as well
    assert!(!piece.can_move(0, -1, &board));
}

#[test]
fn test_can_move_respects_occupied_cells() {
    let mut board = Board::new();
    board.set(7, 0, Some(PieceKind::T));

    let piece = Tetromino::new(PieceKind::Square);
    assert!(!piece.can_move(1, 0, &board));
    assert!(piece.can_move(-1, 0, &board));
    assert!(piece.can_move(0, 1, &board));
}

#[test]
fn test_can_move_does_not_mutate() {
    let board = Board::new();
    let piece = Tetromino::new(PieceKind::T);
    let before = piece;
    let _ = piece.can_move(1, 1, &board);
    assert_eq!(piece, before);
}

#[test]
fn test_straight_falls_to_bottom_row() {
    let mut board = Board::new();
    let mut rng = ScriptedKinds::new([PieceKind::Straight]);
    let mut piece = Tetromino::spawn(Some(PieceKind::Straight), &mut rng);
    assert_eq!(piece.position(), (5, 0));
    assert!(piece.can_move(0, 1, &board));

    let mut steps = 0;
    while piece.can_move(0, 1, &board) {
        piece.move_by(0, 1);
        steps += 1;
    }
    assert_eq!(steps, BOARD_HEIGHT as i32 - 1);
    assert!(!piece.can_move(0, 1, &board));

    piece.place_on_board(&mut board);
    assert_eq!(board.filled_count(), 4);
    for x in 5..9 {
        assert_eq!(board.get(x, 19), Some(Some(PieceKind::Straight)));
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_rotation_is_about_local_origin() {
    let board = Board::new();
    let mut piece = Tetromino::new(PieceKind::T);
    for _ in 0..5 {
        piece.move_by(0, 1);
    }

    assert!(piece.rotate(&board));
    assert_eq!(piece.shape(), [(0, -1), (0, -2), (0, -3), (1, -2)]);
    assert_eq!(piece.position(), (5, 5), "rotation never moves the anchor");
}

#[test]
fn test_rotation_fails_at_wall_without_kick() {
    let board = Board::new();
    let mut piece = Tetromino::new(PieceKind::L);
    // Anchor at x = 10: the rotated L reaches x = 13, one past the right wall
    piece.move_by(5, 5);
    assert!(piece.can_move(0, 0, &board));

    let before = piece.shape();
    assert!(!piece.rotate(&board));
    assert_eq!(piece.shape(), before);
    assert_eq!(piece.position(), (10, 5));
}

#[test]
fn test_straight_cannot_rotate_at_spawn() {
    let board = Board::new();
    let mut piece = Tetromino::new(PieceKind::Straight);
    // (x, y) -> (y, -x) sends the bar above row 0
    assert!(!piece.rotate(&board));
    assert_eq!(piece.shape(), base_shape(PieceKind::Straight));
}

#[test]
fn test_rotation_fails_into_occupied_cell() {
    let mut board = Board::new();
    let mut piece = Tetromino::new(PieceKind::Straight);
    for _ in 0..5 {
        piece.move_by(0, 1);
    }
    // Rotated straight occupies (5, 2..=5)
    board.set(5, 3, Some(PieceKind::Square));

    let before = piece.shape();
    assert!(!piece.rotate(&board));
    assert_eq!(piece.shape(), before);
}

#[test]
fn test_square_rotation_changes_footprint() {
    let board = Board::new();
    let mut piece = Tetromino::new(PieceKind::Square);
    piece.move_by(0, 3);

    let before = piece.blocks();
    assert!(piece.rotate(&board));
    assert_ne!(piece.blocks(), before);
    assert_eq!(piece.blocks(), [(5, 3), (5, 2), (6, 3), (6, 2)]);
}

// ============== Placement Tests ==============

#[test]
fn test_place_on_board_writes_kind() {
    let mut board = Board::new();
    let mut piece = Tetromino::new(PieceKind::Skew);
    piece.move_by(0, BOARD_HEIGHT as i8 - 2);
    assert!(!piece.can_move(0, 1, &board));

    piece.place_on_board(&mut board);

    assert!(piece.is_placed());
    for (x, y) in piece.blocks() {
        assert_eq!(board.get(x, y), Some(Some(PieceKind::Skew)));
    }
    assert_eq!(board.filled_count(), 4);
    assert!(piece.blocks().iter().all(|&(x, _)| x < BOARD_WIDTH as i8));
}
