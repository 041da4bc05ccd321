use super::*;

// ==================== SOLDIER TESTS ====================

#[test]
fn test_red_soldier_before_river_only_forward() {
    let mut board = empty_board();
    place_piece(&mut board, 6, 4, Type::Soldier, Color::Red);

    let moves = board.piece_moves(Position::new(6, 4));
    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, (6, 4), (5, 4)));
}

#[test]
fn test_red_soldier_after_river_moves_sideways() {
    let mut board = empty_board();
    place_piece(&mut board, 4, 4, Type::Soldier, Color::Red);

    let moves = board.piece_moves(Position::new(4, 4));
    assert_eq!(moves.len(), 3);
    assert!(has_move(&moves, (4, 4), (3, 4)));
    assert!(has_move(&moves, (4, 4), (4, 3)));
    assert!(has_move(&moves, (4, 4), (4, 5)));
    assert!(!has_move(&moves, (4, 4), (5, 4)), "soldiers never retreat");
}

#[test]
fn test_soldier_on_last_rank_only_sideways() {
    let mut board = empty_board();
    place_piece(&mut board, 0, 0, Type::Soldier, Color::Red);

    let moves = board.piece_moves(Position::new(0, 0));
    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, (0, 0), (0, 1)));
}

#[test]
fn test_black_soldier_moves_down() {
    let mut board = empty_board();
    place_piece(&mut board, 3, 4, Type::Soldier, Color::Black);
    place_piece(&mut board, 5, 2, Type::Soldier, Color::Black);

    let before = board.piece_moves(Position::new(3, 4));
    assert_eq!(before.len(), 1);
    assert!(has_move(&before, (3, 4), (4, 4)));

    let after = board.piece_moves(Position::new(5, 2));
    assert_eq!(after.len(), 3);
    assert!(has_move(&after, (5, 2), (6, 2)));
    assert!(has_move(&after, (5, 2), (5, 1)));
    assert!(has_move(&after, (5, 2), (5, 3)));
}

#[test]
fn test_soldier_blocked_by_own_piece() {
    let mut board = empty_board();
    place_piece(&mut board, 6, 4, Type::Soldier, Color::Red);
    place_piece(&mut board, 5, 4, Type::Horse, Color::Red);

    assert!(board.piece_moves(Position::new(6, 4)).is_empty());
}
