use super::*;

// ==================== BOARD SETUP & TEXT ENCODING TESTS ====================

#[test]
fn test_initial_layout() {
    let board = Board::initial();
    assert_eq!(board.pieces().count(), 32);
    assert_eq!(board.pieces_of(Color::Red).count(), 16);
    assert_eq!(board.find_general(Color::Red), Some(Position::new(9, 4)));
    assert_eq!(board.find_general(Color::Black), Some(Position::new(0, 4)));

    let mut ids: Vec<u8> = board.pieces().map(|p| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..32).collect::<Vec<u8>>());

    assert!(board.pieces_of(Color::Red).all(|p| p.id < 16));
    assert_eq!(board.get(Position::new(9, 0)).map(|p| p.id), Some(0));
}

#[test]
fn test_initial_fen() {
    let board = Board::initial();
    assert_eq!(
        board.to_fen(Color::Red),
        "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1"
    );
    assert!(board.to_fen(Color::Black).ends_with(" b - - 0 1"));
}

#[test]
fn test_empty_board_fen() {
    assert_eq!(empty_board().to_fen(Color::Black), "9/9/9/9/9/9/9/9/9/9 b - - 0 1");
}

#[test]
fn test_place_rejects_bad_cells() {
    let mut board = empty_board();
    place_piece(&mut board, 4, 4, Type::Horse, Color::Red);

    assert_eq!(
        board.place(Type::Horse, Color::Black, Position::new(4, 4)),
        Err(BoardError::Occupied(Position::new(4, 4)))
    );
    assert_eq!(
        board.place(Type::Horse, Color::Black, Position::new(10, 0)),
        Err(BoardError::OutOfBounds { row: 10, col: 0 })
    );
    assert_eq!(board.remove(Position::new(3, 3)), Err(BoardError::Empty(Position::new(3, 3))));
}

#[test]
fn test_place_assigns_fresh_ids() {
    let mut board = empty_board();
    let a = place_piece(&mut board, 9, 4, Type::General, Color::Red);
    let b = place_piece(&mut board, 0, 4, Type::General, Color::Black);
    assert_ne!(a.id, b.id);

    let removed = board.remove(Position::new(9, 4)).expect("general was placed");
    assert_eq!(removed, a);
    assert!(board.find_general(Color::Red).is_none());
}

#[test]
fn test_place_reuses_ids_of_removed_pieces() {
    let mut board = board_with_generals();
    let first = place_piece(&mut board, 5, 0, Type::Soldier, Color::Red);

    // Alternate between two cells far more often than an id can count
    let (mut here, mut there) = (Position::new(5, 0), Position::new(5, 1));
    for _ in 0..300 {
        let placed = board
            .place(Type::Soldier, Color::Red, there)
            .expect("cell was just vacated");
        board.remove(here).expect("soldier sits here");
        // Generals hold 0 and 1, the two soldiers swap 2 and 3
        assert!(placed.id == first.id || placed.id == first.id + 1, "id {}", placed.id);
        std::mem::swap(&mut here, &mut there);
    }
    assert_eq!(board.pieces().count(), 3);
}

#[test]
fn test_move_notation() {
    let mv = Move::new(Position::new(7, 7), Position::new(7, 4));
    assert_eq!(mv.to_string(), "h2e2");
}
