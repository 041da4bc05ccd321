// Tests for MVV move ordering

use crate::agent::ai::move_ordering::{
    generate_ordered_captures, generate_ordered_moves, promote_move, score_move, sort_moves,
};
use crate::game_repr::{Board, Color, Move, Position, Type};

fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
    Move::new(Position::new(from.0, from.1), Position::new(to.0, to.1))
}

#[test]
fn test_ordering_preserves_count() {
    let board = Board::initial();
    let ordered = generate_ordered_moves(&board, Color::Red);
    assert_eq!(ordered.len(), board.generate_moves(Color::Red).len());
}

#[test]
fn test_captures_prioritized() {
    let board = Board::initial();
    let ordered = generate_ordered_moves(&board, Color::Red);

    // Only captures in the opening are the two cannon-takes-horse moves
    let first_two: Vec<Move> = ordered[..2].to_vec();
    assert!(first_two.contains(&mv((7, 1), (0, 1))));
    assert!(first_two.contains(&mv((7, 7), (0, 7))));
    assert_eq!(score_move(&board, ordered[0]), 3000);
    assert_eq!(score_move(&board, ordered[2]), 0);
}

#[test]
fn test_most_valuable_victim_first() {
    let mut board = Board::empty();
    board.place(Type::Chariot, Color::Red, Position::new(5, 4)).unwrap();
    board.place(Type::Soldier, Color::Black, Position::new(5, 2)).unwrap();
    board.place(Type::Cannon, Color::Black, Position::new(2, 4)).unwrap();
    board.place(Type::Chariot, Color::Black, Position::new(5, 7)).unwrap();

    let captures = generate_ordered_captures(&board, Color::Red);
    assert_eq!(
        captures.as_slice(),
        &[mv((5, 4), (5, 7)), mv((5, 4), (2, 4)), mv((5, 4), (5, 2))]
    );
}

#[test]
fn test_quiet_moves_keep_generation_order() {
    let board = Board::initial();
    let generated = board.generate_moves(Color::Black);
    let mut sorted = generated.clone();
    sort_moves(&board, &mut sorted);

    let quiet_generated: Vec<Move> = generated.iter().copied().filter(|m| board.is_empty(m.to)).collect();
    let quiet_sorted: Vec<Move> = sorted.iter().copied().filter(|m| board.is_empty(m.to)).collect();
    assert_eq!(quiet_generated, quiet_sorted);
}

#[test]
fn test_captures_only() {
    let board = Board::initial();
    let captures = generate_ordered_captures(&board, Color::Black);
    assert_eq!(captures.len(), 2);
    assert!(captures.iter().all(|m| board.get(m.to).is_some()));
}

#[test]
fn test_promote_move_to_front() {
    let mut moves = vec![mv((0, 0), (1, 0)), mv((0, 1), (2, 2)), mv((3, 0), (4, 0))];
    promote_move(&mut moves, Some(mv((3, 0), (4, 0))));
    assert_eq!(moves[0], mv((3, 0), (4, 0)));
    assert_eq!(moves[1], mv((0, 0), (1, 0)));
    assert_eq!(moves[2], mv((0, 1), (2, 2)));

    // Unknown moves leave the order alone
    let before = moves.clone();
    promote_move(&mut moves, Some(mv((9, 9), (8, 8))));
    assert_eq!(moves, before);
}
