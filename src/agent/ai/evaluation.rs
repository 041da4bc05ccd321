// Position evaluation function
// Material plus piece-square tables, nothing else.

use crate::game_repr::{Board, Color, Type};
use super::piece_square_tables::get_pst_value;

// Material values
pub const GENERAL_VALUE: i32 = 10000;
pub const CHARIOT_VALUE: i32 = 500;
pub const CANNON_VALUE: i32 = 450;
pub const HORSE_VALUE: i32 = 300;
pub const ADVISOR_VALUE: i32 = 200;
pub const ELEPHANT_VALUE: i32 = 200;
pub const SOLDIER_VALUE: i32 = 100;

/// Get material value for a piece type
#[inline]
pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::General => GENERAL_VALUE,
        Type::Chariot => CHARIOT_VALUE,
        Type::Cannon => CANNON_VALUE,
        Type::Horse => HORSE_VALUE,
        Type::Advisor => ADVISOR_VALUE,
        Type::Elephant => ELEPHANT_VALUE,
        Type::Soldier => SOLDIER_VALUE,
    }
}

/// Absolute score of the board: positive favours RED, negative BLACK.
pub fn evaluate_board(board: &Board) -> i32 {
    board
        .pieces()
        .map(|piece| {
            let value = piece_value(piece.piece_type)
                + get_pst_value(piece.piece_type, piece.position, piece.color);
            match piece.color {
                Color::Red => value,
                Color::Black => -value,
            }
        })
        .sum()
}

/// Main evaluation function
/// Returns score from the perspective of `side_to_move`
/// Positive score = good for side to move
pub fn evaluate(board: &Board, side_to_move: Color) -> i32 {
    let score = evaluate_board(board);
    match side_to_move {
        Color::Red => score,
        Color::Black => -score,
    }
}
