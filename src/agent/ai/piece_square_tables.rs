// Piece-square tables for positional evaluation
// Tables are from RED's perspective: row 0 is BLACK's back rank (top),
// row 9 is RED's home rank. For BLACK pieces, read row 9 - row.

use crate::game_repr::{Color, Position, Type, COLS, ROWS};

type Table = [[i32; COLS]; ROWS];

// Soldier - worthless at home, grows after crossing the river
pub const SOLDIER_TABLE: Table = [
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],  // enemy back rank
    [30, 40, 55, 60, 60, 60, 55, 40, 30],
    [20, 30, 45, 50, 50, 50, 45, 30, 20],
    [10, 20, 30, 35, 35, 35, 30, 20, 10],
    [10, 20, 25, 30, 30, 30, 25, 20, 10],  // just crossed
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0],
];

// Chariot - open lines and enemy territory
pub const CHARIOT_TABLE: Table = [
    [10, 15, 10, 10, 10, 10, 10, 15, 10],
    [10, 15, 15, 15, 15, 15, 15, 15, 10],
    [10, 15, 20, 20, 20, 20, 20, 15, 10],
    [10, 15, 20, 20, 20, 20, 20, 15, 10],
    [ 5, 10, 15, 15, 15, 15, 15, 10,  5],
    [ 5, 12, 12, 12, 12, 12, 12, 12,  5],  // river bank
    [ 0,  5,  5,  5,  5,  5,  5,  5,  0],
    [ 0,  5,  5,  5,  5,  5,  5,  5,  0],
    [ 0,  5, 10, 10, 10, 10, 10,  5,  0],
    [-5,  5,  5,  5,  5,  5,  5,  5, -5],
];

// Horse - center good, edges and home rank bad
pub const HORSE_TABLE: Table = [
    [  0,   5,  10,  10,  10,  10,  10,   5,   0],
    [  0,   5,  20,  25,  25,  25,  20,   5,   0],
    [  5,  10,  25,  30,  30,  30,  25,  10,   5],
    [  5,  10,  20,  25,  25,  25,  20,  10,   5],
    [  5,  10,  15,  20,  20,  20,  15,  10,   5],
    [  5,   8,  12,  15,  15,  15,  12,   8,   5],
    [  0,   5,   5,  10,  10,  10,   5,   5,   0],
    [  0,  -5,   0,   5,   5,   5,   0,  -5,   0],
    [ -5, -10,  -5,   0,   0,   0,  -5, -10,  -5],
    [-10, -15, -10,  -5,  -5,  -5, -10, -15, -10],
];

// Cannon - central files and the far side of the river
pub const CANNON_TABLE: Table = [
    [0,  5, 10, 10, 10, 10, 10,  5, 0],
    [0,  5, 10, 10, 10, 10, 10,  5, 0],
    [5, 10, 15, 20, 20, 20, 15, 10, 5],
    [5, 10, 15, 20, 20, 20, 15, 10, 5],
    [5, 10, 15, 20, 20, 20, 15, 10, 5],
    [0,  5,  5,  5,  5,  5,  5,  5, 0],
    [0,  0,  0,  0,  0,  0,  0,  0, 0],
    [0,  5,  0,  5, 10,  5,  0,  5, 0],  // starting rank
    [0,  0,  0,  0,  0,  0,  0,  0, 0],
    [0,  0,  0,  0,  0,  0,  0,  0, 0],
];

// Advisor - stays around the general
pub const ADVISOR_TABLE: Table = [
    [0, 0, 0, 0,  0, 0, 0, 0, 0],
    [0, 0, 0, 0,  0, 0, 0, 0, 0],
    [0, 0, 0, 0,  0, 0, 0, 0, 0],
    [0, 0, 0, 0,  0, 0, 0, 0, 0],
    [0, 0, 0, 0,  0, 0, 0, 0, 0],
    [0, 0, 0, 0,  0, 0, 0, 0, 0],
    [0, 0, 0, 0,  0, 0, 0, 0, 0],
    [0, 0, 0, 5,  0, 5, 0, 0, 0],
    [0, 0, 0, 0, 10, 0, 0, 0, 0],  // palace center
    [0, 0, 0, 5,  0, 5, 0, 0, 0],
];

// Elephant - defensive, stays home
pub const ELEPHANT_TABLE: Table = [
    [0, 0, 0, 0,  0, 0, 0, 0, 0],
    [0, 0, 0, 0,  0, 0, 0, 0, 0],
    [0, 0, 0, 0,  0, 0, 0, 0, 0],
    [0, 0, 0, 0,  0, 0, 0, 0, 0],
    [0, 0, 0, 0,  0, 0, 0, 0, 0],
    [0, 0, 5, 0,  0, 0, 5, 0, 0],
    [0, 0, 0, 0,  0, 0, 0, 0, 0],
    [0, 0, 0, 0, 10, 0, 0, 0, 0],
    [0, 0, 0, 0,  0, 0, 0, 0, 0],
    [0, 0, 5, 0,  0, 0, 5, 0, 0],
];

// General - safest at the bottom of the palace
pub const GENERAL_TABLE: Table = [
    [0, 0, 0,  0,  0,  0, 0, 0, 0],
    [0, 0, 0,  0,  0,  0, 0, 0, 0],
    [0, 0, 0,  0,  0,  0, 0, 0, 0],
    [0, 0, 0,  0,  0,  0, 0, 0, 0],
    [0, 0, 0,  0,  0,  0, 0, 0, 0],
    [0, 0, 0,  0,  0,  0, 0, 0, 0],
    [0, 0, 0,  0,  0,  0, 0, 0, 0],
    [0, 0, 0, -5, -5, -5, 0, 0, 0],
    [0, 0, 0,  0,  5,  0, 0, 0, 0],
    [0, 0, 0,  5, 10,  5, 0, 0, 0],
];

/// Get piece-square table value for a piece of `color` on `position`
/// For BLACK pieces, the table is flipped vertically
pub fn get_pst_value(piece_type: Type, position: Position, color: Color) -> i32 {
    let row = match color {
        Color::Red => position.row as usize,
        Color::Black => ROWS - 1 - position.row as usize,
    };
    let col = position.col as usize;

    let table = match piece_type {
        Type::General => &GENERAL_TABLE,
        Type::Advisor => &ADVISOR_TABLE,
        Type::Elephant => &ELEPHANT_TABLE,
        Type::Horse => &HORSE_TABLE,
        Type::Chariot => &CHARIOT_TABLE,
        Type::Cannon => &CANNON_TABLE,
        Type::Soldier => &SOLDIER_TABLE,
    };
    table[row][col]
}
