use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board
pub fn empty_board() -> Board {
    Board::empty()
}

/// Helper function to place a piece
pub fn place_piece(board: &mut Board, row: u8, col: u8, piece_type: Type, color: Color) -> Piece {
    board
        .place(piece_type, color, Position::new(row, col))
        .expect("test placement should be valid")
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: (u8, u8), to: (u8, u8)) -> bool {
    moves
        .iter()
        .any(|m| m.from == Position::new(from.0, from.1) && m.to == Position::new(to.0, to.1))
}

/// Both generals tucked into corners of their palaces, out of the way
pub fn board_with_generals() -> Board {
    let mut board = empty_board();
    place_piece(&mut board, 9, 3, Type::General, Color::Red);
    place_piece(&mut board, 0, 5, Type::General, Color::Black);
    board
}

// ==================== TEST MODULES ====================

mod soldier_movement;
mod board_encoding;
