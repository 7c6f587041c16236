use super::{Board, Color, Coordinate, Piece, PieceType};
use crate::error::FenError;

pub const INITIAL_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

fn parse_piece(c: char) -> Option<(Color, PieceType)> {
    let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
    let kind = match c.to_ascii_lowercase() {
        'p' => PieceType::Pawn,
        'n' => PieceType::Knight,
        'b' => PieceType::Bishop,
        'r' => PieceType::Rook,
        'q' => PieceType::Queen,
        'k' => PieceType::King,
        _ => return None,
    };
    Some((color, kind))
}

/// Parses the placement and active color fields of a FEN string.
///
/// Castling, en passant and clock fields are accepted but ignored. The active
/// color defaults to White when absent. Pawns off their home row count as
/// moved so they lose the double step.
pub fn from_fen(fen: &str) -> Result<(Board, Color), FenError> {
    let mut parts = fen.split_whitespace();
    let placement = parts.next().ok_or(FenError::Empty)?;

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::RowCount(rows.len()));
    }

    let mut board = Board::new();
    for (row_index, row) in rows.iter().enumerate() {
        let mut col_index = 0usize;

        for c in row.chars() {
            if col_index > 7 {
                return Err(FenError::RowOverflow(row_index));
            }
            if let Some(empty) = c.to_digit(10) {
                if !(1..=8).contains(&empty) {
                    return Err(FenError::InvalidPiece(c));
                }
                col_index += empty as usize;
                continue;
            }
            let (color, kind) = parse_piece(c).ok_or(FenError::InvalidPiece(c))?;
            let at = Coordinate::new(row_index as i8, col_index as i8);
            let mut piece = Piece::new(color, kind, at);
            piece.has_moved = kind == PieceType::Pawn && at.row != color.home_row();
            board.place(piece);
            col_index += 1;
        }
        if col_index > 8 {
            return Err(FenError::RowOverflow(row_index));
        }
        if col_index < 8 {
            return Err(FenError::RowUnderflow(row_index));
        }
    }

    let active_color = match parts.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(FenError::ActiveColor(other.to_string())),
    };

    Ok((board, active_color))
}

pub fn to_fen(board: &Board, active_color: Color) -> String {
    let mut board_representation = String::new();

    for row in 0..8 {
        let mut empty_count = 0;

        for col in 0..8 {
            match board.get(Coordinate::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        board_representation.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    board_representation.push(piece.to_char());
                }
                None => {
                    empty_count += 1;
                }
            }
        }

        if empty_count > 0 {
            board_representation.push_str(&empty_count.to_string());
        }

        if row < 7 {
            board_representation.push('/');
        }
    }

    let active_color = if active_color == Color::White { "w" } else { "b" };

    // Castling and en passant never exist, the clocks are not tracked.
    format!("{} {} - - 0 1", board_representation, active_color)
}
