pub mod fen;
pub mod model;
pub use model::{Color, Coordinate, Move, Piece, PieceType};

mod board;
mod move_generation;
#[cfg(test)]
pub mod test_utils;
pub use board::Board;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convertion_method() {
        assert_eq!(Coordinate::from_algebraic("b2").unwrap(), Coordinate::new(6, 1));
        assert_eq!(Coordinate::from_algebraic("a8").unwrap(), Coordinate::new(0, 0));
        assert_eq!(Coordinate::new(7, 7).as_algebraic(), "h1");
        assert_eq!(Coordinate::from_algebraic("b2").unwrap().as_algebraic(), "b2");
        assert_eq!(Move::from_algebraic("e2e4").unwrap().as_algebraic(), "e2e4");
        assert_eq!(Move::from_algebraic("f2-f3").unwrap(), Move::from_algebraic("f2f3").unwrap());
    }

    #[test]
    fn test_invalid_notation() {
        assert!(Coordinate::from_algebraic("i1").is_err());
        assert!(Coordinate::from_algebraic("a9").is_err());
        assert!(Coordinate::from_algebraic("a").is_err());
        assert!(Move::from_algebraic("e2e").is_err());
        assert!("e2ée".parse::<Move>().is_err());
    }

    #[test]
    fn test_coordinate_validity() {
        assert!(Coordinate::new(0, 0).is_valid());
        assert!(Coordinate::new(7, 7).is_valid());
        assert!(!Coordinate::new(-1, 3).is_valid());
        assert!(!Coordinate::new(3, 8).is_valid());
        assert!(!Coordinate::new(0, 7).offset(0, 1).is_valid());
        assert_eq!(Coordinate::all().count(), 64);
    }

    #[test]
    fn test_piece_chars() {
        let at = Coordinate::new(0, 0);
        assert_eq!(Piece::new(Color::White, PieceType::Knight, at).to_char(), 'N');
        assert_eq!(Piece::new(Color::Black, PieceType::Queen, at).to_char(), 'q');
    }

    #[test]
    fn test_clone_with_state_keeps_move_flag() {
        let mut pawn = Piece::new(Color::Black, PieceType::Pawn, Coordinate::new(2, 3));
        pawn.has_moved = true;
        assert_eq!(pawn.clone_with_state(), pawn);
    }
}
