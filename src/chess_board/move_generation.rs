use super::{Board, Coordinate, Piece, PieceType};

const KNIGHT_MOVES: [(i8, i8); 8] = [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];
const KING_MOVES: [(i8, i8); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Piece {
    /// Destinations allowed by this piece's movement pattern and the board's
    /// occupancy, ignoring whether the move exposes its own king.
    pub fn pseudo_legal_moves(&self, board: &Board) -> Vec<Coordinate> {
        match self.kind {
            PieceType::Pawn => board.generate_pawn_moves(self),
            PieceType::Knight => board.generate_moves_from_directions(self, &KNIGHT_MOVES),
            PieceType::Bishop => board.generate_sliding_moves(self, &BISHOP_DIRECTIONS),
            PieceType::Rook => board.generate_sliding_moves(self, &ROOK_DIRECTIONS),
            PieceType::Queen => board.generate_sliding_moves(self, &QUEEN_DIRECTIONS),
            PieceType::King => board.generate_moves_from_directions(self, &KING_MOVES),
        }
    }
}

impl Board {
    /// Pseudo-legal destinations of whatever stands on `at`; empty for an
    /// empty or off-board square.
    pub fn pseudo_legal_moves(&self, at: Coordinate) -> Vec<Coordinate> {
        match self.get(at) {
            Some(piece) => piece.pseudo_legal_moves(self),
            None => Vec::new(),
        }
    }

    fn generate_pawn_moves(&self, pawn: &Piece) -> Vec<Coordinate> {
        let mut moves = Vec::with_capacity(4);
        let forward = pawn.color.forward();

        // Regular forward move
        let one_forward = pawn.position.offset(forward, 0);
        if one_forward.is_valid() && self.is_empty(one_forward) {
            moves.push(one_forward);

            // Double move until the pawn has moved once
            if !pawn.has_moved {
                let two_forward = pawn.position.offset(2 * forward, 0);
                if two_forward.is_valid() && self.is_empty(two_forward) {
                    moves.push(two_forward);
                }
            }
        }

        // Capture diagonally
        for dx in [-1, 1] {
            let target = pawn.position.offset(forward, dx);
            if let Some(occupant) = self.get(target) {
                if occupant.is_opponent_of(pawn) {
                    moves.push(target);
                }
            }
        }

        moves
    }

    /// Rays stop at the edge, before an own piece, or on an opponent piece.
    fn generate_sliding_moves(&self, piece: &Piece, directions: &[(i8, i8)]) -> Vec<Coordinate> {
        let mut moves = Vec::new();

        for &(dx, dy) in directions {
            let mut target = piece.position;
            loop {
                target = target.offset(dx, dy);
                if !target.is_valid() {
                    break;
                }
                match self.get(target) {
                    None => moves.push(target),
                    Some(occupant) => {
                        if occupant.is_opponent_of(piece) {
                            moves.push(target);
                        }
                        break; // Block sliding
                    }
                }
            }
        }

        moves
    }

    fn generate_moves_from_directions(&self, piece: &Piece, offsets: &[(i8, i8)]) -> Vec<Coordinate> {
        offsets
            .iter()
            .map(|&(dx, dy)| piece.position.offset(dx, dy))
            .filter(|target| target.is_valid())
            .filter(|&target| self.get(target).map_or(true, |occupant| occupant.is_opponent_of(piece)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::assert_moves;
    use super::super::{Color, PieceType};
    use super::*;

    fn sq(s: &str) -> Coordinate {
        Coordinate::from_algebraic(s).unwrap()
    }

    fn board_with(pieces: &[(Color, PieceType, &str)]) -> Board {
        let mut board = Board::new();
        for &(color, kind, at) in pieces {
            board.place(Piece::new(color, kind, sq(at)));
        }
        board
    }

    #[test]
    fn test_pawn_moves_from_start() {
        let board = Board::standard();
        assert_moves(board.pseudo_legal_moves(sq("e2")), vec!["e3", "e4"]);
        assert_moves(board.pseudo_legal_moves(sq("d7")), vec!["d6", "d5"]);
    }

    #[test]
    fn test_pawn_double_step_needs_unmoved_pawn_and_clear_path() {
        let mut board = Board::standard();
        board.move_piece(sq("e2"), sq("e3"));
        assert_moves(board.pseudo_legal_moves(sq("e3")), vec!["e4"]);

        let board = board_with(&[(Color::White, PieceType::Pawn, "c2"), (Color::Black, PieceType::Knight, "c4")]);
        assert_moves(board.pseudo_legal_moves(sq("c2")), vec!["c3"]);

        let board = board_with(&[(Color::White, PieceType::Pawn, "c2"), (Color::Black, PieceType::Knight, "c3")]);
        assert_moves(board.pseudo_legal_moves(sq("c2")), vec![]);
    }

    #[test]
    fn test_pawn_captures_only_opponents() {
        let mut board = board_with(&[(Color::Black, PieceType::Rook, "c5"), (Color::White, PieceType::Rook, "e5")]);
        let mut pawn = Piece::new(Color::White, PieceType::Pawn, sq("d4"));
        pawn.has_moved = true;
        board.place(pawn);
        assert_moves(board.pseudo_legal_moves(sq("d4")), vec!["d5", "c5"]);
    }

    #[test]
    fn test_black_pawn_moves_down_the_board() {
        let board = board_with(&[(Color::Black, PieceType::Pawn, "a7"), (Color::White, PieceType::Bishop, "b6")]);
        assert_moves(board.pseudo_legal_moves(sq("a7")), vec!["a6", "a5", "b6"]);
    }

    #[test]
    fn test_pawn_on_last_rank_has_no_moves() {
        let board = board_with(&[(Color::White, PieceType::Pawn, "h8")]);
        assert_moves(board.pseudo_legal_moves(sq("h8")), vec![]);
    }

    #[test]
    fn test_knight_moves() {
        let board = Board::standard();
        assert_moves(board.pseudo_legal_moves(sq("g1")), vec!["f3", "h3"]);

        let board = board_with(&[
            (Color::White, PieceType::Knight, "d4"),
            (Color::White, PieceType::Pawn, "e6"),
            (Color::Black, PieceType::Pawn, "c6"),
        ]);
        assert_moves(
            board.pseudo_legal_moves(sq("d4")),
            vec!["c6", "b5", "b3", "c2", "e2", "f3", "f5"],
        );
    }

    #[test]
    fn test_sliding_moves() {
        let board = board_with(&[
            (Color::White, PieceType::Rook, "a1"),
            (Color::White, PieceType::Pawn, "a3"),
            (Color::Black, PieceType::Knight, "c1"),
        ]);
        assert_moves(board.pseudo_legal_moves(sq("a1")), vec!["a2", "b1", "c1"]);

        let board = board_with(&[(Color::Black, PieceType::Bishop, "c8"), (Color::White, PieceType::Queen, "e6")]);
        assert_moves(board.pseudo_legal_moves(sq("c8")), vec!["b7", "a6", "d7", "e6"]);

        let board = board_with(&[(Color::White, PieceType::Queen, "h1")]);
        assert_eq!(board.pseudo_legal_moves(sq("h1")).len(), 21);
    }

    #[test]
    fn test_pieces_blocked_at_start() {
        let board = Board::standard();
        for at in ["a1", "c1", "d1", "e1", "f1", "h1", "a8", "d8", "e8"] {
            assert_moves(board.pseudo_legal_moves(sq(at)), vec![]);
        }
    }

    #[test]
    fn test_king_moves() {
        let board = board_with(&[
            (Color::White, PieceType::King, "e1"),
            (Color::White, PieceType::Pawn, "e2"),
            (Color::Black, PieceType::Pawn, "d2"),
        ]);
        assert_moves(board.pseudo_legal_moves(sq("e1")), vec!["d1", "f1", "d2", "f2"]);
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let board = Board::standard();
        assert!(board.pseudo_legal_moves(sq("e4")).is_empty());
        assert!(board.pseudo_legal_moves(Coordinate::new(9, 9)).is_empty());
    }

    #[test]
    fn test_generation_order() {
        let board = board_with(&[
            (Color::Black, PieceType::Pawn, "b7"),
            (Color::White, PieceType::Knight, "a6"),
            (Color::White, PieceType::Knight, "c6"),
        ]);
        assert_eq!(board.pseudo_legal_moves(sq("b7")), vec![sq("b6"), sq("b5"), sq("a6"), sq("c6")]);
    }
}
