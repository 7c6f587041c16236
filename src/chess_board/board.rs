use lazy_static::lazy_static;

use super::model::BOARD_SIZE;
use super::{Color, Coordinate, Piece, PieceType};

lazy_static! {
    static ref STANDARD_BOARD: Board = Board::build_standard();
}

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The 8x8 grid together with the per-color rosters derived from it.
///
/// The grid is the source of truth. Each roster lists the squares occupied by
/// that color in placement order and every mutation keeps it in step with the
/// grid: a square is in a roster iff the grid holds a piece of that color
/// there. The king index is the first king found in roster order.
#[derive(Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    white_pieces_positions: Vec<Coordinate>,
    black_pieces_positions: Vec<Coordinate>,
    white_king: Option<Coordinate>,
    black_king: Option<Coordinate>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Board {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}

impl Board {
    /// Creates an empty chess board
    pub fn new() -> Self {
        Self {
            squares: [[None; 8]; 8],
            white_pieces_positions: Vec::with_capacity(16),
            black_pieces_positions: Vec::with_capacity(16),
            white_king: None,
            black_king: None,
        }
    }

    /// The standard starting layout.
    pub fn standard() -> Self {
        STANDARD_BOARD.deep_copy()
    }

    fn build_standard() -> Self {
        let mut board = Board::new();
        for col in 0..BOARD_SIZE {
            board.place(Piece::new(Color::White, PieceType::Pawn, Coordinate::new(6, col)));
            board.place(Piece::new(Color::Black, PieceType::Pawn, Coordinate::new(1, col)));
        }
        // Back rank goes in by kind: rooks, knights, bishops, queens, kings.
        for kind in [PieceType::Rook, PieceType::Knight, PieceType::Bishop, PieceType::Queen, PieceType::King] {
            for (col, _) in BACK_RANK.iter().enumerate().filter(|(_, k)| **k == kind) {
                board.place(Piece::new(Color::White, kind, Coordinate::new(7, col as i8)));
            }
            for (col, _) in BACK_RANK.iter().enumerate().filter(|(_, k)| **k == kind) {
                board.place(Piece::new(Color::Black, kind, Coordinate::new(0, col as i8)));
            }
        }
        board
    }

    /// Inserts a piece at its own position.
    pub fn place(&mut self, piece: Piece) {
        self.set(piece.position, Some(piece));
    }

    /// Returns the occupant of `at`, or `None` for an empty or off-board square.
    pub fn get(&self, at: Coordinate) -> Option<Piece> {
        if !at.is_valid() {
            return None;
        }
        self.squares[at.row as usize][at.col as usize]
    }

    pub fn is_empty(&self, at: Coordinate) -> bool {
        self.get(at).is_none()
    }

    /// Writes `piece` into `at` and returns the previous occupant.
    ///
    /// A displaced piece leaves its roster, a new piece is appended to its
    /// roster and its `position` is rewritten to `at`. Off-board writes are
    /// ignored.
    pub fn set(&mut self, at: Coordinate, piece: Option<Piece>) -> Option<Piece> {
        if !at.is_valid() {
            return None;
        }
        let previous = self.squares[at.row as usize][at.col as usize].take();
        if let Some(old) = previous {
            self.roster_mut(old.color).retain(|f| *f != at);
            if self.king_index(old.color) == Some(at) {
                self.reindex_king(old.color);
            }
        }
        if let Some(mut new) = piece {
            new.position = at;
            self.squares[at.row as usize][at.col as usize] = Some(new);
            self.roster_mut(new.color).push(at);
            if new.kind == PieceType::King && self.king_index(new.color).is_none() {
                *self.king_index_mut(new.color) = Some(at);
            }
        }
        previous
    }

    /// Relocates the piece on `from` to `to` without any legality check.
    ///
    /// A piece on `to` is captured and leaves its roster. The mover keeps its
    /// roster slot and is marked as moved. Returns `false` and changes
    /// nothing if `from` is empty, either square is off-board or the squares
    /// coincide.
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) -> bool {
        if !from.is_valid() || !to.is_valid() || from == to {
            return false;
        }
        let mut piece = match self.squares[from.row as usize][from.col as usize].take() {
            Some(p) => p,
            None => return false,
        };

        if let Some(captured) = self.squares[to.row as usize][to.col as usize].take() {
            self.roster_mut(captured.color).retain(|f| *f != to);
            if self.king_index(captured.color) == Some(to) {
                self.reindex_king(captured.color);
            }
        }

        piece.position = to;
        piece.has_moved = true;
        self.roster_mut(piece.color)
            .iter_mut()
            .filter(|f| **f == from)
            .for_each(|f| *f = to);
        if self.king_index(piece.color) == Some(from) {
            *self.king_index_mut(piece.color) = Some(to);
        }
        self.squares[to.row as usize][to.col as usize] = Some(piece);
        true
    }

    /// Snapshot of the live pieces of `color` in roster order.
    pub fn pieces_of(&self, color: Color) -> Vec<Piece> {
        self.roster(color).iter().filter_map(|&at| self.get(at)).collect()
    }

    /// Squares occupied by `color` in roster order.
    pub fn roster(&self, color: Color) -> &[Coordinate] {
        match color {
            Color::White => &self.white_pieces_positions,
            Color::Black => &self.black_pieces_positions,
        }
    }

    pub fn king_of(&self, color: Color) -> Option<Piece> {
        self.king_index(color).and_then(|at| self.get(at))
    }

    /// Builds an independent board: a fresh grid of cloned pieces, fresh
    /// rosters in the same order and king indices found again by scanning.
    pub fn deep_copy(&self) -> Board {
        let mut copy = Board::new();
        for color in [Color::White, Color::Black] {
            for &at in self.roster(color) {
                if let Some(piece) = self.get(at) {
                    copy.squares[at.row as usize][at.col as usize] = Some(piece.clone_with_state());
                    copy.roster_mut(color).push(at);
                }
            }
            copy.reindex_king(color);
        }
        copy
    }

    /// True iff some piece of `by_color` has `at` among its pseudo-legal destinations.
    pub fn is_attacked(&self, at: Coordinate, by_color: Color) -> bool {
        self.roster(by_color)
            .iter()
            .any(|&from| self.pseudo_legal_moves(from).contains(&at))
    }

    fn roster_mut(&mut self, color: Color) -> &mut Vec<Coordinate> {
        match color {
            Color::White => &mut self.white_pieces_positions,
            Color::Black => &mut self.black_pieces_positions,
        }
    }

    fn king_index(&self, color: Color) -> Option<Coordinate> {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    fn king_index_mut(&mut self, color: Color) -> &mut Option<Coordinate> {
        match color {
            Color::White => &mut self.white_king,
            Color::Black => &mut self.black_king,
        }
    }

    fn reindex_king(&mut self, color: Color) {
        let king = self
            .roster(color)
            .iter()
            .copied()
            .find(|&at| matches!(self.get(at), Some(p) if p.kind == PieceType::King));
        *self.king_index_mut(color) = king;
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in 0..BOARD_SIZE {
            let rank = BOARD_SIZE - row;
            board_representation.push_str(&format!("{} │", rank));
            for col in 0..BOARD_SIZE {
                let square = self.get(Coordinate::new(row, col)).map_or(' ', |p| p.to_char());
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", rank));

            if row < BOARD_SIZE - 1 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}
