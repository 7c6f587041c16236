use std::fmt;

use crate::chess_board::fen;
use crate::chess_board::{Board, Color, Coordinate, Move, Piece, PieceType};
use crate::error::{FenError, MoveError};

pub mod perft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Active,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate are only left through [`Game::reset`].
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Active => write!(f, "active"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Turn and status bookkeeping on top of a [`Board`].
///
/// The board only changes through [`Game::make_move`] and [`Game::reset`].
/// A rejected move leaves the whole game untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Color,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

pub fn new_game() -> Game {
    Game::new()
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            current_player: Color::White,
            status: GameStatus::Active,
        }
    }

    /// A game continuing from a constructed position. The status is computed
    /// right away, so the position may already be terminal.
    pub fn from_position(board: Board, current_player: Color) -> Self {
        let mut game = Self {
            board,
            current_player,
            status: GameStatus::Active,
        };
        game.update_game_state();
        game
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let (board, current_player) = fen::from_fen(fen)?;
        Ok(Self::from_position(board, current_player))
    }

    pub fn to_fen(&self) -> String {
        fen::to_fen(&self.board, self.current_player)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Destinations of the piece on `from` that do not leave its own king
    /// attacked, in generation order. Works for either color, regardless of
    /// whose turn it is.
    pub fn legal_moves(&self, from: Coordinate) -> Vec<Coordinate> {
        let piece = match self.board.get(from) {
            Some(p) => p,
            None => return Vec::new(),
        };

        self.board
            .pseudo_legal_moves(from)
            .into_iter()
            .filter(|&to| self.is_move_legal(&piece, to))
            .collect()
    }

    /// Every legal move of the side to move, roster order first.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        self.board
            .roster(self.current_player)
            .iter()
            .flat_map(|&from| self.legal_moves(from).into_iter().map(move |to| Move::new(from, to)))
            .collect()
    }

    /// Plays `from -> to` for the side to move, reporting why a move was refused.
    pub fn try_move(&mut self, from: Coordinate, to: Coordinate) -> Result<(), MoveError> {
        let piece = self.board.get(from).ok_or(MoveError::NoPiece(from))?;
        if piece.color != self.current_player {
            return Err(MoveError::WrongTurn {
                from,
                expected: self.current_player,
                found: piece.color,
            });
        }
        if !self.legal_moves(from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        self.board.move_piece(from, to);

        // Promotion is always to a queen
        if piece.kind == PieceType::Pawn && to.row == piece.color.promotion_row() {
            self.board.set(to, Some(Piece::new(piece.color, PieceType::Queen, to)));
        }

        self.current_player = self.current_player.opposite();
        self.update_game_state();
        Ok(())
    }

    /// Boolean form of [`Game::try_move`].
    pub fn make_move(&mut self, from: Coordinate, to: Coordinate) -> bool {
        self.try_move(from, to).is_ok()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        match self.board.king_of(color) {
            Some(king) => self.board.is_attacked(king.position, color.opposite()),
            None => false,
        }
    }

    /// Simulates the move on a copy and checks the mover's king afterwards.
    fn is_move_legal(&self, piece: &Piece, to: Coordinate) -> bool {
        let mut test_board = self.board.deep_copy();
        test_board.move_piece(piece.position, to);

        match test_board.king_of(piece.color) {
            Some(king) => !test_board.is_attacked(king.position, piece.color.opposite()),
            None => true,
        }
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .roster(color)
            .iter()
            .any(|&from| !self.legal_moves(from).is_empty())
    }

    fn update_game_state(&mut self) {
        let in_check = self.is_in_check(self.current_player);
        let has_move = self.has_legal_move(self.current_player);

        self.status = match (in_check, has_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Active,
        };
    }
}
