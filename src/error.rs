use thiserror::Error;

use crate::chess_board::{Color, Coordinate};

/// Why [`crate::game::Game::try_move`] refused a move. The game is left
/// untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    NoPiece(Coordinate),
    #[error("{found} piece on {from} cannot move while it is {expected}'s turn")]
    WrongTurn {
        from: Coordinate,
        expected: Color,
        found: Color,
    },
    #[error("{to} is not a legal destination from {from}")]
    IllegalDestination { from: Coordinate, to: Coordinate },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("invalid FEN string: empty input")]
    Empty,
    #[error("invalid FEN string: expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("invalid piece character in FEN string: {0}")]
    InvalidPiece(char),
    #[error("too many squares in row {0} when parsing FEN")]
    RowOverflow(usize),
    #[error("too few squares in row {0} when parsing FEN")]
    RowUnderflow(usize),
    #[error("invalid FEN string: invalid active color {0:?}")]
    ActiveColor(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid square: {0:?}")]
    Square(String),
    #[error("invalid move: {0:?}")]
    Move(String),
}
