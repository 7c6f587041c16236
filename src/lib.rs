pub mod chess_board;
pub mod engines;
pub mod error;
pub mod game;

pub use chess_board::{Board, Color, Coordinate, Move, Piece, PieceType};
pub use error::{FenError, MoveError, NotationError};
pub use game::{new_game, Game, GameStatus};
