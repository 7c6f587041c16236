use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;

pub const BOARD_SIZE: i8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn promotion_row(&self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    pub fn home_row(&self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "P"),
            PieceType::Knight => write!(f, "N"),
            PieceType::Bishop => write!(f, "B"),
            PieceType::Rook => write!(f, "R"),
            PieceType::Queen => write!(f, "Q"),
            PieceType::King => write!(f, "K"),
        }
    }
}

/// A square on the board. Row 0 is rank 8, column 0 is file a.
///
/// Components are signed so that stepping off an edge produces a value that
/// fails [`Coordinate::is_valid`] instead of wrapping around.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct Coordinate {
    pub row: i8,
    pub col: i8,
}

impl Coordinate {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_valid(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    pub fn offset(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// All 64 squares, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate::new(row, col)))
    }

    pub fn from_algebraic(algebraic: &str) -> Result<Self, NotationError> {
        let bytes = algebraic.as_bytes();
        if bytes.len() != 2 {
            return Err(NotationError::Square(algebraic.to_string()));
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(NotationError::Square(algebraic.to_string()));
        }
        let col = (file - b'a') as i8;
        let row = BOARD_SIZE - (rank - b'0') as i8;
        Ok(Self { row, col })
    }

    pub fn as_algebraic(&self) -> String {
        to_algebraic_square(self.row, self.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.as_algebraic())
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Coordinate {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
    pub position: Coordinate,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceType, position: Coordinate) -> Self {
        Self {
            color,
            kind,
            position,
            has_moved: false,
        }
    }

    /// An independent piece carrying the same color, kind, position and move flag.
    pub fn clone_with_state(&self) -> Piece {
        Piece {
            color: self.color,
            kind: self.kind,
            position: self.position,
            has_moved: self.has_moved,
        }
    }

    pub fn is_opponent_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }

    pub fn to_char(&self) -> char {
        let c = match self.kind {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl Move {
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self { from, to }
    }

    pub fn as_algebraic(&self) -> String {
        format!("{}{}", self.from.as_algebraic(), self.to.as_algebraic())
    }

    /// Accepts `e2e4` as well as `e2-e4`.
    pub fn from_algebraic(algebraic: &str) -> Result<Self, NotationError> {
        let compact: String = algebraic.trim().chars().filter(|c| *c != '-').collect();
        if compact.len() != 4 || !compact.is_ascii() {
            return Err(NotationError::Move(algebraic.to_string()));
        }
        let from = Coordinate::from_algebraic(&compact[0..2])?;
        let to = Coordinate::from_algebraic(&compact[2..4])?;
        Ok(Self { from, to })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}

pub fn to_algebraic_square(row: i8, col: i8) -> String {
    let file = b'a'.wrapping_add(col as u8) as char; // Convert 0-7 column index to 'a'-'h'
    let rank = BOARD_SIZE as i16 - row as i16; // Row 0 is rank 8
    format!("{}{}", file, rank)
}
