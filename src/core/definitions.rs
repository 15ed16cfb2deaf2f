use std::fmt::Display;

use crate::core::engine::{Color, Piece, Rank};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Piece),
}

/// Square coordinate, row 0 on top and column 0 on the left.
///
/// Stored signed so that off-board requests can be expressed and rejected
/// instead of wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /** name is not registered in this game */
    InvalidPlayer,
    /** wrong color is moving and no chain jump is pending */
    OutOfTurn,
    /** square is off the board or doesn't hold the mover's piece */
    InvalidSquare,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Step,
    Jump,
}

/// Accepted move, as kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub color: Color,
    pub from: Position,
    pub to: Position,
    pub kind: MoveKind,
    pub captured: u32,
    /** rank the piece was promoted to by this move */
    pub promotion: Option<Rank>,
}

// ---
// Implementation block
// ---

impl Cell {
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Piece(piece) => Some(*piece),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Piece> for Cell {
    fn from(value: Piece) -> Self {
        Cell::Piece(value)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => f.pad("__"),
            Cell::Piece(piece) => Display::fmt(piece, f),
        }
    }
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Position { row, column }
    }

    pub fn is_valid(&self) -> bool {
        crate::core::utils::is_valid_coord(self.row, self.column)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, column): (i32, i32)) -> Self {
        Position { row, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            MoveError::InvalidPlayer => "You are not a player in this game",
            MoveError::OutOfTurn => "It is not your turn",
            MoveError::InvalidSquare => "Square is off the board or doesn't hold your checker",
        })
    }
}

impl std::error::Error for MoveError {}

impl MoveKind {
    /// Classifies by column distance only: one column is a step, anything else a jump.
    pub fn classify(from: Position, to: Position) -> MoveKind {
        if (to.column - from.column).abs() == 1 {
            MoveKind::Step
        } else {
            MoveKind::Jump
        }
    }
}
