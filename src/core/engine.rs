use std::fmt::{Debug, Display};

use log::trace;

use crate::core::definitions::{Cell, MoveError, Position};
use crate::core::utils::is_dark_square;

pub const BOARD_SIZE: usize = 8;
/** Rows filled with pieces on each side at game start */
pub const HOME_ROWS: usize = 3;

/** Board & piece state. Legality lives in the game, the board only stores cells. */
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    arr: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Board without any pieces.
    pub fn new() -> Board {
        Board {
            arr: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn inside(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.arr
    }

    pub fn cell_at(&self, position: Position) -> Result<Cell, MoveError> {
        if !position.is_valid() {
            return Err(MoveError::InvalidSquare);
        }
        Ok(self.arr[position.row as usize][position.column as usize])
    }

    /** Overwrites the cell without any rule checks. */
    pub fn place(&mut self, position: Position, cell: Cell) -> Result<(), MoveError> {
        if !position.is_valid() {
            return Err(MoveError::InvalidSquare);
        }
        trace!("Board write {position}: {cell}");
        self.arr[position.row as usize][position.column as usize] = cell;
        Ok(())
    }

    pub fn clear(&mut self, position: Position) -> Result<(), MoveError> {
        self.place(position, Cell::Empty)
    }

    pub fn iter<'a>(&'a self) -> impl Iterator<Item = Cell> + 'a {
        self.arr.iter().flat_map(|row| row.iter().copied())
    }

    pub fn iter_pieces<'a>(&'a self) -> impl Iterator<Item = (Position, Piece)> + 'a {
        self.arr.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(column, cell)| {
                cell.piece()
                    .map(|piece| (Position::new(row as i32, column as i32), piece))
            })
        })
    }

    pub fn count(&self, color: Color, rank: Rank) -> u32 {
        self.iter_pieces()
            .filter(|(_, piece)| piece.color == color && piece.rank == rank)
            .count() as u32
    }
}

impl Default for Board {
    /// Opening layout: White on the dark squares of rows 0..3, Black on rows 5..8.
    fn default() -> Self {
        let mut arr = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, cells) in arr.iter_mut().enumerate() {
            let color = if row < HOME_ROWS {
                Color::White
            } else if row >= BOARD_SIZE - HOME_ROWS {
                Color::Black
            } else {
                continue;
            };
            for (column, cell) in cells.iter_mut().enumerate() {
                if is_dark_square(Position::new(row as i32, column as i32)) {
                    *cell = Cell::Piece(Piece::man(color));
                }
            }
        }
        Board { arr }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.arr.iter() {
            let line: Vec<_> = row.iter().map(|cell| format!("{cell:<17}")).collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board {{")?;
        Display::fmt(self, f)?;
        write!(f, "}}")
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const fn new(color: Color, rank: Rank) -> Piece {
        Piece { color, rank }
    }

    pub const fn man(color: Color) -> Piece {
        Piece::new(color, Rank::Man)
    }

    /// Rank this piece gets on arriving at `row`, if the arrival promotes it.
    ///
    /// Men are crowned on either edge row. Kings only become triple kings on
    /// their own home edge: row 0 for White, row 7 for Black.
    pub fn promotion_at(&self, row: i32) -> Option<Rank> {
        let last_row = BOARD_SIZE as i32 - 1;
        match self.rank {
            Rank::Man if row == 0 || row == last_row => Some(Rank::King),
            Rank::King if row == self.color.home_edge() => Some(Rank::TripleKing),
            _ => None,
        }
    }
}

impl Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Piece")
            .field("color", &self.color)
            .field("rank", &self.rank)
            .finish()
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.rank {
            Rank::Man => format!("{}", self.color),
            Rank::King => format!("{}_king", self.color),
            Rank::TripleKing => format!("{}_Triple_King", self.color),
        };
        f.pad(&tag)
    }
}

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash)]
pub enum Color {
    #[default]
    Black = 0x00,
    White = 0x01,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Edge row where this color's kings are promoted again.
    pub fn home_edge(self) -> i32 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE as i32 - 1,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self == &Self::White {
            "White"
        } else {
            "Black"
        })
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Rank {
    Man,
    King,
    TripleKing,
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Rank::Man => "Man",
            Rank::King => "King",
            Rank::TripleKing => "Triple King",
        })
    }
}
