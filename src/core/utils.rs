use crate::core::definitions::Position;
use crate::core::engine::BOARD_SIZE;

#[derive(Debug)]
pub struct BetweenIterator {
    current: Position,
    step: (i32, i32),
    remaining: i32,
}

impl Iterator for BetweenIterator {
    type Item = Position;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining <= 0 {
            return None;
        }
        self.remaining -= 1;
        self.current = Position::new(
            self.current.row + self.step.0,
            self.current.column + self.step.1,
        );
        if self.current.is_valid() {
            Some(self.current)
        } else {
            self.remaining = 0;
            None
        }
    }
}

/// Squares strictly between `from` and `to` along the diagonal picked by
/// [`direction`]. The walk length is the column distance, and it stops early
/// at the board edge.
pub fn between(from: Position, to: Position) -> BetweenIterator {
    BetweenIterator {
        current: from,
        step: direction(from, to),
        remaining: (to.column - from.column).abs() - 1,
    }
}

/// Signed `(row_step, column_step)` of a move.
///
/// A zero delta counts as negative, so a flat or vertical move still gets a
/// diagonal direction.
pub fn direction(from: Position, to: Position) -> (i32, i32) {
    let row_step = if to.row > from.row { 1 } else { -1 };
    let column_step = if to.column > from.column { 1 } else { -1 };
    (row_step, column_step)
}

#[inline]
pub fn is_valid_coord(row: i32, column: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&column)
}

/// Dark squares are the ones with odd `row + column`.
#[inline]
pub fn is_dark_square(position: Position) -> bool {
    (position.row + position.column) % 2 != 0
}

/// Safe on unchecked coordinates, the turn check runs before any bounds check.
pub fn row_distance(from: Position, to: Position) -> u32 {
    to.row.abs_diff(from.row)
}
