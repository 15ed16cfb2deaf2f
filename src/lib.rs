pub mod core;
pub mod utils;

// module re-exports
pub use crate::core::definitions::{Cell, MoveError, MoveKind, MoveRecord, Position};
pub use crate::core::engine::{Board, Color, Piece, Rank};
pub use crate::core::game::{Game, TurnState, WINNING_CAPTURES};
pub use crate::core::player::Player;
