use std::{fmt::Display, ops::AddAssign};

use log::{debug, trace};

use crate::core::definitions::{MoveError, MoveKind, Position};
use crate::core::game::Game;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    pub moves: usize,
    pub steps: usize,
    pub jumps: usize,
    pub captures: u32,
    pub promotions: usize,
}

impl ReplayStats {
    pub fn combine(self, other: ReplayStats) -> Self {
        ReplayStats {
            moves: self.moves + other.moves,
            steps: self.steps + other.steps,
            jumps: self.jumps + other.jumps,
            captures: self.captures + other.captures,
            promotions: self.promotions + other.promotions,
        }
    }
}

impl AddAssign for ReplayStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.combine(rhs);
    }
}

impl Display for ReplayStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - st: {:<4} jp: {:<4} cp: {:<4} pr: {:<4}",
            self.moves, self.steps, self.jumps, self.captures, self.promotions
        )
    }
}

/// One parsed transcript line: `name row,col row,col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveLine {
    pub player: String,
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    Parse { line: usize, reason: String },
    Move { line: usize, error: MoveError },
}

impl Display for TranscriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscriptError::Parse { line, reason } => write!(f, "line {line}: {reason}"),
            TranscriptError::Move { line, error } => write!(f, "line {line}: {error}"),
        }
    }
}

impl std::error::Error for TranscriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranscriptError::Parse { .. } => None,
            TranscriptError::Move { error, .. } => Some(error),
        }
    }
}

pub fn parse_position(text: &str) -> Result<Position, String> {
    let trimmed = text.trim().trim_start_matches('(').trim_end_matches(')');
    let (row, column) = trimmed
        .split_once(',')
        .ok_or_else(|| format!("expected 'row,column', got '{text}'"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("bad row in '{text}': {err}"))?;
    let column = column
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("bad column in '{text}': {err}"))?;
    Ok(Position::new(row, column))
}

pub fn parse_move_line(text: &str) -> Result<MoveLine, String> {
    let parts: Vec<_> = text.split_whitespace().collect();
    match parts.as_slice() {
        [player, start, end] => Ok(MoveLine {
            player: player.to_string(),
            start: parse_position(start)?,
            end: parse_position(end)?,
        }),
        _ => Err(format!("expected 'name row,col row,col', got '{}'", text.trim())),
    }
}

/// Plays every line of `transcript` on `game`. Empty lines and `#` comments are
/// skipped; the first failing line stops the replay.
pub fn replay(game: &mut Game, transcript: &str) -> Result<ReplayStats, TranscriptError> {
    let mut stats = ReplayStats::default();
    for (idx, text) in transcript.lines().enumerate() {
        let line = idx + 1;
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let parsed =
            parse_move_line(text).map_err(|reason| TranscriptError::Parse { line, reason })?;
        trace!("Replaying line {line}: {parsed:?}");
        game.submit_move(&parsed.player, parsed.start, parsed.end)
            .map_err(|error| TranscriptError::Move { line, error })?;
        if let Some(record) = game.history().last() {
            stats += ReplayStats {
                moves: 1,
                steps: usize::from(record.kind == MoveKind::Step),
                jumps: usize::from(record.kind == MoveKind::Jump),
                captures: record.captured,
                promotions: usize::from(record.promotion.is_some()),
            };
        }
    }
    debug!("Replay finished: {stats}");
    Ok(stats)
}
