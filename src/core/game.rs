use log::{debug, info, trace};

use crate::core::definitions::{Cell, MoveError, MoveKind, MoveRecord, Position};
use crate::core::engine::{Board, Color, Piece, Rank};
use crate::core::player::{Player, PlayerRegistry};
use crate::core::utils::{between, row_distance};

/// Captures needed to win: every opposing piece of the opening layout.
pub const WINNING_CAPTURES: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /** color to move, no chain pending */
    AwaitingMove(Color),
    /** color that just jumped; its opponent is up, but the jumper may keep jumping */
    ChainJumping(Color),
}

impl TurnState {
    pub fn current_turn(self) -> Color {
        match self {
            TurnState::AwaitingMove(color) => color,
            TurnState::ChainJumping(jumper) => jumper.opposite(),
        }
    }

    fn after(kind: MoveKind, mover: Color) -> TurnState {
        match kind {
            MoveKind::Step => TurnState::AwaitingMove(mover.opposite()),
            MoveKind::Jump => TurnState::ChainJumping(mover),
        }
    }
}

/// Move engine for one game session: board, registered players and turn state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: TurnState,
    players: PlayerRegistry,
    history: Vec<MoveRecord>,
}

impl Game {
    pub fn new(board: Board) -> Game {
        Game::with_player(board, Color::Black)
    }

    pub fn with_player(board: Board, player: Color) -> Game {
        Game {
            board,
            turn: TurnState::AwaitingMove(player),
            players: PlayerRegistry::default(),
            history: Vec::new(),
        }
    }

    /// Registers `name` as the owner of `color`.
    ///
    /// Promotion counters start from the kings of that color already on the
    /// board, which is zero for the opening layout.
    pub fn create_player(&mut self, name: impl Into<String>, color: Color) -> &Player {
        let player = Player::new(name, color).with_promoted(
            self.board.count(color, Rank::King),
            self.board.count(color, Rank::TripleKing),
        );
        debug!("Registered {} as {}", player.name(), color);
        self.players.register(player)
    }

    pub fn find_player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.by_name(name)
    }

    pub fn find_player_by_color(&self, color: Color) -> Option<&Player> {
        self.players.by_color(color)
    }

    pub fn is_player_valid(&self, name: &str) -> bool {
        self.players.by_name(name).is_some()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, position: impl Into<Position>) -> Result<Cell, MoveError> {
        self.board.cell_at(position.into())
    }

    pub fn checker_details(
        &self,
        position: impl Into<Position>,
    ) -> Result<Option<Piece>, MoveError> {
        self.cell_at(position).map(|cell| cell.piece())
    }

    pub fn current_turn(&self) -> Color {
        self.turn.current_turn()
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    pub fn jump_just_occurred(&self) -> bool {
        matches!(self.turn, TurnState::ChainJumping(_))
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Player who captured every opposing piece, if any.
    pub fn winner(&self) -> Option<&Player> {
        self.players
            .iter()
            .find(|player| player.total_captured_pieces_count() >= WINNING_CAPTURES)
    }

    /// Validates and applies one move (one hop of a chain).
    ///
    /// Returns the number of opposing pieces captured by this call. Every check
    /// runs before the board is touched, so an error leaves the game unchanged.
    pub fn submit_move(
        &mut self,
        player_name: &str,
        start: impl Into<Position>,
        end: impl Into<Position>,
    ) -> Result<u32, MoveError> {
        let (start, end) = (start.into(), end.into());
        let color = match self.players.by_name(player_name) {
            Some(player) => player.color(),
            None => {
                debug!("Rejected move from unknown player '{player_name}'");
                return Err(MoveError::InvalidPlayer);
            }
        };

        self.check_turn(color, start, end)?;
        let piece = self.owned_piece(color, start)?;
        if !self.board.cell_at(end)?.is_empty() {
            debug!("Rejected {color} move to occupied square {end}");
            return Err(MoveError::InvalidSquare);
        }

        let kind = MoveKind::classify(start, end);
        let promotion = piece.promotion_at(end.row);
        let moved = Piece::new(color, promotion.unwrap_or(piece.rank));
        if let Some(rank) = promotion {
            info!("{color} piece promoted to {rank} at {end}");
            if let Some(player) = self.players.by_color_mut(color) {
                player.promoted(rank);
            }
        }

        self.board.clear(start)?;
        self.board.place(end, Cell::Piece(moved))?;
        if kind == MoveKind::Jump {
            self.resolve_captures(color, start, end)?;
        }
        self.turn = TurnState::after(kind, color);

        let captured = self
            .players
            .by_color_mut(color)
            .map(Player::take_captured)
            .unwrap_or(0);
        debug!(
            "{player_name} ({color}) {kind:?} {start} -> {end}, captured {captured}, {} to move",
            self.current_turn()
        );
        self.history.push(MoveRecord {
            color,
            from: start,
            to: end,
            kind,
            captured,
            promotion,
        });
        if let Some(winner) = self.winner() {
            info!("{} has captured every opposing piece", winner.name());
        }
        Ok(captured)
    }

    /// Off-turn moves are let through only for the player that just jumped,
    /// and only when the new move is a jump too (more than one row).
    fn check_turn(&self, color: Color, start: Position, end: Position) -> Result<(), MoveError> {
        if color == self.current_turn() {
            return Ok(());
        }
        if self.turn == TurnState::ChainJumping(color) && row_distance(start, end) > 1 {
            trace!("{color} continues a chain jump from {start}");
            return Ok(());
        }
        debug!("Rejected {color} move, {} is up", self.current_turn());
        Err(MoveError::OutOfTurn)
    }

    fn owned_piece(&self, color: Color, start: Position) -> Result<Piece, MoveError> {
        match self.board.cell_at(start)? {
            Cell::Piece(piece) if piece.color == color => Ok(piece),
            cell => {
                debug!("Rejected {color} move from {start} holding {cell}");
                Err(MoveError::InvalidSquare)
            }
        }
    }

    /// Clears every opposing piece strictly between `start` and `end` and
    /// credits each one to the mover. Losing a king or triple king is charged
    /// to whoever owns the captured color.
    fn resolve_captures(
        &mut self,
        color: Color,
        start: Position,
        end: Position,
    ) -> Result<(), MoveError> {
        let opponent = color.opposite();
        for square in between(start, end) {
            let Cell::Piece(target) = self.board.cell_at(square)? else {
                continue;
            };
            if target.color != opponent {
                continue;
            }
            trace!("{color} captures {target} at {square}");
            if let Some(owner) = self.players.by_color_mut(opponent) {
                owner.lost(target.rank);
            }
            self.board.clear(square)?;
            if let Some(player) = self.players.by_color_mut(color) {
                player.captured();
            }
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Default::default())
    }
}
