use log::debug;

use crate::core::engine::{Color, Rank};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: Color,
    kings: u32,
    triple_kings: u32,
    /** pieces captured by the move being applied, reset once it returns */
    captured_pieces: u32,
    total_captured_pieces: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Player {
        Player {
            name: name.into(),
            color,
            kings: 0,
            triple_kings: 0,
            captured_pieces: 0,
            total_captured_pieces: 0,
        }
    }

    /// Starts the promotion counters from pieces already on the board.
    pub(crate) fn with_promoted(mut self, kings: u32, triple_kings: u32) -> Player {
        self.kings = kings;
        self.triple_kings = triple_kings;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn king_count(&self) -> u32 {
        self.kings
    }

    pub fn triple_king_count(&self) -> u32 {
        self.triple_kings
    }

    pub fn captured_pieces_count(&self) -> u32 {
        self.captured_pieces
    }

    pub fn total_captured_pieces_count(&self) -> u32 {
        self.total_captured_pieces
    }

    pub(crate) fn promoted(&mut self, rank: Rank) {
        match rank {
            Rank::King => self.kings += 1,
            Rank::TripleKing => self.triple_kings += 1,
            Rank::Man => (),
        }
    }

    pub(crate) fn lost(&mut self, rank: Rank) {
        match rank {
            Rank::King => self.kings = self.kings.saturating_sub(1),
            Rank::TripleKing => self.triple_kings = self.triple_kings.saturating_sub(1),
            Rank::Man => (),
        }
    }

    pub(crate) fn captured(&mut self) {
        self.captured_pieces += 1;
        self.total_captured_pieces += 1;
    }

    /// Hands back the per-move capture count and zeroes it.
    pub(crate) fn take_captured(&mut self) -> u32 {
        std::mem::take(&mut self.captured_pieces)
    }
}

/// One slot per color. Registering a color again replaces the previous player.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    slots: [Option<Player>; 2],
}

impl PlayerRegistry {
    pub fn register(&mut self, player: Player) -> &Player {
        let slot = &mut self.slots[player.color.index()];
        if let Some(previous) = slot.as_ref() {
            debug!(
                "{} replaces {} as the {} player",
                player.name, previous.name, player.color
            );
        }
        slot.insert(player)
    }

    pub fn by_color(&self, color: Color) -> Option<&Player> {
        self.slots[color.index()].as_ref()
    }

    pub fn by_color_mut(&mut self, color: Color) -> Option<&mut Player> {
        self.slots[color.index()].as_mut()
    }

    pub fn by_name(&self, name: &str) -> Option<&Player> {
        self.iter().find(|player| player.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.slots.iter().flatten()
    }
}
