use serde::{Deserialize, Serialize};

/// State of a single cell, as stored by the session and read by callers.
///
/// The adjacency count is only meaningful once mines have been placed, and is never read for mine tiles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    is_mine: bool,
    is_flagged: bool,
    is_exploded: bool,
    is_revealed: bool,
    adjacent_mine_count: u8,
}

impl Tile {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    pub const fn is_exploded(self) -> bool {
        self.is_exploded
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }

    pub const fn adjacent_mine_count(self) -> u8 {
        self.adjacent_mine_count
    }

    /// Revealed, not a mine, and no mines around it.
    pub const fn is_zero(self) -> bool {
        self.is_revealed && !self.is_mine && self.adjacent_mine_count == 0
    }

    /// Whether a plain reveal may open this tile.
    pub const fn is_revealable(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    pub(crate) fn arm(&mut self, adjacent_mine_count: u8, is_mine: bool) {
        self.is_mine = is_mine;
        self.adjacent_mine_count = if is_mine { 0 } else { adjacent_mine_count };
    }

    pub(crate) fn set_flagged(&mut self, flagged: bool) {
        self.is_flagged = flagged;
    }

    pub(crate) fn reveal(&mut self) {
        self.is_revealed = true;
    }

    pub(crate) fn explode(&mut self) {
        self.is_exploded = true;
        self.is_revealed = true;
    }
}
