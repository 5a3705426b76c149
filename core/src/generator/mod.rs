use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    /// Builds the layout for `config`, keeping every cell of the safe zone around `start` free.
    ///
    /// The session rejects layouts whose size or mine count differ from `config`.
    fn generate(&mut self, config: &GameConfig, start: Coord2) -> Result<MineLayout>;
}

/// Cells protected from mines relative to the first revealed cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafeZone {
    /// The whole row and the whole column through the first cell.
    #[default]
    Lateral,
    /// Only the first cell.
    Cell,
    /// The first cell and its neighbours, so the first reveal always opens a region.
    Neighborhood,
}

impl SafeZone {
    pub fn contains(self, start: Coord2, coords: Coord2) -> bool {
        use SafeZone::*;
        match self {
            Lateral => coords.0 == start.0 || coords.1 == start.1,
            Cell => coords == start,
            Neighborhood => coords.0.abs_diff(start.0) <= 1 && coords.1.abs_diff(start.1) <= 1,
        }
    }

    /// Number of cells guaranteed to stay eligible for mines, wherever the first reveal lands.
    pub const fn capacity(self, (rows, columns): Coord2) -> CellCount {
        match self {
            Self::Lateral => cell_count((rows.saturating_sub(1), columns.saturating_sub(1))),
            // `Neighborhood` degrades to `Cell` when it cannot fit the mines
            Self::Cell | Self::Neighborhood => cell_count((rows, columns)).saturating_sub(1),
        }
    }
}
