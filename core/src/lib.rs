#![no_std]

extern crate alloc;

use core::ops::{BitOr, Index};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use grid::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod error;
mod generator;
mod grid;
mod session;
mod tile;
mod types;

/// Board dimensions, mine count and first-move protection for one session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
    pub safe_zone: SafeZone,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount, safe_zone: SafeZone) -> Self {
        Self {
            size,
            mines,
            safe_zone,
        }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(size, mines, SafeZone::default()).validated()
    }

    pub fn with_safe_zone(self, safe_zone: SafeZone) -> Result<Self> {
        Self { safe_zone, ..self }.validated()
    }

    pub fn validate(&self) -> Result<()> {
        let (rows, columns) = self.size;
        board_size((rows.into(), columns.into()))?;

        // never more than `total_cells() - 1`, so a full board is rejected too
        let capacity = self.safe_zone.capacity(self.size);
        if self.mines > capacity {
            return Err(GameError::TooManyMines {
                mines: self.mines,
                capacity,
            });
        }
        Ok(())
    }

    fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn columns(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_count(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

/// Immutable mine mask for one session, decided at the first reveal.
///
/// Serialized as the bare mask; deserializing re-checks the board size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    size: Coord2,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let size = board_size(mine_mask.dim())?;
        let mine_count = mine_mask
            .iter()
            .fold(0, |count: CellCount, &is_mine| count + CellCount::from(is_mine));
        Ok(Self {
            mine_mask,
            size,
            mine_count,
        })
    }

    /// Duplicate coordinates collapse into a single mine.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        board_size((size.0.into(), size.1.into()))?;
        let mut mine_mask: Array2<bool> = Array2::default(nd_index(size));

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::OutOfBounds { coords, size });
            }
            mine_mask[nd_index(coords)] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        cell_count(self.size)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size)
            .filter(|&pos| self[pos])
            .fold(0, |count, _| count + 1)
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        cells(self.size).filter(|&coords| self[coords])
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[nd_index(coords)]
    }
}

impl TryFrom<Array2<bool>> for MineLayout {
    type Error = GameError;

    fn try_from(mine_mask: Array2<bool>) -> Result<Self> {
        Self::from_mine_mask(mine_mask)
    }
}

impl From<MineLayout> for Array2<bool> {
    fn from(layout: MineLayout) -> Self {
        layout.mine_mask
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}
