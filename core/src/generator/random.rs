use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement over every cell outside the safe zone, driven by a seeded RNG.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn effective_zone(config: &GameConfig, start: Coord2) -> SafeZone {
        let zone = config.safe_zone;
        if zone != SafeZone::Neighborhood {
            return zone;
        }

        let protected = cells(config.size)
            .filter(|&coords| zone.contains(start, coords))
            .count();
        let free = usize::from(config.total_cells()) - protected;
        if free < usize::from(config.mines) {
            log::warn!("Cannot make start cell zero, fallback to single safe cell");
            SafeZone::Cell
        } else {
            zone
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: &GameConfig, start: Coord2) -> Result<MineLayout> {
        if !in_bounds(start, config.size) {
            return Err(GameError::OutOfBounds {
                coords: start,
                size: config.size,
            });
        }

        let zone = Self::effective_zone(config, start);
        let mut eligible: Vec<Coord2> = cells(config.size)
            .filter(|&coords| !zone.contains(start, coords))
            .collect();

        let capacity = CellCount::try_from(eligible.len()).unwrap_or(CellCount::MAX);
        if capacity < config.mines {
            log::warn!(
                "Cannot place {} mines, only {} cells outside the safe zone",
                config.mines,
                capacity
            );
            return Err(GameError::TooManyMines {
                mines: config.mines,
                capacity,
            });
        }

        let (chosen, _) = eligible.partial_shuffle(&mut self.rng, config.mines.into());
        let layout = MineLayout::from_mine_coords(config.size, chosen)?;

        log::debug!(
            "Placed {} mines on {:?} board, first reveal at {:?} ({:?} safe zone)",
            layout.mine_count(),
            config.size,
            start,
            zone
        );
        Ok(layout)
    }
}
