use alloc::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::*;

/// Session-level game state.
///
/// There is no separate "in progress" state. A session keeps `Start` after the first reveal; use
/// [`Session::mines_placed`] to tell a fresh board from one being played.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Start,
    Won,
    Lost,
}

impl Status {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One playthrough on a fixed-size board.
///
/// Mines are placed lazily on the first [`reveal`](Self::reveal), around the revealed cell. The grid is
/// exclusively owned here; callers read it through [`grid`](Self::grid) and change it only through the
/// session's methods.
#[derive(Clone, Debug)]
pub struct Session<G = RandomMineGenerator> {
    config: GameConfig,
    generator: G,
    grid: Grid,
    status: Status,
    mines_placed: bool,
    revealed_safe: CellCount,
    flags_placed: i32,
    elapsed_time: u32,
    triggered_mine: Option<Coord2>,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }
}

impl<G: MineGenerator> Session<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            generator,
            grid: Grid::new(config.size),
            status: Status::Start,
            mines_placed: false,
            revealed_safe: 0,
            flags_placed: 0,
            elapsed_time: 0,
            triggered_mine: None,
        })
    }

    /// Resets counters and the whole grid; the next reveal places a new set of mines.
    pub fn start(&mut self) {
        self.status = Status::Start;
        self.elapsed_time = 0;
        self.flags_placed = 0;
        self.revealed_safe = 0;
        self.mines_placed = false;
        self.triggered_mine = None;
        self.grid.reset();
    }

    /// Like [`start`](Self::start), but with a known mine layout instead of a random one.
    pub fn start_with_mines(&mut self, mines: &[Coord2]) -> Result<()> {
        let layout = MineLayout::from_mine_coords(self.config.size, mines)?;
        self.check_layout(&layout)?;

        self.start();
        self.arm(&layout);
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tile(&self, coords: Coord2) -> Result<&Tile> {
        self.grid.tile(coords)
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Safe tiles opened by play, not counting the disclosure at game end.
    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe
    }

    pub fn elapsed_time(&self) -> u32 {
        self.elapsed_time
    }

    pub fn set_elapsed_time(&mut self, seconds: u32) {
        self.elapsed_time = seconds;
    }

    pub fn tick(&mut self) {
        self.elapsed_time = self.elapsed_time.saturating_add(1);
    }

    /// Configured mines minus flags placed; negative when over-flagged.
    ///
    /// Only as accurate as the adjustments callers make through
    /// [`adjust_flag_count`](Self::adjust_flag_count).
    pub fn remaining_flags(&self) -> i32 {
        i32::from(self.config.mines) - self.flags_placed
    }

    /// Adds `delta` to the number of flags placed: `+1` for a new flag, `-1` for a removed one.
    pub fn adjust_flag_count(&mut self, delta: i32) {
        self.flags_placed = self.flags_placed.saturating_add(delta);
    }

    /// Sets the flag on a hidden tile. Does not touch the flag counter.
    pub fn set_flagged(&mut self, coords: Coord2, flagged: bool) -> Result<MarkOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_not_finished()?;

        let tile = self.grid.tile_mut(coords);
        if tile.is_revealed() {
            log::warn!("Ignoring flag change on revealed tile {:?}", coords);
            return Ok(MarkOutcome::NoChange);
        }
        if tile.is_flagged() == flagged {
            return Ok(MarkOutcome::NoChange);
        }

        tile.set_flagged(flagged);
        Ok(MarkOutcome::Changed)
    }

    /// Flips the flag on a hidden tile and keeps the flag counter in step.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let was_flagged = self.grid.tile(coords)?.is_flagged();
        let outcome = self.set_flagged(coords, !was_flagged)?;
        if outcome.has_update() {
            self.adjust_flag_count(if was_flagged { -1 } else { 1 });
        }
        Ok(outcome)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_not_finished()?;

        if !self.mines_placed {
            let layout = self.generator.generate(&self.config, coords)?;
            self.check_layout(&layout)?;
            self.arm(&layout);
        }

        Ok(self.reveal_single_tile(coords))
    }

    /// Reveals the hidden neighbours of a numbered tile once all its mines are flagged.
    pub fn chord_reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_not_finished()?;

        let tile = self.grid[coords];
        let count = tile.adjacent_mine_count();
        if !tile.is_revealed() || count == 0 || self.count_flagged_neighbors(coords) != count {
            return Ok(RevealOutcome::NoChange);
        }

        let mut outcome = RevealOutcome::NoChange;
        for pos in self.grid.iter_neighbors(coords) {
            outcome = outcome | self.reveal_single_tile(pos);
            if self.status.is_finished() {
                break;
            }
        }
        Ok(outcome)
    }

    fn check_layout(&self, layout: &MineLayout) -> Result<()> {
        let expected = (self.config.size, self.config.mines);
        let found = (layout.size(), layout.mine_count());
        if found == expected {
            Ok(())
        } else {
            log::warn!("Rejecting mine layout {:?}, expected {:?}", found, expected);
            Err(GameError::LayoutMismatch { expected, found })
        }
    }

    fn arm(&mut self, layout: &MineLayout) {
        self.grid.arm(layout);
        self.mines_placed = true;
    }

    fn reveal_single_tile(&mut self, coords: Coord2) -> RevealOutcome {
        let tile = self.grid[coords];
        if !tile.is_revealable() {
            return RevealOutcome::NoChange;
        }

        if tile.is_mine() {
            self.grid.tile_mut(coords).explode();
            self.triggered_mine = Some(coords);
            self.end_game(Status::Lost);
            return RevealOutcome::HitMine;
        }

        self.grid.tile_mut(coords).reveal();
        self.revealed_safe += 1;
        if self.grid[coords].is_zero() {
            self.revealed_safe += self.cascade(coords);
        }

        if self.revealed_safe >= self.config.safe_cells() {
            self.end_game(Status::Won);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Opens the connected region around a zero tile, returning how many tiles it revealed.
    ///
    /// Flagged tiles bound the region and stay hidden. Each tile is marked before it is queued, so it
    /// enters the queue at most once.
    fn cascade(&mut self, origin: Coord2) -> CellCount {
        let mut opened: CellCount = 0;
        let mut to_visit = VecDeque::from([origin]);

        while let Some(center) = to_visit.pop_front() {
            for pos in self.grid.iter_neighbors(center) {
                let tile = self.grid.tile_mut(pos);
                if !tile.is_revealable() {
                    continue;
                }

                tile.reveal();
                opened += 1;
                if tile.is_zero() {
                    to_visit.push_back(pos);
                }
            }
        }

        log::trace!("Cascade from {:?} opened {} tiles", origin, opened);
        opened
    }

    fn end_game(&mut self, status: Status) {
        if self.status.is_finished() {
            return;
        }

        log::debug!(
            "Game ended {:?} after {}s with {} safe tiles revealed",
            status,
            self.elapsed_time,
            self.revealed_safe
        );
        self.status = status;
        self.grid.reveal_all();
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        self.grid
            .iter_neighbors(coords)
            .filter(|&pos| self.grid[pos].is_flagged())
            .fold(0, |count, _| count + 1)
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::GameOver(self.status))
        } else {
            Ok(())
        }
    }
}
