use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size `rows × columns` board of tiles.
///
/// Callers only get read access; all mutation goes through [`Session`]. Serialized as the bare tile
/// array, and deserializing re-checks the board size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Tile>", into = "Array2<Tile>")]
pub struct Grid {
    tiles: Array2<Tile>,
    size: Coord2,
}

impl Grid {
    pub(crate) fn new(size: Coord2) -> Self {
        Self {
            tiles: Array2::default(nd_index(size)),
            size,
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                coords,
                size: self.size,
            })
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Tile> {
        self.tiles.get(nd_index(coords))
    }

    pub fn tile(&self, coords: Coord2) -> Result<&Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    /// Row-major iteration over `((row, column), tile)`.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Tile)> {
        cells(self.size).zip(self.tiles.iter())
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(|tile| tile.is_revealed())
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(|tile| tile.is_mine())
    }

    fn count_where(&self, predicate: impl Fn(&Tile) -> bool) -> CellCount {
        self.tiles
            .iter()
            .fold(0, |count: CellCount, tile| count + CellCount::from(predicate(tile)))
    }

    pub(crate) fn tile_mut(&mut self, coords: Coord2) -> &mut Tile {
        &mut self.tiles[nd_index(coords)]
    }

    pub(crate) fn reset(&mut self) {
        self.tiles.fill(Tile::default());
    }

    /// Copies a mine layout of the same size into the tiles, computing every adjacency count.
    pub(crate) fn arm(&mut self, layout: &MineLayout) {
        for coords in cells(self.size) {
            let is_mine = layout.contains_mine(coords);
            let count = if is_mine {
                0
            } else {
                layout.adjacent_mine_count(coords)
            };
            self.tile_mut(coords).arm(count, is_mine);
        }
    }

    pub(crate) fn reveal_all(&mut self) {
        self.tiles.iter_mut().for_each(Tile::reveal);
    }
}

impl Index<Coord2> for Grid {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[nd_index(coords)]
    }
}

impl TryFrom<Array2<Tile>> for Grid {
    type Error = GameError;

    fn try_from(tiles: Array2<Tile>) -> Result<Self> {
        let size = board_size(tiles.dim())?;
        Ok(Self { tiles, size })
    }
}

impl From<Grid> for Array2<Tile> {
    fn from(grid: Grid) -> Self {
        grid.tiles
    }
}
