use thiserror::Error;

use crate::{CellCount, Coord2, Status};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell {coords:?} is outside the {size:?} board")]
    OutOfBounds { coords: Coord2, size: Coord2 },
    #[error("A board needs 1 to 255 rows and columns, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
    #[error("Cannot place {mines} mines, only {capacity} cells are eligible")]
    TooManyMines { mines: CellCount, capacity: CellCount },
    /// Sizes and mine counts, as `(size, mines)`.
    #[error("Mine layout {found:?} does not match the configured board {expected:?}")]
    LayoutMismatch {
        expected: (Coord2, CellCount),
        found: (Coord2, CellCount),
    },
    #[error("Game is over ({0:?}), no new moves are accepted")]
    GameOver(Status),
}

pub type Result<T> = core::result::Result<T, GameError>;
