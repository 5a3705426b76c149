use core::ops::RangeInclusive;

use crate::GameError;

/// One board axis: a row or column index, or the number of rows or columns.
pub type Coord = u8;

/// Cell and mine counts; a full `Coord::MAX × Coord::MAX` board still fits.
pub type CellCount = u16;

/// `(row, column)`, or `(rows, columns)` when describing a board size.
pub type Coord2 = (Coord, Coord);

pub const fn cell_count((rows, columns): Coord2) -> CellCount {
    rows as CellCount * columns as CellCount
}

pub const fn in_bounds((row, column): Coord2, (rows, columns): Coord2) -> bool {
    row < rows && column < columns
}

/// Converts an ndarray shape to a board size, rejecting empty or oversized axes.
pub fn board_size((rows, columns): (usize, usize)) -> crate::Result<Coord2> {
    let invalid = || GameError::InvalidDimensions { rows, columns };
    let row_count = Coord::try_from(rows).map_err(|_| invalid())?;
    let column_count = Coord::try_from(columns).map_err(|_| invalid())?;
    if row_count == 0 || column_count == 0 {
        return Err(invalid());
    }
    Ok((row_count, column_count))
}

/// Index into an ndarray shaped `(rows, columns)`.
pub fn nd_index((row, column): Coord2) -> [usize; 2] {
    [row.into(), column.into()]
}

/// Indices within one step of `index`, clipped to `0..len`.
fn axis_span(index: Coord, len: Coord) -> RangeInclusive<Coord> {
    let last = len.saturating_sub(1);
    index.saturating_sub(1)..=index.saturating_add(1).min(last)
}

/// Cells touching `center` (Chebyshev distance 1), clipped to a `(rows, columns)` board.
///
/// Row-major order; `center` itself is skipped.
pub fn neighbors(center: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> {
    let columns = axis_span(center.1, size.1);
    axis_span(center.0, size.0)
        .flat_map(move |row| columns.clone().map(move |column| (row, column)))
        .filter(move |&cell| cell != center)
}

/// Every cell of a `(rows, columns)` board in row-major order.
pub fn cells((rows, columns): Coord2) -> impl Iterator<Item = Coord2> {
    (0..rows).flat_map(move |row| (0..columns).map(move |column| (row, column)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let around: Vec<_> = neighbors((0, 0), (3, 3)).collect();
        assert_eq!(around, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(neighbors((0, 1), (3, 3)).count(), 5);
        assert_eq!(neighbors((2, 1), (3, 3)).count(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        let around: Vec<_> = neighbors((1, 1), (3, 3)).collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&(1, 1)));
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), (1, 1)).count(), 0);
        assert_eq!(neighbors((0, 2), (1, 5)).count(), 2);
    }

    #[test]
    fn neighbors_stop_at_last_axis_index() {
        let max = Coord::MAX;
        let around: Vec<_> = neighbors((max - 1, max - 1), (max, max)).collect();
        assert_eq!(around, [(max - 2, max - 2), (max - 2, max - 1), (max - 1, max - 2)]);
    }

    #[test]
    fn board_size_checks_both_axes() {
        assert_eq!(board_size((4, 255)), Ok((4, 255)));
        assert_eq!(
            board_size((256, 3)),
            Err(GameError::InvalidDimensions { rows: 256, columns: 3 })
        );
        assert_eq!(
            board_size((3, 0)),
            Err(GameError::InvalidDimensions { rows: 3, columns: 0 })
        );
    }

    #[test]
    fn full_board_count_fits() {
        assert_eq!(cell_count((Coord::MAX, Coord::MAX)), 65025);
        assert_eq!(cells((2, 3)).count(), 6);
        assert_eq!(cells((2, 3)).last(), Some((1, 2)));
    }
}
