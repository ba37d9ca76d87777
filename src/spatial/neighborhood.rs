//! Moore neighbourhood counting and Chebyshev search windows

use crate::spatial::grid::{Cell, Partition, Position};

/// Offsets of the eight Moore neighbours, row-major, centre excluded
pub const MOORE_OFFSETS: [[isize; 2]; 8] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// In-bounds Moore neighbours of a position
///
/// Corners have 3 neighbours, edges 5 and interior cells 8. The board does not wrap.
pub fn moore_neighbors(size: usize, pos: Position) -> impl Iterator<Item = Position> {
    MOORE_OFFSETS.into_iter().filter_map(move |[dr, dc]| {
        let row = pos[0].checked_add_signed(dr)?;
        let col = pos[1].checked_add_signed(dc)?;
        (row < size && col < size).then_some([row, col])
    })
}

/// Count the neighbours of `pos` carrying `cell`
pub fn count_neighbors(partition: &Partition, pos: Position, cell: Cell) -> u8 {
    moore_neighbors(partition.size(), pos)
        .filter(|&neighbor| partition.cell(neighbor) == Some(cell))
        .count() as u8
}

/// Positions within Chebyshev distance `radius` of `center`, clamped to the board
///
/// Yields in row-major order, centre included.
pub fn chebyshev_window(
    size: usize,
    center: Position,
    radius: usize,
) -> impl Iterator<Item = Position> {
    let row_start = center[0].saturating_sub(radius);
    let col_start = center[1].saturating_sub(radius);
    let row_end = center[0].saturating_add(radius).saturating_add(1).min(size);
    let col_end = center[1].saturating_add(radius).saturating_add(1).min(size);

    (row_start..row_end).flat_map(move |row| (col_start..col_end).map(move |col| [row, col]))
}
