//! Board partition into high-status, low-status and empty cells
//!
//! The board stores exactly one label per cell, so the three population sets are
//! disjoint and cover the board by construction. Set views are produced on demand
//! in row-major order, which is also the order every pass iterates in.

use std::collections::BTreeSet;

use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::io::error::{Result, SimulationError, invalid_parameter};

/// Board coordinates as `[row, col]`
pub type Position = [usize; 2];

/// One of the two populations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// High-status occupants
    High,
    /// Low-status occupants
    Low,
}

impl Group {
    /// Both populations in pass order
    pub const ALL: [Self; 2] = [Self::High, Self::Low];

    /// The other population
    pub const fn opposite(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }

    /// Cell label worn by members of this group
    pub const fn cell(self) -> Cell {
        match self {
            Self::High => Cell::High,
            Self::Low => Cell::Low,
        }
    }
}

/// Label of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Unoccupied
    #[default]
    Empty,
    /// Occupied by a high-status occupant
    High,
    /// Occupied by a low-status occupant
    Low,
}

impl Cell {
    /// Group of the occupant, if any
    pub const fn group(self) -> Option<Group> {
        match self {
            Self::Empty => None,
            Self::High => Some(Group::High),
            Self::Low => Some(Group::Low),
        }
    }
}

/// Square board partitioned into the three population sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    cells: Array2<Cell>,
    high_count: usize,
    low_count: usize,
}

impl Partition {
    /// Create a board of `size` x `size` empty cells
    pub fn empty(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), Cell::Empty),
            high_count: 0,
            low_count: 0,
        }
    }

    /// Build a partition from explicit membership lists
    ///
    /// Cells not named in either list are empty. Positions outside the board are
    /// ignored, and a position listed in both groups keeps its last assignment.
    pub fn from_members(size: usize, high: &[Position], low: &[Position]) -> Self {
        let mut partition = Self::empty(size);
        for &pos in high {
            partition.place(pos, Cell::High);
        }
        for &pos in low {
            partition.place(pos, Cell::Low);
        }
        partition
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of board cells
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Check if a position is on the board
    pub fn contains(&self, pos: Position) -> bool {
        pos[0] < self.size() && pos[1] < self.size()
    }

    /// Label at a position, `None` when off the board
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Read-only view of the label board
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Number of cells carrying a label
    pub fn count(&self, cell: Cell) -> usize {
        match cell {
            Cell::High => self.high_count,
            Cell::Low => self.low_count,
            Cell::Empty => self.capacity() - self.high_count - self.low_count,
        }
    }

    /// Number of occupants across both groups
    pub const fn occupied(&self) -> usize {
        self.high_count + self.low_count
    }

    /// Positions carrying a label, in row-major order
    pub fn members(&self, cell: Cell) -> Vec<Position> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &label)| label == cell)
            .map(|((row, col), _)| [row, col])
            .collect()
    }

    /// Relabel a single cell, keeping the per-group counts in step
    ///
    /// Returns the previous label, or `None` if the position is off the board.
    pub(crate) fn place(&mut self, pos: Position, cell: Cell) -> Option<Cell> {
        let slot = self.cells.get_mut(pos)?;
        let previous = std::mem::replace(slot, cell);
        self.adjust_count(previous, cell);
        Some(previous)
    }

    /// Move an occupant from `from` to the empty cell `to` in one step
    ///
    /// Returns false and leaves the board untouched unless `from` is occupied
    /// and `to` is empty.
    pub(crate) fn relocate(&mut self, from: Position, to: Position) -> bool {
        let (Some(origin), Some(Cell::Empty)) = (self.cell(from), self.cell(to)) else {
            return false;
        };
        if origin == Cell::Empty {
            return false;
        }
        self.place(from, Cell::Empty);
        self.place(to, origin);
        true
    }

    fn adjust_count(&mut self, removed: Cell, added: Cell) {
        match removed {
            Cell::High => self.high_count -= 1,
            Cell::Low => self.low_count -= 1,
            Cell::Empty => {}
        }
        match added {
            Cell::High => self.high_count += 1,
            Cell::Low => self.low_count += 1,
            Cell::Empty => {}
        }
    }

    /// Take an immutable copy of the three population sets
    pub fn snapshot(&self) -> PartitionSnapshot {
        let mut snapshot = PartitionSnapshot {
            size: self.size(),
            high: BTreeSet::new(),
            low: BTreeSet::new(),
            empty: BTreeSet::new(),
        };
        for ((row, col), &cell) in self.cells.indexed_iter() {
            let set = match cell {
                Cell::High => &mut snapshot.high,
                Cell::Low => &mut snapshot.low,
                Cell::Empty => &mut snapshot.empty,
            };
            set.insert([row, col]);
        }
        snapshot
    }
}

/// Immutable copy of the population sets at one instant
///
/// Only ever taken between passes, so it never reflects a half-finished move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSnapshot {
    size: usize,
    high: BTreeSet<Position>,
    low: BTreeSet<Position>,
    empty: BTreeSet<Position>,
}

impl PartitionSnapshot {
    /// Side length of the board
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Cells held by high-status occupants
    pub const fn high(&self) -> &BTreeSet<Position> {
        &self.high
    }

    /// Cells held by low-status occupants
    pub const fn low(&self) -> &BTreeSet<Position> {
        &self.low
    }

    /// Unoccupied cells
    pub const fn empty(&self) -> &BTreeSet<Position> {
        &self.empty
    }

    /// Members of one group
    pub const fn group(&self, group: Group) -> &BTreeSet<Position> {
        match group {
            Group::High => &self.high,
            Group::Low => &self.low,
        }
    }

    /// Label at a position; off-board positions read as empty
    pub fn cell_at(&self, pos: Position) -> Cell {
        if self.high.contains(&pos) {
            Cell::High
        } else if self.low.contains(&pos) {
            Cell::Low
        } else {
            Cell::Empty
        }
    }
}

/// Place `population_size` occupants on a fresh `board_size` x `board_size` board
///
/// All board positions are shuffled uniformly; the first half (rounded down) become
/// high-status, the rest of the population low-status, and every other cell empty.
///
/// # Errors
///
/// Returns `InvalidParameter` if the cell count of the board overflows `usize`, and
/// `InvalidConfiguration` if `population_size` exceeds the number of cells
pub fn initialize<R: Rng + ?Sized>(
    board_size: usize,
    population_size: usize,
    rng: &mut R,
) -> Result<Partition> {
    let capacity = board_size.checked_mul(board_size).ok_or_else(|| {
        invalid_parameter("board_size", &board_size, &"cell count overflows usize")
    })?;
    if population_size > capacity {
        return Err(SimulationError::InvalidConfiguration {
            population_size,
            capacity,
        });
    }

    let mut positions: Vec<Position> = (0..board_size)
        .flat_map(|row| (0..board_size).map(move |col| [row, col]))
        .collect();
    positions.shuffle(rng);

    let high_count = population_size / 2;
    let (high, rest) = positions.split_at(high_count);
    let low = rest.get(..population_size - high_count).unwrap_or(rest);

    Ok(Partition::from_members(board_size, high, low))
}
