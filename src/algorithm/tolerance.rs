//! Edge-corrected tolerance predicate
//!
//! Every cell is judged against eight notional neighbour slots. Slots that hold no
//! occupant, whether off the board or empty, are credited to the occupant's own
//! group, so boundary cells lean towards satisfaction.

use crate::io::configuration::NEIGHBOR_SLOTS;
use crate::spatial::grid::{Group, Partition, Position};
use crate::spatial::neighborhood::count_neighbors;

/// Per-group tolerance thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Maximum dissimilar fraction accepted by high-status occupants
    pub high: f64,
    /// Maximum dissimilar fraction accepted by low-status occupants
    pub low: f64,
}

impl Tolerances {
    /// Same threshold for both groups
    pub const fn uniform(tolerance: f64) -> Self {
        Self {
            high: tolerance,
            low: tolerance,
        }
    }

    /// Threshold applying to one group
    pub const fn for_group(&self, group: Group) -> f64 {
        match group {
            Group::High => self.high,
            Group::Low => self.low,
        }
    }
}

/// Neighbour slots around a cell after edge correction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborTally {
    /// Slots credited to the occupant's own group, imputed slots included
    pub similar: u8,
    /// Slots held by the other group
    pub dissimilar: u8,
}

impl NeighborTally {
    /// Tally the slots around `pos` from the point of view of `group`
    pub fn observe(partition: &Partition, pos: Position, group: Group) -> Self {
        let own = count_neighbors(partition, pos, group.cell());
        let other = count_neighbors(partition, pos, group.opposite().cell());
        let missing = NEIGHBOR_SLOTS.saturating_sub(own + other);

        Self {
            similar: own + missing,
            dissimilar: other,
        }
    }

    /// Share of the eight slots held by the other group
    pub fn dissimilar_fraction(&self) -> f64 {
        f64::from(self.dissimilar) / f64::from(NEIGHBOR_SLOTS)
    }
}

/// Whether an occupant of `group` at `pos` accepts its neighbourhood
pub fn is_satisfied(partition: &Partition, pos: Position, tolerance: f64, group: Group) -> bool {
    NeighborTally::observe(partition, pos, group).dissimilar_fraction() <= tolerance
}
