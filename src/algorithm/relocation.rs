//! Single relocation pass over both populations
//!
//! High-status occupants are processed first, then low-status ones. Each group's
//! members are listed before that group moves. Destinations were empty when the
//! list was taken, so every occupant is examined and moved at most once per pass.

use tracing::debug;

use crate::algorithm::tolerance::{Tolerances, is_satisfied};
use crate::spatial::grid::{Cell, Group, Partition, Position};
use crate::spatial::neighborhood::{chebyshev_window, count_neighbors};

/// Totals for one relocation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// High-status occupants that moved
    pub moved_high: usize,
    /// Low-status occupants that moved
    pub moved_low: usize,
    /// Dissatisfied occupants with no empty cell in reach
    pub stranded: usize,
}

impl PassSummary {
    /// Whether any occupant relocated
    pub const fn moved_any(&self) -> bool {
        self.moved_high + self.moved_low > 0
    }

    /// Total relocations across both groups
    pub const fn moved(&self) -> usize {
        self.moved_high + self.moved_low
    }

    const fn record_move(&mut self, group: Group) {
        match group {
            Group::High => self.moved_high += 1,
            Group::Low => self.moved_low += 1,
        }
    }
}

/// Empty cell chosen for a dissatisfied occupant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Destination cell
    pub position: Position,
    /// Opposite-group neighbours the occupant would have there
    pub opposite_neighbors: u8,
}

/// Pick the empty cell near `origin` with the fewest opposite-group neighbours
///
/// Candidates are scanned in row-major order within the Chebyshev window and only
/// a strictly lower score replaces the current best, so ties go to the earliest
/// cell. Scoring is read-only: the mover's own label never enters the opposite
/// count, so a candidate is scored as though the move had already happened.
/// Returns `None` when the window holds no empty cell.
pub fn best_candidate(
    partition: &Partition,
    origin: Position,
    group: Group,
    search_radius: usize,
) -> Option<Candidate> {
    let opposite = group.opposite().cell();
    let mut best: Option<Candidate> = None;

    for position in chebyshev_window(partition.size(), origin, search_radius) {
        if partition.cell(position) != Some(Cell::Empty) {
            continue;
        }
        let opposite_neighbors = count_neighbors(partition, position, opposite);
        if best.is_none_or(|current| opposite_neighbors < current.opposite_neighbors) {
            best = Some(Candidate {
                position,
                opposite_neighbors,
            });
        }
    }

    best
}

/// Run one pass, moving each dissatisfied occupant at most once
///
/// A dissatisfied occupant moves to its best candidate whenever one exists, even
/// if that cell is no better than where it stands.
pub fn relocate_pass(
    partition: &mut Partition,
    tolerances: Tolerances,
    search_radius: usize,
) -> PassSummary {
    let mut summary = PassSummary::default();

    for group in Group::ALL {
        let tolerance = tolerances.for_group(group);

        for origin in partition.members(group.cell()) {
            if is_satisfied(partition, origin, tolerance, group) {
                continue;
            }

            let Some(candidate) = best_candidate(partition, origin, group, search_radius) else {
                summary.stranded += 1;
                continue;
            };

            if partition.relocate(origin, candidate.position) {
                summary.record_move(group);
            }
        }
    }

    debug!(
        moved_high = summary.moved_high,
        moved_low = summary.moved_low,
        stranded = summary.stranded,
        "relocation pass complete"
    );

    summary
}
