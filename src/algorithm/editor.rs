//! Single-occupant population edits

use rand::Rng;

use crate::spatial::grid::{Cell, Group, Partition, Position};

/// A single population edit requested from outside the convergence loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Place one occupant of the group on a random empty cell
    Add(Group),
    /// Vacate one random cell held by the group
    Remove(Group),
}

fn pick_random<R: Rng + ?Sized>(positions: &[Position], rng: &mut R) -> Option<Position> {
    if positions.is_empty() {
        return None;
    }
    positions.get(rng.random_range(0..positions.len())).copied()
}

/// Move one uniformly random empty cell into `group`
///
/// Returns false and changes nothing when the board is full.
pub fn add_occupant<R: Rng + ?Sized>(partition: &mut Partition, group: Group, rng: &mut R) -> bool {
    let Some(pos) = pick_random(&partition.members(Cell::Empty), rng) else {
        return false;
    };
    partition.place(pos, group.cell()).is_some()
}

/// Move one uniformly random member of `group` into the empty set
///
/// Returns false and changes nothing when the group has no members.
pub fn remove_occupant<R: Rng + ?Sized>(
    partition: &mut Partition,
    group: Group,
    rng: &mut R,
) -> bool {
    let Some(pos) = pick_random(&partition.members(group.cell()), rng) else {
        return false;
    };
    partition.place(pos, Cell::Empty).is_some()
}

/// Apply an edit to the partition
pub fn apply_edit<R: Rng + ?Sized>(partition: &mut Partition, edit: Edit, rng: &mut R) -> bool {
    match edit {
        Edit::Add(group) => add_occupant(partition, group, rng),
        Edit::Remove(group) => remove_occupant(partition, group, rng),
    }
}
