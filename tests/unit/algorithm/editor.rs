//! Tests for single-occupant add and remove edits

#[cfg(test)]
mod tests {
    use crate::assert_partition_invariant;
    use rand::{SeedableRng, rngs::StdRng};
    use schelling::algorithm::editor::{Edit, add_occupant, apply_edit, remove_occupant};
    use schelling::spatial::grid::{Cell, Group, Partition};

    // Tests adding moves exactly one cell from empty into the group
    // Verified by inserting without removing from the empty set
    #[test]
    fn test_add_occupant_conserves_cells() {
        let mut partition = Partition::from_members(5, &[[0, 0]], &[[4, 4]]);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(add_occupant(&mut partition, Group::Low, &mut rng));
        assert_eq!(partition.count(Cell::Low), 2);
        assert_eq!(partition.count(Cell::High), 1);
        assert_eq!(partition.count(Cell::Empty), 22);
        assert_partition_invariant(&partition.snapshot());
    }

    // Tests removing moves exactly one member into the empty set
    // Verified by removing from the wrong group
    #[test]
    fn test_remove_occupant_conserves_cells() {
        let mut partition = Partition::from_members(5, &[[0, 0], [1, 1]], &[[4, 4]]);
        let mut rng = StdRng::seed_from_u64(2);

        assert!(remove_occupant(&mut partition, Group::High, &mut rng));
        assert_eq!(partition.count(Cell::High), 1);
        assert_eq!(partition.count(Cell::Low), 1);
        assert_eq!(partition.count(Cell::Empty), 23);
        assert_eq!(partition.cell([4, 4]), Some(Cell::Low));
    }

    // Tests adding to a full board is rejected without changes
    // Verified by skipping the empty-set check
    #[test]
    fn test_add_occupant_on_full_board() {
        let mut partition = Partition::from_members(2, &[[0, 0], [0, 1]], &[[1, 0], [1, 1]]);
        let before = partition.clone();
        let mut rng = StdRng::seed_from_u64(3);

        assert!(!add_occupant(&mut partition, Group::High, &mut rng));
        assert_eq!(partition, before);
    }

    // Tests removing from an empty group is rejected without changes
    // Verified by removing a member of the other group instead
    #[test]
    fn test_remove_occupant_from_empty_group() {
        let mut partition = Partition::from_members(4, &[], &[[2, 2]]);
        let before = partition.clone();
        let mut rng = StdRng::seed_from_u64(4);

        assert!(!remove_occupant(&mut partition, Group::High, &mut rng));
        assert_eq!(partition, before);
    }

    // Tests edits dispatch to the matching operation
    // Verified by treating every edit as an addition
    #[test]
    fn test_apply_edit_dispatch() {
        let mut partition = Partition::from_members(3, &[[1, 1]], &[]);
        let mut rng = StdRng::seed_from_u64(5);

        assert!(apply_edit(&mut partition, Edit::Remove(Group::High), &mut rng));
        assert_eq!(partition.occupied(), 0);
        assert!(apply_edit(&mut partition, Edit::Add(Group::Low), &mut rng));
        assert_eq!(partition.count(Cell::Low), 1);
        assert!(!apply_edit(&mut partition, Edit::Remove(Group::High), &mut rng));
    }
}
