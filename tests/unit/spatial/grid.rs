//! Tests for board partitioning, snapshots and population initialization

#[cfg(test)]
mod tests {
    use crate::assert_partition_invariant;
    use rand::{SeedableRng, rngs::StdRng};
    use schelling::SimulationError;
    use schelling::spatial::grid::{Cell, Group, Partition, initialize};

    // Tests four occupants split evenly on a 40x40 board
    // Verified by assigning the whole population to one group
    #[test]
    fn test_initialize_splits_population_in_half() {
        let mut rng = StdRng::seed_from_u64(1);
        let partition = initialize(40, 4, &mut rng).expect("population fits");

        assert_eq!(partition.count(Cell::High), 2);
        assert_eq!(partition.count(Cell::Low), 2);
        assert_eq!(partition.count(Cell::Empty), 1600 - 4);
        assert_partition_invariant(&partition.snapshot());
    }

    // Tests an odd population gives the extra occupant to the low-status group
    // Verified by rounding the high-status share up
    #[test]
    fn test_initialize_odd_population() {
        let mut rng = StdRng::seed_from_u64(2);
        let partition = initialize(10, 7, &mut rng).expect("population fits");

        assert_eq!(partition.count(Cell::High), 3);
        assert_eq!(partition.count(Cell::Low), 4);
        assert_eq!(partition.count(Cell::Empty), 93);
    }

    // Tests a population one larger than the board is rejected
    // Verified by comparing against capacity with >=
    #[test]
    fn test_initialize_rejects_overfull_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = initialize(40, 1601, &mut rng);

        match result {
            Err(SimulationError::InvalidConfiguration {
                population_size,
                capacity,
            }) => {
                assert_eq!(population_size, 1601);
                assert_eq!(capacity, 1600);
            }
            _ => unreachable!("Expected InvalidConfiguration"),
        }
    }

    // Tests a board whose cell count overflows is rejected instead of panicking
    // Verified by multiplying the board side unchecked
    #[test]
    fn test_initialize_rejects_overflowing_board() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = initialize(usize::MAX / 2, 1, &mut rng);

        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameter {
                parameter: "board_size",
                ..
            })
        ));
    }

    // Tests a population equal to the board size leaves no empty cell
    // Verified by rejecting populations equal to capacity
    #[test]
    fn test_initialize_full_board() {
        let mut rng = StdRng::seed_from_u64(4);
        let partition = initialize(6, 36, &mut rng).expect("population fits exactly");

        assert_eq!(partition.count(Cell::Empty), 0);
        assert_eq!(partition.occupied(), 36);
        assert_partition_invariant(&partition.snapshot());
    }

    // Tests identical seeds give identical boards
    // Verified by seeding from entropy
    #[test]
    fn test_initialize_is_reproducible() {
        let first = initialize(20, 250, &mut StdRng::seed_from_u64(99)).expect("fits");
        let second = initialize(20, 250, &mut StdRng::seed_from_u64(99)).expect("fits");
        let other = initialize(20, 250, &mut StdRng::seed_from_u64(100)).expect("fits");

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    // Tests explicit membership lists and out-of-board positions
    // Verified by letting the first assignment win
    #[test]
    fn test_from_members_last_assignment_wins() {
        let partition = Partition::from_members(3, &[[0, 0], [1, 1], [7, 7]], &[[1, 1]]);

        assert_eq!(partition.cell([0, 0]), Some(Cell::High));
        assert_eq!(partition.cell([1, 1]), Some(Cell::Low));
        assert_eq!(partition.cell([7, 7]), None);
        assert_eq!(partition.count(Cell::High), 1);
        assert_eq!(partition.count(Cell::Low), 1);
        assert_eq!(partition.count(Cell::Empty), 7);
        assert!(!partition.contains([3, 0]));
    }

    // Tests members are listed in row-major order
    // Verified by iterating column-major
    #[test]
    fn test_members_row_major_order() {
        let partition = Partition::from_members(4, &[[3, 0], [0, 3], [1, 2], [0, 1]], &[]);

        assert_eq!(
            partition.members(Cell::High),
            vec![[0, 1], [0, 3], [1, 2], [3, 0]]
        );
    }

    // Tests snapshots expose the three sets and per-cell labels
    // Verified by placing empty cells into the low-status set
    #[test]
    fn test_snapshot_sets() {
        let partition = Partition::from_members(2, &[[0, 0]], &[[1, 1]]);
        let snapshot = partition.snapshot();

        assert_eq!(snapshot.size(), 2);
        assert!(snapshot.high().contains(&[0, 0]));
        assert!(snapshot.group(Group::Low).contains(&[1, 1]));
        assert_eq!(snapshot.empty().len(), 2);
        assert_eq!(snapshot.cell_at([0, 0]), Cell::High);
        assert_eq!(snapshot.cell_at([1, 1]), Cell::Low);
        assert_eq!(snapshot.cell_at([0, 1]), Cell::Empty);
        assert_partition_invariant(&snapshot);
    }

    // Tests group helpers map between groups and labels
    // Verified by returning the same group from opposite
    #[test]
    fn test_group_helpers() {
        assert_eq!(Group::High.opposite(), Group::Low);
        assert_eq!(Group::Low.opposite(), Group::High);
        assert_eq!(Group::High.cell(), Cell::High);
        assert_eq!(Cell::Low.group(), Some(Group::Low));
        assert_eq!(Cell::Empty.group(), None);
    }
}
