//! Simulation owner and its runtime configuration

use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, warn};

use crate::algorithm::convergence::{Convergence, RunOutcome};
use crate::algorithm::editor::{Edit, apply_edit};
use crate::algorithm::relocation::{PassSummary, relocate_pass};
use crate::algorithm::tolerance::Tolerances;
use crate::analysis::satisfaction::satisfaction_percent;
use crate::io::configuration::{
    BOARD_SIZE, DEFAULT_POPULATION, DEFAULT_SEARCH_RADIUS, DEFAULT_TOLERANCE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{Group, Partition, PartitionSnapshot, initialize};

/// Parameters fixed for the lifetime of a simulation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Total occupants placed at initialization
    pub population_size: usize,
    /// Per-group tolerance thresholds
    pub tolerances: Tolerances,
    /// Chebyshev radius searched for empty cells
    pub search_radius: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            population_size: DEFAULT_POPULATION,
            tolerances: Tolerances::uniform(DEFAULT_TOLERANCE),
            search_radius: DEFAULT_SEARCH_RADIUS,
        }
    }
}

impl SimulationConfig {
    /// Check parameter ranges
    ///
    /// Population capacity is checked by initialization itself.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the board is empty or too large to index, the
    /// search radius is zero, or a tolerance lies outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(invalid_parameter(
                "board_size",
                &self.board_size,
                &"board must have at least one cell",
            ));
        }
        if self.board_size.checked_mul(self.board_size).is_none() {
            return Err(invalid_parameter(
                "board_size",
                &self.board_size,
                &"cell count overflows usize",
            ));
        }
        if self.search_radius == 0 {
            return Err(invalid_parameter(
                "search_radius",
                &self.search_radius,
                &"search radius must be at least 1",
            ));
        }
        for (parameter, value) in [
            ("tolerance_high", self.tolerances.high),
            ("tolerance_low", self.tolerances.low),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"tolerance must lie within [0, 1]",
                ));
            }
        }
        Ok(())
    }
}

/// Owner of one simulation run
///
/// All mutation goes through `&mut self`, so a convergence run and the population
/// editor can never act on the same board at once.
pub struct Simulation {
    config: SimulationConfig,
    partition: Partition,
    rng: StdRng,
}

impl Simulation {
    /// Validate the configuration and place the initial population
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for out-of-range parameters and
    /// `InvalidConfiguration` if the population does not fit on the board
    pub fn new(config: SimulationConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let partition = initialize(config.board_size, config.population_size, &mut rng)?;

        info!(
            board_size = config.board_size,
            population = config.population_size,
            high = partition.count(Group::High.cell()),
            low = partition.count(Group::Low.cell()),
            seed,
            "simulation initialized"
        );

        Ok(Self {
            config,
            partition,
            rng,
        })
    }

    /// Wrap an existing partition
    ///
    /// The board size of `config` is taken from the partition.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for out-of-range tolerances or search radius
    pub fn from_partition(
        mut config: SimulationConfig,
        partition: Partition,
        seed: u64,
    ) -> Result<Self> {
        config.board_size = partition.size();
        config.population_size = partition.occupied();
        config.validate()?;
        Ok(Self {
            config,
            partition,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Parameters of this run
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current board
    pub const fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Immutable copy of the current population sets
    pub fn snapshot(&self) -> PartitionSnapshot {
        self.partition.snapshot()
    }

    /// Run exactly one relocation pass
    pub fn relocate_pass(&mut self) -> PassSummary {
        relocate_pass(
            &mut self.partition,
            self.config.tolerances,
            self.config.search_radius,
        )
    }

    /// Lazily run passes until convergence or `iteration_cap` passes
    pub fn run_to_convergence(&mut self, iteration_cap: usize) -> Convergence<'_> {
        Convergence::new(self, iteration_cap)
    }

    /// Run to a terminal state without observing intermediate passes
    pub fn converge(&mut self, iteration_cap: usize) -> RunOutcome {
        self.run_to_convergence(iteration_cap).finish()
    }

    /// Percent of a group currently satisfied
    pub fn satisfaction(&self, group: Group) -> u8 {
        satisfaction_percent(
            &self.partition,
            &self.partition.members(group.cell()),
            self.config.tolerances.for_group(group),
            group,
        )
    }

    /// Add one occupant of `group` on a random empty cell, then run one pass
    pub fn add_occupant(&mut self, group: Group) -> bool {
        self.edit(Edit::Add(group))
    }

    /// Remove one random occupant of `group`, then run one pass
    pub fn remove_occupant(&mut self, group: Group) -> bool {
        self.edit(Edit::Remove(group))
    }

    /// Apply an edit and let the neighbourhood react with a single pass
    ///
    /// A rejected edit leaves the board untouched and runs no pass.
    pub fn edit(&mut self, edit: Edit) -> bool {
        if !apply_edit(&mut self.partition, edit, &mut self.rng) {
            warn!(?edit, "population edit had no effect");
            return false;
        }
        let summary = self.relocate_pass();
        info!(?edit, moved = summary.moved(), "population edit applied");
        true
    }
}
