//! Repeated relocation passes until a fixed point or the iteration cap

use serde::Serialize;
use tracing::info;

use crate::algorithm::simulation::Simulation;
use crate::spatial::grid::{Group, PartitionSnapshot};

/// Lifecycle of a convergence run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Passes remain to be run
    Running,
    /// A pass moved nobody
    Converged,
    /// The iteration cap was reached while occupants were still moving
    BudgetExhausted,
}

impl RunState {
    /// Whether no further passes will run
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Observation taken after one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationReport {
    /// Zero-based pass index
    pub iteration: usize,
    /// Board state after the pass
    pub snapshot: PartitionSnapshot,
    /// Percent of high-status occupants satisfied
    pub satisfaction_high: u8,
    /// Percent of low-status occupants satisfied
    pub satisfaction_low: u8,
    /// Occupants that moved during the pass
    pub moved: usize,
}

/// Final result of a run drained without observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Terminal state reached
    pub state: RunState,
    /// Passes executed
    pub iterations: usize,
}

/// Lazy, finite sequence of pass reports
///
/// Holds the simulation mutably for its whole life, so nothing else can edit the
/// board between passes. Each call to `next` runs exactly one pass; once a terminal
/// state is reached the sequence ends and cannot be restarted.
pub struct Convergence<'a> {
    simulation: &'a mut Simulation,
    iteration_cap: usize,
    iteration: usize,
    state: RunState,
}

impl<'a> Convergence<'a> {
    pub(crate) fn new(simulation: &'a mut Simulation, iteration_cap: usize) -> Self {
        let state = if iteration_cap == 0 {
            RunState::BudgetExhausted
        } else {
            RunState::Running
        };
        Self {
            simulation,
            iteration_cap,
            iteration: 0,
            state,
        }
    }

    /// Current lifecycle state
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Passes executed so far
    pub const fn iterations(&self) -> usize {
        self.iteration
    }

    /// Run one pass and advance the state machine
    ///
    /// Returns the number of occupants moved, or `None` once terminal.
    fn step(&mut self) -> Option<usize> {
        if self.state.is_terminal() {
            return None;
        }

        let summary = self.simulation.relocate_pass();
        self.iteration += 1;

        if !summary.moved_any() {
            self.state = RunState::Converged;
            info!(iterations = self.iteration, "population converged");
        } else if self.iteration >= self.iteration_cap {
            self.state = RunState::BudgetExhausted;
            info!(
                iterations = self.iteration,
                "iteration cap reached before convergence"
            );
        }

        Some(summary.moved())
    }

    /// Run every remaining pass without taking snapshots
    pub fn finish(mut self) -> RunOutcome {
        while self.step().is_some() {}
        RunOutcome {
            state: self.state,
            iterations: self.iteration,
        }
    }
}

impl Iterator for Convergence<'_> {
    type Item = IterationReport;

    fn next(&mut self) -> Option<Self::Item> {
        let iteration = self.iteration;
        let moved = self.step()?;

        Some(IterationReport {
            iteration,
            snapshot: self.simulation.snapshot(),
            satisfaction_high: self.simulation.satisfaction(Group::High),
            satisfaction_low: self.simulation.satisfaction(Group::Low),
            moved,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state.is_terminal() {
            (0, Some(0))
        } else {
            (1, Some(self.iteration_cap - self.iteration))
        }
    }
}

impl std::iter::FusedIterator for Convergence<'_> {}
