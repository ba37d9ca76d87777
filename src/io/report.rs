//! JSON export of run parameters and satisfaction history

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::algorithm::convergence::RunState;
use crate::algorithm::simulation::SimulationConfig;
use crate::analysis::satisfaction::SatisfactionSeries;
use crate::io::error::{Result, SimulationError, ensure_parent_dir};

/// Summary of one interactive run
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// Side length of the board
    pub board_size: usize,
    /// Occupants placed at initialization
    pub population_size: usize,
    /// Tolerance of high-status occupants
    pub tolerance_high: f64,
    /// Tolerance of low-status occupants
    pub tolerance_low: f64,
    /// Chebyshev radius searched when relocating
    pub search_radius: usize,
    /// Seed of the run
    pub seed: u64,
    /// Terminal state of the convergence loop
    pub state: RunState,
    /// Passes executed by the convergence loop
    pub iterations: usize,
    /// Satisfaction after each pass, edits included
    pub satisfaction: &'a SatisfactionSeries,
}

impl<'a> RunReport<'a> {
    /// Assemble a report from a run's configuration and results
    pub const fn new(
        config: &SimulationConfig,
        seed: u64,
        state: RunState,
        iterations: usize,
        satisfaction: &'a SatisfactionSeries,
    ) -> Self {
        Self {
            board_size: config.board_size,
            population_size: config.population_size,
            tolerance_high: config.tolerances.high,
            tolerance_low: config.tolerances.low,
            search_radius: config.search_radius,
            seed,
            state,
            iterations,
            satisfaction,
        }
    }

    /// Write the report as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written, or serialization fails
    pub fn export_json(&self, output_path: &Path) -> Result<()> {
        ensure_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| SimulationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;
        let mut writer = std::io::BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, self).map_err(|e| {
            SimulationError::Serialization {
                path: output_path.to_path_buf(),
                source: e,
            }
        })?;
        writer.flush().map_err(|e| SimulationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "write file",
            source: e,
        })?;

        Ok(())
    }
}
