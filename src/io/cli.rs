//! Command-line interface for interactive runs and batch parameter sweeps

use crate::algorithm::convergence::RunState;
use crate::algorithm::editor::Edit;
use crate::algorithm::simulation::{Simulation, SimulationConfig};
use crate::algorithm::tolerance::Tolerances;
use crate::analysis::satisfaction::SatisfactionSeries;
use crate::io::configuration::{
    ANIMATION_IMAGE_SIZE, BATCH_CELL_PIXELS, BATCH_ITERATION_CAP, BATCH_POPULATION_END,
    BATCH_POPULATION_START, BATCH_POPULATION_STEP, BATCH_REPEATS, BATCH_TOLERANCE_STEPS,
    BOARD_SIZE, DEFAULT_OUTPUT_DIR, DEFAULT_POPULATION, DEFAULT_SEARCH_RADIUS, DEFAULT_SEED,
    DEFAULT_TOLERANCE, GIF_FRAME_DELAY_MS, INTERACTIVE_ITERATION_CAP, RUN_SEED_STRIDE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_snapshot_as_png;
use crate::io::progress::ProgressManager;
use crate::io::report::RunReport;
use crate::io::visualization::FrameCapture;
use crate::spatial::grid::Group;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "schelling")]
#[command(
    author,
    version,
    about = "Simulate residential segregation with a Schelling relocation rule"
)]
/// Command-line arguments for the segregation simulator
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Random seed for reproducible runs
    #[arg(short, long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Side length of the square board
    #[arg(short, long, global = true, default_value_t = BOARD_SIZE)]
    pub board_size: usize,

    /// Chebyshev radius searched for empty cells when relocating
    #[arg(short = 'R', long, global = true, default_value_t = DEFAULT_SEARCH_RADIUS)]
    pub search_radius: usize,

    /// Directory receiving exported files
    #[arg(short, long, global = true, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log run milestones
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Animate one run to convergence, then apply scripted edits
    Run(RunArgs),
    /// Sweep population sizes and tolerances, saving each final board
    Batch(BatchArgs),
}

/// Arguments of the `run` subcommand
#[derive(Args)]
pub struct RunArgs {
    /// Total occupants placed on the board
    #[arg(short, long, default_value_t = DEFAULT_POPULATION)]
    pub population: usize,

    /// Maximum dissimilar-neighbour fraction tolerated by high-status occupants
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance_high: f64,

    /// Maximum dissimilar-neighbour fraction tolerated by low-status occupants
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance_low: f64,

    /// Maximum passes before stopping
    #[arg(short, long, default_value_t = INTERACTIVE_ITERATION_CAP)]
    pub iterations: usize,

    /// Edit applied after convergence, each followed by one pass (repeatable)
    #[arg(short, long, value_enum)]
    pub edit: Vec<EditArg>,
}

/// Arguments of the `batch` subcommand
#[derive(Args)]
pub struct BatchArgs {
    /// Runs per population and tolerance pair
    #[arg(short, long, default_value_t = BATCH_REPEATS)]
    pub repeats: usize,

    /// Maximum passes per run
    #[arg(short, long, default_value_t = BATCH_ITERATION_CAP)]
    pub iterations: usize,

    /// Regenerate images even if they already exist
    #[arg(short, long)]
    pub no_skip: bool,
}

/// Population edit accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EditArg {
    /// Add one high-status occupant
    AddHigh,
    /// Remove one high-status occupant
    RemoveHigh,
    /// Add one low-status occupant
    AddLow,
    /// Remove one low-status occupant
    RemoveLow,
}

impl From<EditArg> for Edit {
    fn from(arg: EditArg) -> Self {
        match arg {
            EditArg::AddHigh => Self::Add(Group::High),
            EditArg::RemoveHigh => Self::Remove(Group::High),
            EditArg::AddLow => Self::Add(Group::Low),
            EditArg::RemoveLow => Self::Remove(Group::Low),
        }
    }
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter when `RUST_LOG` is unset
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose { "info" } else { "warn" }
    }
}

impl BatchArgs {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }
}

/// One point of the batch parameter sweep
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchJob {
    /// Occupants placed on the board
    pub population: usize,
    /// Tolerance shared by both groups
    pub tolerance: f64,
    /// Repeat number within this population and tolerance pair
    pub repeat: usize,
    /// Seed of this run
    pub seed: u64,
}

impl BatchJob {
    /// Image file name for this run
    pub fn file_name(&self) -> String {
        format!(
            "image_{}_high{:?}_low{:?}_num{}.png",
            self.population, self.tolerance, self.tolerance, self.repeat
        )
    }
}

/// Enumerate the batch sweep in output order
///
/// Populations run from `BATCH_POPULATION_START` to `BATCH_POPULATION_END` and
/// tolerances from 1/8 to 8/8. Populations that do not fit on a board of
/// `capacity` cells are left out. Seeds are derived from `base_seed` and the
/// position of the run in the full sweep, so skipping a run does not shift the
/// seeds of the others.
pub fn batch_jobs(base_seed: u64, repeats: usize, capacity: usize) -> Vec<BatchJob> {
    let tolerances: Vec<f64> = (1..=BATCH_TOLERANCE_STEPS)
        .map(|k| f64::from(k) / f64::from(BATCH_TOLERANCE_STEPS))
        .collect();

    let mut jobs = Vec::new();
    let mut run_index: u64 = 0;
    for population in
        (BATCH_POPULATION_START..=BATCH_POPULATION_END).step_by(BATCH_POPULATION_STEP)
    {
        for &tolerance in &tolerances {
            for repeat in 0..repeats {
                if population <= capacity {
                    jobs.push(BatchJob {
                        population,
                        tolerance,
                        repeat,
                        seed: base_seed.wrapping_add(run_index.wrapping_mul(RUN_SEED_STRIDE)),
                    });
                }
                run_index += 1;
            }
        }
    }
    jobs
}

/// Executes the selected subcommand with progress tracking
pub struct CommandRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or an export fails
    pub fn process(&mut self) -> Result<()> {
        match &self.cli.command {
            Command::Run(args) => {
                let config = SimulationConfig {
                    board_size: self.cli.board_size,
                    population_size: args.population,
                    tolerances: Tolerances {
                        high: args.tolerance_high,
                        low: args.tolerance_low,
                    },
                    search_radius: self.cli.search_radius,
                };
                let edits: Vec<Edit> = args.edit.iter().map(|&arg| arg.into()).collect();
                let iteration_cap = args.iterations;
                self.process_run(config, iteration_cap, &edits)
            }
            Command::Batch(args) => {
                let (repeats, iterations, skip) =
                    (args.repeats, args.iterations, args.skip_existing());
                self.process_batch(repeats, iterations, skip)
            }
        }
    }

    fn process_run(
        &mut self,
        config: SimulationConfig,
        iteration_cap: usize,
        edits: &[Edit],
    ) -> Result<()> {
        let start_time = Instant::now();
        let seed = self.cli.seed;
        let mut simulation = Simulation::new(config, seed)?;

        let board_pixels = u32::try_from(config.board_size).unwrap_or(u32::MAX);
        let mut frames = FrameCapture::new(
            (ANIMATION_IMAGE_SIZE / board_pixels).max(1),
            GIF_FRAME_DELAY_MS,
        );
        let mut series = SatisfactionSeries::new();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_run(run_label(&config), iteration_cap);
        }

        let mut run = simulation.run_to_convergence(iteration_cap);
        for report in run.by_ref() {
            frames.record(&report.snapshot)?;
            series.record(
                report.iteration,
                report.satisfaction_high,
                report.satisfaction_low,
            );
            if let Some(ref pm) = self.progress_manager {
                pm.update_iteration(
                    report.iteration + 1,
                    report.satisfaction_high,
                    report.satisfaction_low,
                );
            }
        }
        let (state, iterations) = (run.state(), run.iterations());

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_run(format!("{state:?} after {iterations} passes"));
        }

        let mut iteration = iterations;
        for &edit in edits {
            if !simulation.edit(edit) {
                continue;
            }
            frames.record(&simulation.snapshot())?;
            series.record(
                iteration,
                simulation.satisfaction(Group::High),
                simulation.satisfaction(Group::Low),
            );
            iteration += 1;
        }

        let stem = run_stem(&config);
        let animation_path = self.cli.output.join(format!("animation_{stem}.gif"));
        let final_path = self.cli.output.join(format!("final_{stem}.png"));
        let report_path = self.cli.output.join(format!("satisfaction_{stem}.json"));

        frames.export_gif(&animation_path)?;
        export_snapshot_as_png(
            &simulation.snapshot(),
            (ANIMATION_IMAGE_SIZE / board_pixels).max(1),
            &final_path,
        )?;
        RunReport::new(&config, seed, state, iterations, &series).export_json(&report_path)?;

        info!(
            ?state,
            iterations,
            edits = edits.len(),
            applied = iteration - iterations,
            frames = frames.frame_count(),
            elapsed_ms = start_time.elapsed().as_millis(),
            animation = %animation_path.display(),
            "run exported"
        );

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn process_batch(&mut self, repeats: usize, iteration_cap: usize, skip: bool) -> Result<()> {
        let capacity = self
            .cli
            .board_size
            .checked_mul(self.cli.board_size)
            .ok_or_else(|| {
                invalid_parameter(
                    "board_size",
                    &self.cli.board_size,
                    &"cell count overflows usize",
                )
            })?;
        let jobs = batch_jobs(self.cli.seed, repeats, capacity);

        if jobs.is_empty() {
            return Err(invalid_parameter(
                "board_size",
                &self.cli.board_size,
                &"no batch population fits on the board",
            ));
        }
        if BATCH_POPULATION_END > capacity {
            warn!(
                capacity,
                "populations larger than the board are left out of the sweep"
            );
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize_batch(jobs.len());
        }

        let mut converged = 0usize;
        let mut skipped = 0usize;
        for job in &jobs {
            let output_path = self.cli.output.join(job.file_name());

            if let Some(ref pm) = self.progress_manager {
                pm.set_batch_message(format!(
                    "population {} tolerance {:?}",
                    job.population, job.tolerance
                ));
            }

            if skip && output_path.exists() {
                skipped += 1;
            } else if self.process_batch_job(job, iteration_cap, &output_path)? {
                converged += 1;
            }

            if let Some(ref pm) = self.progress_manager {
                pm.complete_batch_run();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        info!(
            runs = jobs.len(),
            converged,
            skipped,
            output = %self.cli.output.display(),
            "batch complete"
        );

        Ok(())
    }

    // Returns whether the run converged within the cap
    fn process_batch_job(
        &self,
        job: &BatchJob,
        iteration_cap: usize,
        output_path: &Path,
    ) -> Result<bool> {
        let config = SimulationConfig {
            board_size: self.cli.board_size,
            population_size: job.population,
            tolerances: Tolerances::uniform(job.tolerance),
            search_radius: self.cli.search_radius,
        };
        let mut simulation = Simulation::new(config, job.seed)?;
        let outcome = simulation.converge(iteration_cap);
        export_snapshot_as_png(&simulation.snapshot(), BATCH_CELL_PIXELS, output_path)?;

        Ok(outcome.state == RunState::Converged)
    }
}

fn run_stem(config: &SimulationConfig) -> String {
    format!(
        "{}_high{:?}_low{:?}",
        config.population_size, config.tolerances.high, config.tolerances.low
    )
}

fn run_label(config: &SimulationConfig) -> String {
    format!(
        "population {} tolerance {:?}/{:?}",
        config.population_size, config.tolerances.high, config.tolerances.low
    )
}
