/// Command-line interface and subcommand execution
pub mod cli;
/// Simulation constants and defaults
pub mod configuration;
/// Error types for simulation and export operations
pub mod error;
/// PNG rendering of board snapshots
pub mod image;
/// Progress bars for runs and batch sweeps
pub mod progress;
/// JSON run reports
pub mod report;
/// GIF animation of captured snapshots
pub mod visualization;
