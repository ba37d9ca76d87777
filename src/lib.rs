//! Schelling-style residential segregation on a square grid
//!
//! Two populations relocate away from cells where their share of dissimilar
//! neighbours exceeds a tolerance threshold, until no occupant moves or an
//! iteration budget runs out.

#![forbid(unsafe_code)]

/// Relocation, convergence, population edits and the simulation owner
pub mod algorithm;
/// Satisfaction measurement between passes
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Board partition and neighbourhood utilities
pub mod spatial;

pub use algorithm::simulation::{Simulation, SimulationConfig};
pub use io::error::{Result, SimulationError};
pub use spatial::{Cell, Group, Partition, PartitionSnapshot, Position};
