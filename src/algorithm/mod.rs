/// Convergence driver and per-pass reports
pub mod convergence;
/// Single-occupant add and remove edits
pub mod editor;
/// Relocation pass and candidate search
pub mod relocation;
/// Simulation owner and runtime configuration
pub mod simulation;
/// Edge-corrected satisfaction predicate
pub mod tolerance;
