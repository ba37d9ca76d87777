//! Measurements taken between passes

/// Satisfaction percentages and their per-pass history
pub mod satisfaction;
