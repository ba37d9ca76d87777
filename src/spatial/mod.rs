//! Spatial data structures for the segregation board
//!
//! This module contains spatial-related functionality including:
//! - The three-way board partition and its initializer
//! - Moore neighbourhood counting and search windows

/// Board partition, snapshots and population initialization
pub mod grid;
/// Neighbour counting and Chebyshev search windows
pub mod neighborhood;

pub use grid::{Cell, Group, Partition, PartitionSnapshot, Position};
