//! Share of a population content with its neighbourhood

use serde::Serialize;

use crate::algorithm::tolerance::is_satisfied;
use crate::spatial::grid::{Group, Partition, Position};

/// Percent of `members` satisfied as occupants of `group`, rounded to nearest
///
/// Halfway values round to even. An empty member list yields 0.
pub fn satisfaction_percent(
    partition: &Partition,
    members: &[Position],
    tolerance: f64,
    group: Group,
) -> u8 {
    if members.is_empty() {
        return 0;
    }

    let satisfied = members
        .iter()
        .filter(|&&pos| is_satisfied(partition, pos, tolerance, group))
        .count();

    let percent = satisfied as f64 / members.len() as f64 * 100.0;
    percent.round_ties_even().clamp(0.0, 100.0) as u8
}

/// Satisfaction of both groups after one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SatisfactionSample {
    /// Zero-based pass index
    pub iteration: usize,
    /// Percent of high-status occupants satisfied
    pub high: u8,
    /// Percent of low-status occupants satisfied
    pub low: u8,
}

/// Satisfaction history of a run, as plotted by charting collaborators
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SatisfactionSeries {
    samples: Vec<SatisfactionSample>,
}

impl SatisfactionSeries {
    /// Create an empty series
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Append one observation
    pub fn record(&mut self, iteration: usize, high: u8, low: u8) {
        self.samples.push(SatisfactionSample {
            iteration,
            high,
            low,
        });
    }

    /// Recorded observations in order
    pub fn samples(&self) -> &[SatisfactionSample] {
        &self.samples
    }

    /// Most recent observation
    pub fn last(&self) -> Option<&SatisfactionSample> {
        self.samples.last()
    }

    /// Number of observations
    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether nothing has been recorded
    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
