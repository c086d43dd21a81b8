//! Analysis parameters and one-shot path summaries

use crate::{DEFAULT_SPLIT_METRES, Path, Split};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Duration;

/// Configuration for path analysis
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Distance between the boundaries reported by [`Path::interval_splits`], in metres.
    /// Default: 1000
    pub interval_metres: f64,
    /// Threshold of the [`SplitSeries`](crate::SplitSeries), in metres.
    /// Default: 1000
    pub split_threshold_metres: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_metres: DEFAULT_SPLIT_METRES,
            split_threshold_metres: DEFAULT_SPLIT_METRES,
        }
    }
}

/// Information about a path
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathInfo {
    /// Number of locations
    pub point_count: usize,
    /// Total length in metres
    pub length_metres: f64,
    /// Total ascent in metres
    pub climb_metres: f64,
    /// Total descent in metres (non-positive)
    pub descent_metres: f64,
    /// Time from the first to the last fix
    pub elapsed: Duration,
    /// Cumulative times at each interval boundary
    pub interval_splits: Vec<Duration>,
    /// Threshold-triggered splits
    pub series: Vec<Split>,
}

impl Path {
    /// Compute every analytic of the path at once
    pub fn info(&self, config: &Config) -> PathInfo {
        #[cfg(feature = "profiling")]
        profiling::scope!("path::info");

        PathInfo {
            point_count: self.len(),
            length_metres: self.length(),
            climb_metres: self.climb(),
            descent_metres: self.descent(),
            elapsed: self.elapsed(),
            interval_splits: self.interval_splits(config.interval_metres),
            series: self.split_series(config.split_threshold_metres).collect(),
        }
    }
}
