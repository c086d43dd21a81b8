//! Distance/time splits
//!
//! A [`Split`] pairs a cumulative distance with an elapsed time. [`SplitSeries`] walks a
//! [`Path`] once and emits a split every time the distance covered since the previous
//! split reaches a threshold.

use crate::pairfold::{Pairs, pairs};
use crate::{Location, Path};
use std::fmt;
use time::Duration;

/// Default distance between splits in metres
pub const DEFAULT_SPLIT_METRES: f64 = 1000.0;

/// A single (distance, time) record
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Split {
    /// Distance from the start of the path in metres
    pub distance: f64,
    /// Elapsed time, measured from the start or from the previous split
    pub time: Duration,
}

impl Split {
    pub fn new(distance: f64, time: Duration) -> Self {
        Self { distance, time }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Distance: {}\t\tTime: {}",
            self.distance as i64,
            format_duration(self.time)
        )
    }
}

/// Format a duration as `[-]H:MM:SS`, dropping sub-second precision
pub fn format_duration(duration: Duration) -> String {
    let sign = if duration.is_negative() { "-" } else { "" };
    let seconds = duration.whole_seconds().unsigned_abs();
    format!(
        "{sign}{}:{:02}:{:02}",
        seconds / 3600,
        seconds / 60 % 60,
        seconds % 60
    )
}

/// Time taken between two fixes
///
/// Zero when either fix has no timestamp. Negative when the clock went backwards.
#[inline]
pub(crate) fn elapsed_between(from: &Location, to: &Location) -> Duration {
    match (from.time(), to.time()) {
        (Some(start), Some(end)) => end - start,
        _ => Duration::ZERO,
    }
}

/// Lazy iterator over threshold-triggered splits of a [`Path`]
///
/// Each emitted split carries the cumulative distance at which it fired and the time
/// elapsed since the previous split (or since the start). A segment longer than the
/// threshold fires a single split; it is never subdivided.
#[derive(Debug, Clone)]
pub struct SplitSeries<'a> {
    pairs: Pairs<std::slice::Iter<'a, Location>>,
    threshold: f64,
    cumulative_distance: f64,
    cumulative_time: Duration,
    last_split_distance: f64,
    last_split_time: Duration,
}

impl<'a> SplitSeries<'a> {
    /// Start a new series over `path`
    ///
    /// # Arguments
    /// * `path` - Path to walk; fewer than two points produce no splits
    /// * `threshold` - Distance in metres that must be covered before each split fires.
    ///   A threshold that is not strictly positive and finite produces no splits.
    pub fn new(path: &'a Path, threshold: f64) -> Self {
        let points: &'a [Location] = if threshold > 0.0 && threshold.is_finite() {
            path.points()
        } else {
            tracing::warn!("Ignoring non-positive split threshold: {}", threshold);
            &[]
        };
        Self {
            pairs: pairs(points.iter()),
            threshold,
            cumulative_distance: 0.0,
            cumulative_time: Duration::ZERO,
            last_split_distance: 0.0,
            last_split_time: Duration::ZERO,
        }
    }

    /// Threshold in metres
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Iterator for SplitSeries<'_> {
    type Item = Split;

    fn next(&mut self) -> Option<Split> {
        for (from, to) in self.pairs.by_ref() {
            self.cumulative_distance += from.distance_to(to);
            self.cumulative_time += elapsed_between(from, to);

            if self.cumulative_distance - self.last_split_distance >= self.threshold {
                let split = Split::new(
                    self.cumulative_distance,
                    self.cumulative_time - self.last_split_time,
                );
                self.last_split_distance = self.cumulative_distance;
                self.last_split_time = self.cumulative_time;
                return Some(split);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.pairs.size_hint().1)
    }
}
