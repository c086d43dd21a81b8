//! Path storage and analytics module
//!
//! This module provides the `Path` struct: an ordered set of locations in traversal
//! order, with length, climb, descent and cumulative split computations.
//!
//! Nothing is cached. Every analytic re-walks the points, so a path can keep growing
//! between calls without any invalidation step. Callers that query the same path many
//! times should keep the results themselves.

use crate::distance::{self, haversine};
use crate::pairfold::{pair_fold, pair_sum};
use crate::split::elapsed_between;
use crate::{Location, Split, SplitSeries};
use std::ops::Index;
use time::Duration;

/// An ordered set of locations
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Location>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Path {
    /// Create an empty path
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a location at the end of the path
    #[inline]
    pub fn push(&mut self, location: Location) {
        self.points.push(location);
    }

    /// Append every location of `other`, leaving it empty
    pub fn append(&mut self, other: &mut Path) {
        self.points.append(&mut other.points);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a location by index
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Location> {
        self.points.get(index)
    }

    /// All locations in traversal order
    #[inline]
    pub fn points(&self) -> &[Location] {
        &self.points
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.points.iter()
    }

    /// How far did we go? Total great-circle length in metres.
    pub fn length(&self) -> f64 {
        pair_sum(&self.points, haversine)
    }

    /// How far did we climb? Sum of every altitude gain in metres.
    pub fn climb(&self) -> f64 {
        pair_sum(&self.points, distance::ascent)
    }

    /// How far did we descend? Sum of every altitude loss in metres, as a non-positive number.
    pub fn descent(&self) -> f64 {
        pair_sum(&self.points, distance::descent)
    }

    /// Time between the first and last fix, counting only pairs that both carry a timestamp
    pub fn elapsed(&self) -> Duration {
        pair_fold(&self.points, elapsed_between, |acc, d| acc + d, Duration::ZERO)
    }

    /// Cumulative time and distance at every point after the first
    ///
    /// Returns one [`Split`] per adjacent pair, holding the distance and time from the
    /// start of the path up to the second point of the pair. Recomputed on every call.
    pub fn splits(&self) -> Vec<Split> {
        #[cfg(feature = "profiling")]
        profiling::scope!("path::splits");

        let mut splits = Vec::with_capacity(self.points.len().saturating_sub(1));
        pair_fold(
            &self.points,
            |from, to| (haversine(from, to), elapsed_between(from, to)),
            |(total_distance, total_time), (distance, time)| {
                let total = (total_distance + distance, total_time + time);
                splits.push(Split::new(total.0, total.1));
                total
            },
            (0.0, Duration::ZERO),
        );
        splits
    }

    /// First cumulative split at or beyond `distance` metres
    ///
    /// Returns `None` when the path is shorter than `distance`.
    pub fn split_at_distance(&self, distance: f64) -> Option<Split> {
        self.splits().into_iter().find(|s| s.distance >= distance)
    }

    /// Time from the start at which `distance` metres were first reached
    ///
    /// Returns `Duration::ZERO` when the path is shorter than `distance`.
    pub fn split_time(&self, distance: f64) -> Duration {
        self.split_at_distance(distance)
            .map_or(Duration::ZERO, |split| split.time)
    }

    /// Cumulative split times at every multiple of `interval` metres
    ///
    /// Walks `k = 1, 2, ...` while `k < floor(length / interval)`, so the last complete
    /// interval is not reported. A 5.5 km path with a 1 km interval yields four times.
    pub fn interval_splits(&self, interval: f64) -> Vec<Duration> {
        (1..self.interval_count(interval))
            .map(|k| self.split_time(k as f64 * interval))
            .collect()
    }

    /// Same boundaries as [`Path::interval_splits`], but each entry is the time taken
    /// for that interval alone
    pub fn interval_splits_absolute(&self, interval: f64) -> Vec<Duration> {
        let mut last_time = Duration::ZERO;
        self.interval_splits(interval)
            .into_iter()
            .map(|time| {
                let interval_time = time - last_time;
                last_time = time;
                interval_time
            })
            .collect()
    }

    /// Start a lazy [`SplitSeries`] with the given threshold in metres
    #[inline]
    pub fn split_series(&self, threshold: f64) -> SplitSeries<'_> {
        SplitSeries::new(self, threshold)
    }

    /// Number of complete intervals along the path, `floor(length / interval)`
    fn interval_count(&self, interval: f64) -> u64 {
        if interval <= 0.0 || !interval.is_finite() {
            tracing::warn!("Ignoring non-positive split interval: {}", interval);
            return 0;
        }
        (self.length() / interval).floor() as u64
    }
}

impl From<Vec<Location>> for Path {
    fn from(points: Vec<Location>) -> Self {
        Self { points }
    }
}

impl FromIterator<Location> for Path {
    fn from_iter<T: IntoIterator<Item = Location>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Location> for Path {
    fn extend<T: IntoIterator<Item = Location>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}

impl Index<usize> for Path {
    type Output = Location;

    fn index(&self, index: usize) -> &Location {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
