//! Track Analytics Library - Geodesic Math for GPS Tracks
//!
//! This library computes great-circle distances and derived analytics over an ordered
//! sequence of geographic fixes: total length, climb and descent, and distance-based
//! time splits. The earth is modelled as a sphere of radius [`EARTH_RADIUS_METRES`].
//!
//! # Architecture
//!
//! - **[`pairfold`]**: Generic reduction over adjacent pairs of a sequence
//! - **[`Location`]**: Validated geographic fix (radians internally, degrees at the edges)
//! - **[`distance`]**: Haversine distance and altitude-difference helpers
//! - **[`Path`]**: Ordered locations with length, climb, descent and cumulative splits
//! - **[`SplitSeries`]**: Lazy threshold-triggered splits over a [`Path`]
//! - **[`import`]**: GPX documents to [`Path`]
//!
//! # Performance Characteristics
//!
//! Every analytic is a single O(N) pass over the path, with the exception of
//! [`Path::interval_splits`] which looks up each interval boundary separately.
//! Nothing is cached: a [`Path`] can be extended at any time without invalidation.

pub mod distance;
pub mod import;
mod location;
pub mod pairfold;
mod path;
mod split;
mod summary;

// Public API exports
pub use distance::{DISTANCE_TOLERANCE_METRES, EARTH_RADIUS_METRES};
pub use location::{Hemisphere, Location};
pub use path::Path;
pub use split::{DEFAULT_SPLIT_METRES, Split, SplitSeries, format_duration};
pub use summary::{Config, PathInfo};

/// Error types for the analytics library
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("{value:.2} not between {min:.2} and {max:.2}")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("GPX parsing error: {0}")]
    GpxParse(#[from] gpx::errors::GpxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DataError>;
