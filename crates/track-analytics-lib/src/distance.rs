//! Great-circle distance and altitude differences between locations
//!
//! Distances use the haversine formula on a sphere:
//!
//! ```text
//! a = sin²(Δφ/2) + cos(φ1)·cos(φ2)·sin²(Δλ/2)
//! c = 2·atan2(√a, √(1−a))
//! d = R·c
//! ```
//!
//! where φ is latitude and λ longitude in radians, and R is [`EARTH_RADIUS_METRES`].
//! Altitude plays no part in the distance; it only feeds the climb/descent helpers.

use crate::Location;

/// Mean radius of the earth in metres
pub const EARTH_RADIUS_METRES: f64 = 6_371_000.0;

/// Locations closer than this (1 millimetre) compare equal
pub const DISTANCE_TOLERANCE_METRES: f64 = 0.001;

/// Calculate the haversine distance between two locations in metres
#[inline]
pub fn haversine(p1: &Location, p2: &Location) -> f64 {
    let lat1 = p1.latitude();
    let lat2 = p2.latitude();
    let delta_lat = lat1 - lat2;
    let delta_lon = p1.longitude() - p2.longitude();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METRES * c
}

/// Altitude gained going from `from` to `to` (negative when going down)
#[inline]
pub fn altitude_change(from: &Location, to: &Location) -> f64 {
    to.altitude() - from.altitude()
}

/// Positive part of [`altitude_change`]
#[inline]
pub fn ascent(from: &Location, to: &Location) -> f64 {
    altitude_change(from, to).max(0.0)
}

/// Negative part of [`altitude_change`]
#[inline]
pub fn descent(from: &Location, to: &Location) -> f64 {
    altitude_change(from, to).min(0.0)
}
