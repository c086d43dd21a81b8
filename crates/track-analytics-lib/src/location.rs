//! Validated geographic fixes
//!
//! A [`Location`] is built from degrees, validated, and stored in radians. It is an
//! immutable value: operations that "move" a location return a new one.

use crate::{DataError, Result, distance};
use std::f64::consts::PI;
use std::fmt;
use time::{Duration, OffsetDateTime};

/// Hemisphere of a latitude or longitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
            Hemisphere::East => "E",
            Hemisphere::West => "W",
        };
        f.write_str(letter)
    }
}

/// A location on the surface of the earth
///
/// Latitude and longitude are stored in radians. Equality is approximate: two
/// locations are equal when they are less than
/// [`DISTANCE_TOLERANCE_METRES`](crate::DISTANCE_TOLERANCE_METRES) apart. That relation
/// is not transitive (a == b and b == c does not imply a == c), so `Location` does not
/// implement `Eq` or `Hash`.
///
/// With the `serde` feature a location is (de)serialized in degrees and goes through
/// the same range checks as [`Location::with_details`].
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LocationRecord", into = "LocationRecord")
)]
pub struct Location {
    /// Latitude in radians, within [-π/2, π/2]
    latitude: f64,
    /// Longitude in radians, within [-π, π]
    longitude: f64,
    /// Altitude in metres
    altitude: f64,
    /// When the fix was recorded, if known
    time: Option<OffsetDateTime>,
}

/// Serialized form of a [`Location`], in degrees
#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct LocationRecord {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    altitude: f64,
    #[serde(default)]
    time: Option<OffsetDateTime>,
}

#[cfg(feature = "serde")]
impl TryFrom<LocationRecord> for Location {
    type Error = DataError;

    fn try_from(record: LocationRecord) -> Result<Self> {
        Self::with_details(record.latitude, record.longitude, record.altitude, record.time)
    }
}

#[cfg(feature = "serde")]
impl From<Location> for LocationRecord {
    fn from(location: Location) -> Self {
        Self {
            latitude: location.latitude_degrees(),
            longitude: location.longitude_degrees(),
            altitude: location.altitude,
            time: location.time,
        }
    }
}

/// Check `value` is within `[min, max]`
fn check_range(value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(DataError::OutOfRange { value, min, max })
    }
}

/// Check `value` is neither NaN nor infinite
fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DataError::NotFinite { name, value })
    }
}

impl Location {
    /// Create a location at sea level without a timestamp
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    ///
    /// # Returns
    /// The location, or [`DataError::OutOfRange`] naming the offending value
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Self::with_details(latitude, longitude, 0.0, None)
    }

    /// Create a location with every field set
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    /// * `altitude` - Altitude in metres
    /// * `time` - Timestamp of the fix, if any
    pub fn with_details(
        latitude: f64,
        longitude: f64,
        altitude: f64,
        time: Option<OffsetDateTime>,
    ) -> Result<Self> {
        check_range(latitude, -90.0, 90.0)?;
        check_range(longitude, -180.0, 180.0)?;

        Ok(Self {
            latitude: latitude.to_radians(),
            longitude: longitude.to_radians(),
            altitude,
            time,
        })
    }

    /// Copy of this location at another altitude
    #[must_use]
    pub fn with_altitude(&self, altitude: f64) -> Self {
        Self {
            altitude,
            ..self.clone()
        }
    }

    /// Copy of this location with another timestamp
    #[must_use]
    pub fn with_time(&self, time: Option<OffsetDateTime>) -> Self {
        Self {
            time,
            ..self.clone()
        }
    }

    /// Latitude in radians
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in radians
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in degrees
    #[inline]
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.to_degrees()
    }

    /// Longitude in degrees
    #[inline]
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.to_degrees()
    }

    /// Altitude in metres
    #[inline]
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// When the fix was recorded, if known
    #[inline]
    pub fn time(&self) -> Option<OffsetDateTime> {
        self.time
    }

    /// North for strictly positive latitudes, South otherwise (the equator is South)
    pub fn latitude_hemisphere(&self) -> Hemisphere {
        if self.latitude > 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    /// East for strictly positive longitudes, West otherwise (the prime meridian is West)
    pub fn longitude_hemisphere(&self) -> Hemisphere {
        if self.longitude > 0.0 {
            Hemisphere::East
        } else {
            Hemisphere::West
        }
    }

    /// Great-circle distance to `other` in metres
    #[inline]
    pub fn distance_to(&self, other: &Location) -> f64 {
        distance::haversine(self, other)
    }

    /// Travel along a great circle and return where we end up
    ///
    /// # Arguments
    /// * `heading` - Initial bearing in degrees, clockwise from north
    /// * `distance` - Distance travelled in metres
    /// * `elapsed` - Time taken, added to the timestamp when there is one
    ///
    /// # Returns
    /// A new location at the same altitude, or [`DataError::NotFinite`] when the
    /// heading or distance is NaN or infinite. The longitude wraps around the antimeridian.
    pub fn moved(&self, heading: f64, distance: f64, elapsed: Duration) -> Result<Self> {
        check_finite("heading", heading)?;
        check_finite("distance", distance)?;

        let bearing = heading.to_radians();
        let angular = distance / distance::EARTH_RADIUS_METRES;
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        let (sin_ang, cos_ang) = angular.sin_cos();

        let sin_lat2 = (sin_lat * cos_ang + cos_lat * sin_ang * bearing.cos()).clamp(-1.0, 1.0);
        let latitude = sin_lat2.asin();
        let longitude = self.longitude
            + (bearing.sin() * sin_ang * cos_lat).atan2(cos_ang - sin_lat * sin_lat2);
        let longitude = (longitude + PI).rem_euclid(2.0 * PI) - PI;

        Ok(Self {
            latitude,
            longitude,
            altitude: self.altitude,
            time: self.time.map(|t| t + elapsed),
        })
    }
}

/// Approximate equality, see [`Location`]
impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.distance_to(other).abs() < distance::DISTANCE_TOLERANCE_METRES
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lat:{:.4}{} Lon:{:.4}{} Alt: {:.1}",
            self.latitude_degrees(),
            self.latitude_hemisphere(),
            self.longitude_degrees(),
            self.longitude_hemisphere(),
            self.altitude
        )?;
        if let Some(time) = self.time {
            write!(f, " {time}")?;
        }
        Ok(())
    }
}

impl TryFrom<&gpx::Waypoint> for Location {
    type Error = DataError;

    /// Convert a GPX waypoint, defaulting the altitude to 0 when it has no elevation
    fn try_from(waypoint: &gpx::Waypoint) -> Result<Self> {
        let point = waypoint.point();
        Self::with_details(
            point.y(),
            point.x(),
            waypoint.elevation.unwrap_or(0.0),
            waypoint.time.map(OffsetDateTime::from),
        )
    }
}

impl From<&Location> for geo::Point<f64> {
    /// `x` is the longitude and `y` the latitude, both in degrees
    fn from(location: &Location) -> Self {
        geo::Point::new(location.longitude_degrees(), location.latitude_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DISTANCE_TOLERANCE_METRES, EARTH_RADIUS_METRES};
    use time::macros::datetime;

    fn loc(lat: f64, lon: f64) -> Location {
        Location::new(lat, lon).unwrap()
    }

    #[test]
    fn test_ranges() {
        for (lat, lon) in [
            (0.0, -180.1),
            (0.0, 180.1),
            (90.1, 0.0),
            (-90.1, 0.0),
            (1000.0, 1000.0),
            (f64::NAN, 0.0),
        ] {
            assert!(
                matches!(Location::new(lat, lon), Err(DataError::OutOfRange { .. })),
                "({lat}, {lon}) should be rejected"
            );
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        for (lat, lon) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
            assert!(Location::new(lat, lon).is_ok());
        }
    }

    #[test]
    fn test_error_reports_offending_value() {
        let err = Location::new(0.0, 180.1).unwrap_err();
        match err {
            DataError::OutOfRange { value, min, max } => {
                assert_eq!(value, 180.1);
                assert_eq!(min, -180.0);
                assert_eq!(max, 180.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_stored_as_radians() {
        let l = loc(90.0, -180.0);
        assert!((l.latitude() - PI / 2.0).abs() < 1e-12);
        assert!((l.longitude() + PI).abs() < 1e-12);
        assert!((l.latitude_degrees() - 90.0).abs() < 1e-9);
        assert!((l.longitude_degrees() + 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_equality() {
        let o1 = loc(0.0, 0.0);
        let o2 = loc(0.0, 0.0).with_altitude(1.0);
        let np1 = loc(90.0, 0.0);
        let np2 = loc(90.0, 90.0);
        let sp = loc(-90.0, 0.0);

        assert!(o1 == o1);
        assert!(o1 == o2);
        assert!(np1 == np2);
        assert!(np1 != sp);
    }

    #[test]
    fn test_equality_is_not_transitive() {
        // 0.6 mm steps along the equator
        let step = 0.0006 / EARTH_RADIUS_METRES;
        let a = loc(0.0, 0.0);
        let b = loc(0.0, step.to_degrees());
        let c = loc(0.0, (2.0 * step).to_degrees());

        assert!(a.distance_to(&c) > DISTANCE_TOLERANCE_METRES);
        assert!(a == b);
        assert!(b == c);
        assert!(a != c);
    }

    #[test]
    fn test_hemispheres() {
        assert_eq!(loc(10.0, 10.0).latitude_hemisphere(), Hemisphere::North);
        assert_eq!(loc(10.0, 10.0).longitude_hemisphere(), Hemisphere::East);
        assert_eq!(loc(-10.0, -10.0).latitude_hemisphere(), Hemisphere::South);
        assert_eq!(loc(-10.0, -10.0).longitude_hemisphere(), Hemisphere::West);
    }

    #[test]
    fn test_zero_is_south_and_west() {
        let origin = loc(0.0, 0.0);
        assert_eq!(origin.latitude_hemisphere(), Hemisphere::South);
        assert_eq!(origin.longitude_hemisphere(), Hemisphere::West);
    }

    #[test]
    fn test_display() {
        let brisbane = loc(-27.505, 152.970).with_altitude(10.0);
        assert_eq!(brisbane.to_string(), "Lat:-27.5050S Lon:152.9700E Alt: 10.0");

        let timed = brisbane.with_time(Some(datetime!(2014-08-08 12:19:00 UTC)));
        assert!(
            timed
                .to_string()
                .starts_with("Lat:-27.5050S Lon:152.9700E Alt: 10.0 2014-08-08")
        );
    }

    #[test]
    fn test_moved_north() {
        let start = loc(0.0, 0.0).with_altitude(20.0);
        let end = start.moved(0.0, 1000.0, Duration::ZERO).unwrap();

        assert!((start.distance_to(&end) - 1000.0).abs() < 1e-6);
        assert!((end.latitude() - 1000.0 / EARTH_RADIUS_METRES).abs() < 1e-12);
        assert!(end.longitude().abs() < 1e-12);
        assert_eq!(end.altitude(), 20.0);
    }

    #[test]
    fn test_moved_keeps_original() {
        let start = loc(-23.0, 137.0);
        let _ = start.moved(45.0, 501.0, Duration::seconds(30)).unwrap();
        assert_eq!(start.latitude_degrees(), loc(-23.0, 137.0).latitude_degrees());
        assert!(start.time().is_none());
    }

    #[test]
    fn test_moved_any_heading_covers_distance() {
        let start = loc(-23.0, 137.0);
        for heading in [0.0, 30.0, 45.0, 90.0, 135.0, 200.0, 315.0] {
            let end = start.moved(heading, 501.0, Duration::ZERO).unwrap();
            assert!((start.distance_to(&end) - 501.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_moved_advances_time() {
        let start = loc(0.0, 0.0).with_time(Some(datetime!(2014-08-08 12:19:00 UTC)));
        let end = start.moved(90.0, 100.0, Duration::seconds(30)).unwrap();
        assert_eq!(end.time(), Some(datetime!(2014-08-08 12:19:30 UTC)));
    }

    #[test]
    fn test_moved_wraps_antimeridian() {
        let start = loc(0.0, 179.9999);
        let end = start.moved(90.0, 1000.0, Duration::ZERO).unwrap();
        assert!(end.longitude_degrees() < 0.0);
        assert!(end.longitude_degrees() >= -180.0);
        assert!((start.distance_to(&end) - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_moved_rejects_non_finite() {
        let start = loc(-23.0, 137.0);

        let err = start.moved(f64::NAN, 100.0, Duration::ZERO).unwrap_err();
        assert!(matches!(err, DataError::NotFinite { name: "heading", .. }));

        let err = start.moved(0.0, f64::INFINITY, Duration::ZERO).unwrap_err();
        assert!(matches!(
            err,
            DataError::NotFinite { name: "distance", value } if value == f64::INFINITY
        ));

        assert!(start.moved(f64::NEG_INFINITY, 1.0, Duration::ZERO).is_err());
        assert!(start.moved(0.0, f64::NAN, Duration::ZERO).is_err());
    }

    #[test]
    fn test_from_waypoint() {
        let mut waypoint = gpx::Waypoint::new(geo::Point::new(153.027, -27.467));
        waypoint.elevation = Some(20.0);
        waypoint.time = Some(datetime!(2014-08-08 12:19:00 UTC).into());

        let location = Location::try_from(&waypoint).unwrap();
        assert!((location.latitude_degrees() + 27.467).abs() < 1e-9);
        assert!((location.longitude_degrees() - 153.027).abs() < 1e-9);
        assert_eq!(location.altitude(), 20.0);
        assert_eq!(location.time(), Some(datetime!(2014-08-08 12:19:00 UTC)));
    }

    #[test]
    fn test_from_waypoint_defaults() {
        let waypoint = gpx::Waypoint::new(geo::Point::new(0.0, 0.0));
        let location = Location::try_from(&waypoint).unwrap();
        assert_eq!(location.altitude(), 0.0);
        assert!(location.time().is_none());
    }

    #[test]
    fn test_from_invalid_waypoint() {
        let waypoint = gpx::Waypoint::new(geo::Point::new(0.0, 95.0));
        assert!(Location::try_from(&waypoint).is_err());
    }

    #[test]
    fn test_into_geo_point() {
        let location = loc(51.5074, -0.1278);
        let point: geo::Point<f64> = (&location).into();
        assert!((point.x() + 0.1278).abs() < 1e-9);
        assert!((point.y() - 51.5074).abs() < 1e-9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_in_degrees() {
        let location = loc(-27.505, 152.970)
            .with_altitude(10.0)
            .with_time(Some(datetime!(2014-08-08 12:19:00 UTC)));

        let json = serde_json::to_value(&location).unwrap();
        assert!((json["latitude"].as_f64().unwrap() + 27.505).abs() < 1e-9);
        assert!((json["longitude"].as_f64().unwrap() - 152.970).abs() < 1e-9);

        let back: Location = serde_json::from_value(json).unwrap();
        assert!(back == location);
        assert_eq!(back.altitude(), 10.0);
        assert_eq!(back.time(), location.time());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_out_of_range() {
        let err = serde_json::from_str::<Location>(r#"{"latitude": 95.0, "longitude": 0.0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("95.00 not between -90.00 and 90.00"));

        assert!(
            serde_json::from_str::<Location>(r#"{"latitude": 0.0, "longitude": -180.5}"#)
                .is_err()
        );
        // Fields are degrees, not the radians held inside
        let record = r#"{"latitude": 0.5, "longitude": 1.0, "altitude": 3.0}"#;
        let location: Location = serde_json::from_str(record).unwrap();
        assert!((location.latitude_degrees() - 0.5).abs() < 1e-12);
        assert_eq!(location.altitude(), 3.0);
    }
}
