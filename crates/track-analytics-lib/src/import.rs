//! GPX import
//!
//! Turns GPX documents into a [`Path`]. Every track point of every segment of every
//! track is appended in document order; standalone waypoints and routes are ignored.

use crate::pairfold::pairs;
use crate::{Location, Path, Result};
use std::io::{BufReader, Read};

/// Build a path from parsed GPX data
///
/// # Returns
/// The path, or [`DataError::OutOfRange`](crate::DataError::OutOfRange) for the first
/// track point with invalid coordinates
pub fn path_from_gpx(gpx: &gpx::Gpx) -> Result<Path> {
    #[cfg(feature = "profiling")]
    profiling::scope!("import::path_from_gpx");

    let mut path = Path::new();
    for track in &gpx.tracks {
        for segment in &track.segments {
            for waypoint in &segment.points {
                path.push(Location::try_from(waypoint)?);
            }
        }
    }

    let untimed = path.iter().filter(|l| l.time().is_none()).count();
    if untimed > 0 {
        tracing::debug!(
            "{} of {} track points have no timestamp; their segments count as zero time",
            untimed,
            path.len()
        );
    }

    let backwards = pairs(path.iter())
        .filter(|(a, b)| matches!((a.time(), b.time()), (Some(t1), Some(t2)) if t2 < t1))
        .count();
    if backwards > 0 {
        tracing::warn!("Timestamps go backwards {} times in this track", backwards);
    }

    tracing::debug!(
        "Imported {} track points from {} tracks",
        path.len(),
        gpx.tracks.len()
    );
    Ok(path)
}

/// Parse a GPX document from a reader into a path
pub fn read_path<R: Read>(reader: R) -> Result<Path> {
    let gpx = gpx::read(reader)?;
    path_from_gpx(&gpx)
}

/// Load a GPX file and turn it into a path
pub fn load_file<P: AsRef<std::path::Path>>(file: P) -> Result<Path> {
    let file = std::fs::File::open(file.as_ref())?;
    read_path(BufReader::new(file))
}
