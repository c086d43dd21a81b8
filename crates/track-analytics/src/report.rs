//! Plain-text report of a path

use crate::settings::Settings;
use std::fmt;
use track_analytics_lib::{Config, Path, PathInfo, format_duration};

/// Report for one path, written out through [`fmt::Display`]
pub struct Report<'a> {
    name: &'a str,
    config: Config,
    info: PathInfo,
    absolute: bool,
}

impl<'a> Report<'a> {
    /// Analyse `path` with the interval and threshold from `settings`
    ///
    /// # Arguments
    /// * `name` - Heading of the report, usually the file name
    /// * `path` - The path to analyse
    /// * `settings` - Interval, split threshold and whether interval times are absolute
    pub fn new(name: &'a str, path: &Path, settings: &Settings) -> Self {
        let config = settings.config();
        let mut info = path.info(&config);
        if settings.absolute {
            info.interval_splits = path.interval_splits_absolute(config.interval_metres);
        }
        Self {
            name,
            config,
            info,
            absolute: settings.absolute,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = &self.info;
        writeln!(f, "== {}", self.name)?;
        writeln!(f, "Points:   {}", info.point_count)?;
        writeln!(f, "Length:   {:.2} km", info.length_metres / 1000.0)?;
        writeln!(f, "Climb:    {:.1} m", info.climb_metres)?;
        writeln!(f, "Descent:  {:.1} m", info.descent_metres)?;
        writeln!(f, "Elapsed:  {}", format_duration(info.elapsed))?;

        let kind = if self.absolute { "per interval" } else { "cumulative" };
        writeln!(
            f,
            "Interval splits ({} m, {kind}):",
            self.config.interval_metres
        )?;
        for (k, time) in info.interval_splits.iter().enumerate() {
            let boundary = (k + 1) as f64 * self.config.interval_metres;
            writeln!(f, "  {boundary:>8.0} m  {}", format_duration(*time))?;
        }

        writeln!(f, "Split series ({} m):", self.config.split_threshold_metres)?;
        for split in &info.series {
            writeln!(f, "  {split}")?;
        }
        Ok(())
    }
}

/// Render the report for one path as a string
pub fn render(name: &str, path: &Path, settings: &Settings) -> String {
    Report::new(name, path, settings).to_string()
}
