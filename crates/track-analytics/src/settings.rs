use clap::Parser;
use std::path::PathBuf;
use track_analytics_lib::{Config, DEFAULT_SPLIT_METRES};

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Track Analytics - Print length, climb, descent and split times of GPX tracks
pub struct Settings {
    /// GPX files to analyse
    #[clap(value_name = "FILE", required = true)]
    pub gpx_files: Vec<PathBuf>,

    /// Distance between reported interval splits, in metres
    #[clap(short, long, default_value_t = DEFAULT_SPLIT_METRES)]
    pub interval: f64,

    /// Distance that must be covered before each split of the series fires, in metres
    #[clap(short, long, default_value_t = DEFAULT_SPLIT_METRES)]
    pub split: f64,

    /// Print the time of each interval instead of the time since the start
    #[clap(short, long, default_value = "false")]
    pub absolute: bool,
}

impl Settings {
    /// Analysis configuration for the library
    pub fn config(&self) -> Config {
        Config {
            interval_metres: self.interval,
            split_threshold_metres: self.split,
        }
    }
}
