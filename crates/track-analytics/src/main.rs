//! Track Analytics - command line entry point
//!
//! Loads each GPX file given on the command line and prints its length, climb,
//! descent and split times.

mod logging;
mod report;
mod settings;

use clap::Parser;
use settings::Settings;
use std::process::ExitCode;
use track_analytics_lib::import;

fn main() -> ExitCode {
    let settings = Settings::parse();
    logging::setup_logging();

    let mut failed = false;
    for file in &settings.gpx_files {
        match import::load_file(file) {
            Ok(path) => {
                tracing::info!("Loaded {} points from {}", path.len(), file.display());
                print!("{}", report::render(&file.display().to_string(), &path, &settings));
            }
            Err(e) => {
                tracing::error!("Failed to load {}: {}", file.display(), e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
