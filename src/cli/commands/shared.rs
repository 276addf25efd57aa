//! Shared components for CLI commands
//!
//! This module contains logging setup, catalog loading, and timing helpers
//! used across the command implementations.

use crate::app::services::course_catalog::{CourseCatalog, LoadReport};
use crate::cli::args::CommonArgs;
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Summary of a command run, returned to `main`
#[derive(Debug, Clone, Default)]
pub struct CommandSummary {
    /// Number of courses in the catalog when the command finished
    pub courses_loaded: usize,
    /// Total time spent in the command
    pub elapsed: Duration,
}

/// Set up structured logging for all commands
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("course_planner={}", log_level)));

    // A subscriber may already be installed when commands run in-process
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .is_ok();

    if installed {
        debug!("Logging initialized at level: {}", log_level);
    }
    Ok(())
}

/// Open a course file for reading
pub fn open_course_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        Error::io(
            format!("Could not open course file {}", path.display()),
            e,
        )
    })?;
    Ok(BufReader::new(file))
}

/// Load the configured course file into a new catalog
///
/// A line that fails to parse is logged and reported but does not fail the
/// command; the catalog holds whatever loaded before that line.
pub fn load_catalog(config: &Config) -> Result<(CourseCatalog, LoadReport)> {
    info!("Loading courses from {}", config.course_file.display());

    let reader = open_course_file(&config.course_file)?;

    let spinner = if config.show_progress {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Loading {}", config.course_file.display()));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let mut catalog = CourseCatalog::new();
    let result = catalog.load_reader(reader, config.delimiter);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let report = result?;

    if let Some(failure) = &report.failure {
        warn!(
            "Stopped loading at line {}: '{}' ({})",
            failure.line_number, failure.line, failure.reason
        );
    }

    if config.show_timing {
        eprintln!("{}", format_timing("Load", report.load_duration));
    }

    Ok((catalog, report))
}

/// Run `operation`, returning its result and how long it took
pub fn timed<T>(operation: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = operation();
    (value, start.elapsed())
}

/// Format an elapsed time for timing output
pub fn format_timing(label: &str, elapsed: Duration) -> String {
    format!(
        "   {} time: {} µs ({:.6} seconds)",
        label,
        elapsed.as_micros(),
        elapsed.as_secs_f64()
    )
}
