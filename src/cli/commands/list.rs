//! List command implementation
//!
//! Prints every loaded course in ascending course number order.

use super::shared::{CommandSummary, format_timing, load_catalog, timed};
use crate::app::services::course_catalog::CourseCatalog;
use crate::cli::args::{ListArgs, OutputFormat};
use crate::Result;
use colored::Colorize;
use std::time::Instant;
use tracing::debug;

/// Header printed above the human-readable listing
pub const LISTING_HEADER: &str = "Here is a sample schedule:";

/// List command runner
pub fn run_list(args: ListArgs) -> Result<CommandSummary> {
    let start_time = Instant::now();
    debug!("List arguments: {:?}", args);

    let config = args.common.to_config()?;
    let (mut catalog, _report) = load_catalog(&config)?;

    let (output, elapsed) = timed(|| render_listing(&mut catalog, args.common.output_format));
    let output = output?;

    if args.common.output_format == OutputFormat::Human {
        println!("{}", LISTING_HEADER.bright_green().bold());
        println!();
    }
    println!("{}", output);

    if config.show_timing {
        eprintln!("{}", format_timing("List", elapsed));
    }

    Ok(CommandSummary {
        courses_loaded: catalog.len(),
        elapsed: start_time.elapsed(),
    })
}

/// Render the sorted catalog in the requested format
pub fn render_listing(catalog: &mut CourseCatalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(catalog.listing().join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(catalog.courses())?),
    }
}
