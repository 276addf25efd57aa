//! Validate command implementation
//!
//! Loads the course file and reports every prerequisite reference that does
//! not resolve to a loaded course. The command fails when the file stopped
//! loading early or when any reference is missing.

use super::shared::{CommandSummary, format_timing, load_catalog, timed};
use crate::app::services::course_catalog::{
    CourseCatalog, LoadReport, MissingPrerequisite,
};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Outcome of a catalog integrity check
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// How the load went
    pub load: LoadReport,

    /// Number of the first course (in number order) with a missing prerequisite
    pub first_invalid_course: Option<String>,

    /// Every unresolved prerequisite reference
    pub missing: Vec<MissingPrerequisite>,
}

impl ValidationReport {
    /// Check a loaded catalog
    pub fn check(catalog: &mut CourseCatalog, load: LoadReport) -> Self {
        let first_invalid_course = catalog
            .find_missing_prerequisites()
            .map(|course| course.number.clone());
        let missing = catalog.missing_prerequisites();

        Self {
            load,
            first_invalid_course,
            missing,
        }
    }

    /// Whether the file loaded completely and every prerequisite resolved
    pub fn is_valid(&self) -> bool {
        self.load.is_complete() && self.missing.is_empty()
    }

    /// Render the report as human-readable lines
    pub fn render_human(&self) -> String {
        let mut lines = vec![self.load.summary()];

        if let Some(failure) = &self.load.failure {
            lines.push(format!("Error parsing file line: {}", failure.line));
        }

        match &self.first_invalid_course {
            Some(number) => {
                lines.push(format!(
                    "First course with a missing prerequisite: {}",
                    number
                ));
                for missing in &self.missing {
                    lines.push(format!(
                        "  {} lists {}, which is not in the catalog",
                        missing.course_number, missing.prerequisite
                    ));
                }
            }
            None => lines.push("All prerequisites resolve to loaded courses.".to_string()),
        }

        lines.join("\n")
    }
}

/// Validate command runner
pub fn run_validate(args: ValidateArgs) -> Result<CommandSummary> {
    let start_time = Instant::now();
    debug!("Validate arguments: {:?}", args);

    let config = args.common.to_config()?;
    let (mut catalog, load) = load_catalog(&config)?;

    let (report, elapsed) = timed(|| ValidationReport::check(&mut catalog, load));
    info!(
        "Integrity check finished: {} missing prerequisite reference(s)",
        report.missing.len()
    );

    match args.common.output_format {
        OutputFormat::Human => {
            let status = if report.is_valid() {
                "Catalog is valid".bright_green().bold()
            } else {
                "Catalog has problems".bright_red().bold()
            };
            println!("{}", status);
            println!("{}", report.render_human());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if config.show_timing {
        eprintln!("{}", format_timing("Integrity check", elapsed));
    }

    if let Some(failure) = report.load.failure {
        warn!("Course file did not load completely");
        return Err(failure.into_error());
    }
    if !report.missing.is_empty() {
        return Err(Error::missing_prerequisites(report.missing.len()));
    }

    Ok(CommandSummary {
        courses_loaded: catalog.len(),
        elapsed: start_time.elapsed(),
    })
}
