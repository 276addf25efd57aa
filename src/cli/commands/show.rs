//! Show command implementation
//!
//! Looks up a single course and prints it with its resolved prerequisites.

use super::shared::{CommandSummary, format_timing, load_catalog, timed};
use crate::app::services::course_catalog::{CourseCatalog, normalize};
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::{Error, Result};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// A prerequisite reference and the course it resolves to, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrerequisiteDetail {
    pub number: String,
    pub name: Option<String>,
}

/// JSON view of a course and its prerequisites
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseDetail {
    pub number: String,
    pub name: String,
    pub prerequisites: Vec<PrerequisiteDetail>,
}

/// Show command runner
pub fn run_show(args: ShowArgs) -> Result<CommandSummary> {
    let start_time = Instant::now();
    debug!("Show arguments: {:?}", args);

    let config = args.common.to_config()?;
    let (mut catalog, _report) = load_catalog(&config)?;

    let number = normalize(args.course.trim_start());
    info!("Looking up course {}", number);

    let (output, elapsed) = timed(|| render_course(&mut catalog, &number, args.common.output_format));

    if config.show_timing {
        eprintln!("{}", format_timing("Search", elapsed));
    }

    match output? {
        Some(output) => println!("{}", output),
        None => return Err(Error::course_not_found(number)),
    }

    Ok(CommandSummary {
        courses_loaded: catalog.len(),
        elapsed: start_time.elapsed(),
    })
}

/// Render a course in the requested format, or `None` if it is not loaded
pub fn render_course(
    catalog: &mut CourseCatalog,
    number: &str,
    format: OutputFormat,
) -> Result<Option<String>> {
    match format {
        OutputFormat::Human => Ok(catalog.describe(number)),
        OutputFormat::Json => {
            let Some(detail) = course_detail(catalog, number) else {
                return Ok(None);
            };
            Ok(Some(serde_json::to_string_pretty(&detail)?))
        }
    }
}

/// Build the JSON view of a course, resolving each prerequisite by search
pub fn course_detail(catalog: &mut CourseCatalog, number: &str) -> Option<CourseDetail> {
    let course = catalog.search(number)?.clone();

    let prerequisites = course
        .prerequisites
        .iter()
        .map(|prerequisite| PrerequisiteDetail {
            number: prerequisite.clone(),
            name: catalog.search(prerequisite).map(|c| c.name.clone()),
        })
        .collect();

    Some(CourseDetail {
        number: course.number,
        name: course.name,
        prerequisites,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CourseCatalog {
        let mut catalog = CourseCatalog::new();
        catalog.load_lines(
            [
                "CSCI200,Data Structures,CSCI100,MATH999",
                "CSCI100,Intro to CS",
            ],
            ',',
        );
        catalog
    }

    #[test]
    fn test_render_course_human() {
        let output = render_course(&mut catalog(), "CSCI200", OutputFormat::Human)
            .unwrap()
            .unwrap();
        assert_eq!(
            output,
            "CSCI200, Data Structures\nPrerequisites: CSCI100, Intro to CS; MATH999 (not found)"
        );
    }

    #[test]
    fn test_render_course_not_found() {
        let output = render_course(&mut catalog(), "CSCI999", OutputFormat::Human).unwrap();
        assert!(output.is_none());

        let output = render_course(&mut catalog(), "CSCI999", OutputFormat::Json).unwrap();
        assert!(output.is_none());
    }

    #[test]
    fn test_course_detail_marks_unresolved() {
        let detail = course_detail(&mut catalog(), "CSCI200").unwrap();

        assert_eq!(detail.name, "Data Structures");
        assert_eq!(
            detail.prerequisites,
            vec![
                PrerequisiteDetail {
                    number: "CSCI100".to_string(),
                    name: Some("Intro to CS".to_string()),
                },
                PrerequisiteDetail {
                    number: "MATH999".to_string(),
                    name: None,
                },
            ]
        );
    }

    #[test]
    fn test_render_course_json() {
        let output = render_course(&mut catalog(), "CSCI100", OutputFormat::Json)
            .unwrap()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["number"], "CSCI100");
        assert_eq!(value["prerequisites"].as_array().unwrap().len(), 0);
    }
}
