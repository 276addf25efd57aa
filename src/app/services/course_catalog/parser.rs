//! Course record parsing from delimited catalog lines
//!
//! A catalog line carries the course number, the course name, and zero or
//! more prerequisite numbers:
//!
//! ```text
//! CSCI300,Introduction to Algorithms,CSCI200,MATH201
//! ```
//!
//! There is no quoting or escaping; the delimiter always separates fields.

use crate::app::models::Course;
use crate::constants::MIN_FIELDS;
use thiserror::Error;

/// Reasons a catalog line cannot become a course
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected at least 2 fields (number, name), found {found}")]
    TooFewFields { found: usize },

    #[error("course number field is empty")]
    EmptyNumber,

    #[error("course name field is empty")]
    EmptyName,
}

/// Trim leading and trailing spaces and uppercase ASCII letters
///
/// Only the space character is trimmed; tabs and carriage returns are kept.
///
/// # Examples
/// ```
/// use course_planner::normalize;
///
/// assert_eq!(normalize("  csci101 "), "CSCI101");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(field: &str) -> String {
    field.trim_matches(' ').to_ascii_uppercase()
}

/// Split a line into raw fields the way line-oriented field readers do
///
/// An empty line has no fields, and a trailing delimiter does not open a
/// new empty field.
fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(delimiter).collect();
    if fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Parse one catalog line into a course
///
/// Field 0 becomes the normalized number, field 1 the verbatim name, and every
/// non-empty field after that a normalized prerequisite. Empty prerequisite
/// fields are skipped.
///
/// # Errors
/// * `ParseError::TooFewFields` if the line has fewer than two fields
/// * `ParseError::EmptyNumber` if the number is empty, or only spaces
/// * `ParseError::EmptyName` if the name field is empty
///
/// # Examples
/// ```
/// use course_planner::parse_course_line;
///
/// let course = parse_course_line("csci300, Algorithms,,csci200,", ',').unwrap();
/// assert_eq!(course.number, "CSCI300");
/// assert_eq!(course.name, " Algorithms");
/// assert_eq!(course.prerequisites, vec!["CSCI200"]);
/// ```
pub fn parse_course_line(line: &str, delimiter: char) -> Result<Course, ParseError> {
    let fields = split_fields(line, delimiter);

    let (raw_number, raw_name) = match fields.as_slice() {
        [number, name, ..] => (*number, *name),
        _ => {
            return Err(ParseError::TooFewFields {
                found: fields.len(),
            });
        }
    };

    if raw_number.is_empty() {
        return Err(ParseError::EmptyNumber);
    }
    if raw_name.is_empty() {
        return Err(ParseError::EmptyName);
    }

    let number = normalize(raw_number);
    if number.is_empty() {
        // A spaces-only number passes the raw check but cannot be looked up
        return Err(ParseError::EmptyNumber);
    }

    let prerequisites = fields[MIN_FIELDS..]
        .iter()
        .filter(|field| !field.is_empty())
        .map(|field| normalize(field))
        .collect();

    Ok(Course {
        number,
        name: raw_name.to_string(),
        prerequisites,
    })
}
