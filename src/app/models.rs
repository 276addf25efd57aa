//! Data models for course planning
//!
//! This module contains the core course record shared by the parser, the
//! catalog, and the command-line reporting.

use crate::constants::listing::NUMBER_NAME_SEPARATOR;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Course Record Structure
// =============================================================================

/// A single course entry from a catalog file
///
/// `number` and the prerequisite identifiers are stored normalized (trimmed of
/// spaces and uppercased); `name` is stored exactly as read. Prerequisites are
/// not required to exist in any catalog when the course is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    /// Normalized course identifier (e.g., "CSCI200") - key for lookups
    pub number: String,

    /// Display name (e.g., "Data Structures")
    pub name: String,

    /// Normalized identifiers of prerequisite courses, in file order
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Create a new Course with validation
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Result<Self> {
        let course = Self {
            number: number.into(),
            name: name.into(),
            prerequisites,
        };

        course.validate()?;
        Ok(course)
    }

    /// Validate that both the number and the name are present
    pub fn validate(&self) -> Result<()> {
        if self.number.is_empty() {
            return Err(Error::invalid_course("course number cannot be empty"));
        }

        if self.name.is_empty() {
            return Err(Error::invalid_course(format!(
                "course {} has an empty name",
                self.number
            )));
        }

        Ok(())
    }

    /// Whether the course lists any prerequisites
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.number, NUMBER_NAME_SEPARATOR, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_new_valid() {
        let course = Course::new("CSCI200", "Data Structures", vec!["CSCI101".to_string()])
            .unwrap();
        assert_eq!(course.number, "CSCI200");
        assert_eq!(course.name, "Data Structures");
        assert!(course.has_prerequisites());
        assert!(course.validate().is_ok());
    }

    #[test]
    fn test_course_new_rejects_empty_fields() {
        assert!(matches!(
            Course::new("", "Intro", vec![]),
            Err(Error::InvalidCourse { .. })
        ));
        assert!(matches!(
            Course::new("CSCI100", "", vec![]),
            Err(Error::InvalidCourse { .. })
        ));
    }

    #[test]
    fn test_course_display() {
        let course = Course::new("MATH201", "Discrete Mathematics", vec![]).unwrap();
        assert_eq!(course.to_string(), "MATH201, Discrete Mathematics");
        assert!(!course.has_prerequisites());
    }
}
