//! Course Planner Library
//!
//! A Rust library for loading course catalogs from delimited text files and
//! answering questions about them.
//!
//! This library provides tools for:
//! - Parsing catalog lines into validated course records
//! - Holding courses in a lazily sorted in-memory catalog
//! - Looking up courses by number with binary search
//! - Checking that every listed prerequisite resolves to a known course
//! - Producing sorted course listings with resolved prerequisite detail

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod course_catalog;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Course;
pub use app::services::course_catalog::{
    CourseCatalog, LineFailure, LoadReport, MissingPrerequisite, ParseError, normalize,
    parse_course_line,
};
pub use config::Config;

/// Result type alias for the course planner
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for course planner operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A catalog line could not be parsed
    #[error("Line {line_number} could not be parsed ('{line}'): {source}")]
    Parse {
        line_number: usize,
        line: String,
        #[source]
        source: ParseError,
    },

    /// A course failed the non-empty number/name check
    #[error("Invalid course: {message}")]
    InvalidCourse { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Course lookup failed
    #[error("Course {number} not found")]
    CourseNotFound { number: String },

    /// Integrity check found unresolved prerequisites
    #[error("{count} prerequisite reference(s) do not resolve to a loaded course")]
    MissingPrerequisites { count: usize },

    /// Output serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a parse error for a specific input line
    pub fn parse(line_number: usize, line: impl Into<String>, source: ParseError) -> Self {
        Self::Parse {
            line_number,
            line: line.into(),
            source,
        }
    }

    /// Create an invalid course error
    pub fn invalid_course(message: impl Into<String>) -> Self {
        Self::InvalidCourse {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a course not found error
    pub fn course_not_found(number: impl Into<String>) -> Self {
        Self::CourseNotFound {
            number: number.into(),
        }
    }

    /// Create a missing prerequisites error
    pub fn missing_prerequisites(count: usize) -> Self {
        Self::MissingPrerequisites { count }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
