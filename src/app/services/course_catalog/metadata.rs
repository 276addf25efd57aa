//! Catalog loading statistics and diagnostics
//!
//! This module defines the report returned by a bulk load, including the
//! line that stopped the load when one fails to parse.

use super::parser::ParseError;
use crate::Error;
use serde::Serialize;
use std::time::Duration;

/// The first line of a bulk load that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineFailure {
    /// 1-based line number within the input
    pub line_number: usize,

    /// The raw line as read
    pub line: String,

    /// Why the line was rejected
    #[serde(serialize_with = "serialize_reason")]
    pub reason: ParseError,
}

fn serialize_reason<S>(reason: &ParseError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(reason)
}

impl LineFailure {
    /// Convert into a crate error for callers that treat the failure as fatal
    pub fn into_error(self) -> Error {
        Error::parse(self.line_number, self.line, self.reason)
    }
}

/// Statistics about a bulk load
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// Number of lines handed to the parser, including a failing one
    pub lines_read: usize,

    /// Number of courses inserted
    pub courses_loaded: usize,

    /// Number of inserted courses whose number was already present
    pub duplicate_numbers: usize,

    /// The line that stopped the load, if any
    pub failure: Option<LineFailure>,

    /// Time taken by the load
    #[serde(skip)]
    pub load_duration: Duration,
}

impl LoadReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every line was loaded
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Calculate the loading rate in courses per second
    pub fn loading_rate(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.courses_loaded as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        match &self.failure {
            None => format!(
                "Loaded {} courses from {} lines in {:.3}s",
                self.courses_loaded,
                self.lines_read,
                self.load_duration.as_secs_f64()
            ),
            Some(failure) => format!(
                "Loaded {} courses before line {} failed to parse: {}",
                self.courses_loaded, failure.line_number, failure.reason
            ),
        }
    }
}
