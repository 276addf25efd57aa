//! Configuration management and validation.
//!
//! Provides the settings that tell the planner where to read course data
//! from, how lines are delimited, and what extra reporting to produce.

use crate::constants::{DEFAULT_COURSE_FILE, DEFAULT_DELIMITER, RESERVED_DELIMITERS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Global configuration for course planning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Course file to load
    pub course_file: PathBuf,

    /// Field delimiter for catalog lines
    pub delimiter: char,

    /// Report elapsed time around catalog operations
    pub show_timing: bool,

    /// Show a spinner while loading
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            course_file: PathBuf::from(DEFAULT_COURSE_FILE),
            delimiter: DEFAULT_DELIMITER,
            show_timing: false,
            show_progress: false,
        }
    }
}

impl Config {
    /// Create configuration with a custom course file
    pub fn with_course_file(mut self, course_file: impl Into<PathBuf>) -> Self {
        self.course_file = course_file.into();
        self
    }

    /// Create configuration with a custom delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable timing output
    pub fn with_timing(mut self) -> Self {
        self.show_timing = true;
        self
    }

    /// Enable the load spinner
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.course_file.as_os_str().is_empty() {
            return Err(Error::configuration("Course file path cannot be empty"));
        }

        if RESERVED_DELIMITERS.contains(&self.delimiter) {
            return Err(Error::configuration(format!(
                "Delimiter {:?} is reserved and cannot separate fields",
                self.delimiter
            )));
        }

        debug!(
            "Configuration validated: file={}, delimiter={:?}",
            self.course_file.display(),
            self.delimiter
        );
        Ok(())
    }
}
