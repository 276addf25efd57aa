//! Application constants for the course planner
//!
//! This module contains default values, output markers, and menu settings
//! used throughout the course planner application.

// =============================================================================
// Input Defaults
// =============================================================================

/// Default course file, resolved relative to the working directory
pub const DEFAULT_COURSE_FILE: &str = "CS 300 ABCU_Advising_Program_Input.csv";

/// Default field delimiter for catalog lines
pub const DEFAULT_DELIMITER: char = ',';

/// Delimiters that cannot be used because they collide with line handling or trimming
pub const RESERVED_DELIMITERS: &[char] = &[' ', '\n', '\r'];

/// Minimum number of fields a catalog line must contain (number and name)
pub const MIN_FIELDS: usize = 2;

// =============================================================================
// Listing Output
// =============================================================================

/// Output markers used when rendering course details
pub mod listing {
    /// Separator between a course number and its name
    pub const NUMBER_NAME_SEPARATOR: &str = ", ";

    /// Separator between resolved prerequisites
    pub const PREREQUISITE_SEPARATOR: &str = "; ";

    /// Label preceding the prerequisite detail line
    pub const PREREQUISITE_LABEL: &str = "Prerequisites: ";

    /// Shown when a course lists no prerequisites
    pub const NO_PREREQUISITES: &str = "None";

    /// Appended to a prerequisite number that does not resolve
    pub const UNRESOLVED_MARKER: &str = " (not found)";

    /// Shown when a course lists prerequisites but none of them resolve
    pub const UNRESOLVED_PREREQUISITES: &str = "Error: Prerequisites expected, but none found";
}

// =============================================================================
// Interactive Menu
// =============================================================================

/// Menu option identifiers for the interactive planner
pub mod menu {
    pub const LOAD: u32 = 1;
    pub const PRINT_LIST: u32 = 2;
    pub const PRINT_COURSE: u32 = 3;
    pub const EXIT: u32 = 9;

    /// Menu option used when input could not be read as a number
    pub const INVALID: u32 = 0;
}

/// Log level for different operation types
pub const LOG_LEVEL_INFO: &str = "info";
pub const LOG_LEVEL_WARN: &str = "warn";
pub const LOG_LEVEL_ERROR: &str = "error";
