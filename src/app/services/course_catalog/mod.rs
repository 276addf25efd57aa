//! Course catalog service with lazy sorting and binary search lookups
//!
//! The catalog accepts courses in any order and only sorts them when a read
//! depends on ordering. Every mutation marks the catalog dirty; the next
//! search, listing, or integrity check re-sorts before it runs.

use crate::app::models::Course;
use crate::Result;
use tracing::debug;

pub mod loader;
pub mod metadata;
pub mod parser;
pub mod query;
pub mod sort;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::{LineFailure, LoadReport};
pub use parser::{ParseError, normalize, parse_course_line};
pub use query::MissingPrerequisite;

/// In-memory course collection
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    /// Courses in insertion order until the next sort, ascending by number after
    pub(crate) courses: Vec<Course>,

    /// True iff `courses` is currently ascending by number
    pub(crate) sorted: bool,
}

impl CourseCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            sorted: false,
        }
    }

    /// Create an empty catalog with room for `capacity` courses
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            courses: Vec::with_capacity(capacity),
            sorted: false,
        }
    }

    /// Append a course, marking the catalog as needing a re-sort
    ///
    /// Fails without touching the catalog when the course has an empty number
    /// or name. Duplicate numbers and unknown prerequisites are accepted here.
    pub fn insert(&mut self, course: Course) -> Result<()> {
        course.validate()?;

        self.courses.push(course);
        self.sorted = false;
        Ok(())
    }

    /// Remove every course
    pub fn clear(&mut self) {
        self.courses.clear();
        self.sorted = false;
    }

    /// Get the number of courses in the catalog
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Check if no courses have been loaded
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Whether the next order-dependent read can skip sorting
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Sort the catalog by course number if it is dirty
    pub fn ensure_sorted(&mut self) {
        if self.sorted {
            return;
        }

        debug!("Sorting catalog of {} courses", self.courses.len());
        sort::quicksort_by_number(&mut self.courses);
        self.sorted = true;
    }
}
