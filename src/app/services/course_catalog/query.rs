//! Course lookup, integrity checking, and listing
//!
//! Every query that depends on ordering sorts a dirty catalog first, so
//! callers never sort explicitly. Lookups are binary searches over the
//! sorted courses using exact, byte-order comparison of course numbers.

use super::CourseCatalog;
use crate::app::models::Course;
use crate::constants::listing::{
    NO_PREREQUISITES, PREREQUISITE_LABEL, PREREQUISITE_SEPARATOR, UNRESOLVED_MARKER,
    UNRESOLVED_PREREQUISITES,
};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// A prerequisite reference that does not resolve to a loaded course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingPrerequisite {
    /// Course that lists the prerequisite
    pub course_number: String,

    /// The prerequisite number that was not found
    pub prerequisite: String,
}

impl CourseCatalog {
    /// Find a course by its normalized number
    ///
    /// Sorts the catalog first if it has changed since the last sort. When the
    /// same number was loaded more than once, which of those courses is returned
    /// is unspecified. Searching an empty catalog returns `None` without
    /// sorting.
    ///
    /// # Examples
    /// ```
    /// use course_planner::CourseCatalog;
    ///
    /// let mut catalog = CourseCatalog::new();
    /// catalog.load_lines(["CSCI200,Data Structures,CSCI101", "CSCI101,Intro"], ',');
    ///
    /// assert_eq!(catalog.search("CSCI101").unwrap().name, "Intro");
    /// assert!(catalog.search("csci101").is_none());
    /// ```
    pub fn search(&mut self, number: &str) -> Option<&Course> {
        if self.courses.is_empty() {
            return None;
        }

        self.ensure_sorted();
        self.find_sorted(number)
    }

    /// Binary search over courses that are already sorted
    fn find_sorted(&self, number: &str) -> Option<&Course> {
        debug_assert!(self.sorted, "binary search on an unsorted catalog");

        let mut left = 0;
        let mut right = self.courses.len();

        while left < right {
            let middle = left + (right - left) / 2;
            let candidate = &self.courses[middle];

            match number.cmp(candidate.number.as_str()) {
                Ordering::Equal => return Some(candidate),
                Ordering::Less => right = middle,
                Ordering::Greater => left = middle + 1,
            }
        }

        None
    }

    /// Find the first course that lists a prerequisite which is not loaded
    ///
    /// Courses are checked in ascending number order. Returns `None` when every
    /// prerequisite of every course resolves, including for an empty catalog.
    ///
    /// # Examples
    /// ```
    /// use course_planner::CourseCatalog;
    ///
    /// let mut catalog = CourseCatalog::new();
    /// catalog.load_lines(["A1,Intro,B1", "A2,Advanced"], ',');
    /// assert_eq!(catalog.find_missing_prerequisites().unwrap().number, "A1");
    ///
    /// catalog.load_lines(["A1,Intro,A2", "A2,Advanced"], ',');
    /// assert!(catalog.find_missing_prerequisites().is_none());
    /// ```
    pub fn find_missing_prerequisites(&mut self) -> Option<&Course> {
        if self.courses.is_empty() {
            return None;
        }

        self.ensure_sorted();
        let catalog = &*self;
        catalog.courses.iter().find(|course| {
            course
                .prerequisites
                .iter()
                .any(|prerequisite| catalog.find_sorted(prerequisite).is_none())
        })
    }

    /// List every unresolved prerequisite reference in the catalog
    ///
    /// Unlike [`CourseCatalog::find_missing_prerequisites`] this does not stop
    /// at the first offending course.
    pub fn missing_prerequisites(&mut self) -> Vec<MissingPrerequisite> {
        if self.courses.is_empty() {
            return Vec::new();
        }

        self.ensure_sorted();
        let catalog = &*self;
        let missing: Vec<MissingPrerequisite> = catalog
            .courses
            .iter()
            .flat_map(move |course| {
                course
                    .prerequisites
                    .iter()
                    .filter(move |prerequisite| catalog.find_sorted(prerequisite).is_none())
                    .map(move |prerequisite| MissingPrerequisite {
                        course_number: course.number.clone(),
                        prerequisite: prerequisite.clone(),
                    })
            })
            .collect();

        debug!("Integrity check found {} missing prerequisites", missing.len());
        missing
    }

    /// Get all courses in ascending number order
    pub fn courses(&mut self) -> &[Course] {
        self.ensure_sorted();
        &self.courses
    }

    /// Get the sorted listing, one "<number>, <name>" line per course
    pub fn listing(&mut self) -> Vec<String> {
        self.ensure_sorted();
        self.courses
            .iter()
            .map(|course| self.format_course(course, false))
            .collect()
    }

    /// Describe a course together with its resolved prerequisites
    ///
    /// The first line is "<number>, <name>". The second line starts with
    /// "Prerequisites: " followed by each resolved prerequisite as
    /// "<number>, <name>" joined by "; ". A prerequisite that does not resolve
    /// is shown as "<number> (not found)". If none resolve the whole line is an
    /// error marker, and a course without prerequisites reports "None".
    ///
    /// Returns `None` if the course is not in the catalog.
    ///
    /// # Examples
    /// ```
    /// use course_planner::CourseCatalog;
    ///
    /// let mut catalog = CourseCatalog::new();
    /// catalog.load_lines(["CSCI200,Data Structures,CSCI101", "CSCI101,Intro"], ',');
    ///
    /// assert_eq!(
    ///     catalog.describe("CSCI200").unwrap(),
    ///     "CSCI200, Data Structures\nPrerequisites: CSCI101, Intro"
    /// );
    /// ```
    pub fn describe(&mut self, number: &str) -> Option<String> {
        if self.courses.is_empty() {
            return None;
        }

        self.ensure_sorted();
        let course = self.find_sorted(number)?;
        Some(self.format_course(course, true))
    }

    /// Format a course; requires a sorted catalog when prerequisites are included
    fn format_course(&self, course: &Course, include_prerequisites: bool) -> String {
        let course_info = course.to_string();
        if !include_prerequisites {
            return course_info;
        }

        let prerequisite_info = if course.has_prerequisites() {
            let entries: Vec<Option<String>> = course
                .prerequisites
                .iter()
                .map(|prerequisite| self.find_sorted(prerequisite).map(Course::to_string))
                .collect();

            if entries.iter().all(Option::is_none) {
                UNRESOLVED_PREREQUISITES.to_string()
            } else {
                entries
                    .into_iter()
                    .zip(&course.prerequisites)
                    .map(|(entry, prerequisite)| {
                        entry.unwrap_or_else(|| format!("{}{}", prerequisite, UNRESOLVED_MARKER))
                    })
                    .collect::<Vec<_>>()
                    .join(PREREQUISITE_SEPARATOR)
            }
        } else {
            NO_PREREQUISITES.to_string()
        };

        format!("{}\n{}{}", course_info, PREREQUISITE_LABEL, prerequisite_info)
    }
}
