//! Shared test utilities and fixtures for course catalog tests

use crate::app::models::Course;
use crate::app::services::course_catalog::CourseCatalog;

pub mod query_tests;

/// A small, well-formed catalog with every prerequisite defined
pub const SAMPLE_LINES: &[&str] = &[
    "MATH201,Discrete Mathematics",
    "CSCI300,Introduction to Algorithms,CSCI200,MATH201",
    "CSCI350,Operating Systems,CSCI300",
    "CSCI101,Introduction to Programming in C++,CSCI100",
    "CSCI100,Introduction to Computer Science",
    "CSCI301,Advanced Programming in C++,CSCI101",
    "CSCI400,Large Software Development,CSCI301,CSCI350",
    "CSCI200,Data Structures,CSCI101",
];

/// Sample course numbers in ascending byte order
pub const SAMPLE_NUMBERS_SORTED: &[&str] = &[
    "CSCI100", "CSCI101", "CSCI200", "CSCI300", "CSCI301", "CSCI350", "CSCI400", "MATH201",
];

/// Create a test course without going through the parser
pub fn create_test_course(number: &str, name: &str, prerequisites: &[&str]) -> Course {
    Course::new(
        number,
        name,
        prerequisites.iter().map(|p| p.to_string()).collect(),
    )
    .unwrap()
}

/// Create a catalog loaded from the sample lines
pub fn create_sample_catalog() -> CourseCatalog {
    let mut catalog = CourseCatalog::new();
    let report = catalog.load_lines(SAMPLE_LINES, ',');
    assert!(report.is_complete());
    catalog
}

/// Collect course numbers in their current storage order
pub fn stored_numbers(catalog: &CourseCatalog) -> Vec<String> {
    catalog.courses.iter().map(|c| c.number.clone()).collect()
}

/// Deterministic pseudo-random course numbers for larger sorting tests
pub fn generate_numbers(count: usize, seed: u64) -> Vec<String> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            format!("C{:06}", (state >> 33) % 1_000_000)
        })
        .collect()
}
