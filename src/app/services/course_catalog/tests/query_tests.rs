//! Tests for search, integrity checks, and listings

use super::*;
use crate::app::services::course_catalog::MissingPrerequisite;

#[test]
fn test_search_finds_every_loaded_course() {
    let mut catalog = create_sample_catalog();

    for number in SAMPLE_NUMBERS_SORTED {
        let course = catalog.search(number).expect("loaded course should be found");
        assert_eq!(course.number, *number);
    }
    assert!(catalog.is_sorted());
}

#[test]
fn test_search_miss() {
    let mut catalog = create_sample_catalog();

    assert!(catalog.search("CSCI999").is_none());
    assert!(catalog.search("AAAA").is_none());
    assert!(catalog.search("ZZZZ").is_none());
    // No prefix or case-insensitive matching
    assert!(catalog.search("CSCI10").is_none());
    assert!(catalog.search("csci100").is_none());
}

#[test]
fn test_search_empty_catalog_does_not_sort() {
    let mut catalog = CourseCatalog::new();

    assert!(catalog.search("CSCI100").is_none());
    assert!(!catalog.is_sorted());
    assert!(catalog.search("").is_none());
}

#[test]
fn test_search_after_insert_resorts() {
    let mut catalog = create_sample_catalog();
    assert!(catalog.search("CSCI100").is_some());

    catalog
        .insert(create_test_course("BIOL101", "Biology", &[]))
        .unwrap();
    assert!(!catalog.is_sorted());

    assert_eq!(catalog.search("BIOL101").unwrap().name, "Biology");
    assert!(catalog.is_sorted());
}

#[test]
fn test_search_large_generated_catalog() {
    let numbers = generate_numbers(2000, 7);
    let mut catalog = CourseCatalog::with_capacity(numbers.len());
    for number in &numbers {
        catalog
            .insert(create_test_course(number, "Generated", &[]))
            .unwrap();
    }

    for number in numbers.iter().step_by(37) {
        assert_eq!(&catalog.search(number).unwrap().number, number);
    }
    assert!(catalog.search("D000000").is_none());
}

#[test]
fn test_search_with_duplicates_returns_one_of_them() {
    let mut catalog = CourseCatalog::new();
    catalog.load_lines(["X1,First", "X1,Second", "A1,Other"], ',');

    let found = catalog.search("X1").unwrap();
    assert_eq!(found.number, "X1");
    assert!(found.name == "First" || found.name == "Second");
}

#[test]
fn test_find_missing_prerequisites_reports_course() {
    let mut catalog = CourseCatalog::new();
    catalog.load_lines(["A1,Intro,B1", "A2,Advanced"], ',');

    let course = catalog.find_missing_prerequisites().unwrap();
    assert_eq!(course.number, "A1");
}

#[test]
fn test_find_missing_prerequisites_all_resolved() {
    let mut catalog = CourseCatalog::new();
    catalog.load_lines(["A1,Intro,A2", "A2,Advanced"], ',');
    assert!(catalog.find_missing_prerequisites().is_none());

    let mut catalog = create_sample_catalog();
    assert!(catalog.find_missing_prerequisites().is_none());
}

#[test]
fn test_find_missing_prerequisites_empty_catalog() {
    let mut catalog = CourseCatalog::new();
    assert!(catalog.find_missing_prerequisites().is_none());
    assert!(!catalog.is_sorted());
}

#[test]
fn test_find_missing_prerequisites_first_in_number_order() {
    let mut catalog = CourseCatalog::new();
    catalog.load_lines(["Z1,Last,NOPE", "B1,Middle", "A1,First,MISSING"], ',');

    assert_eq!(catalog.find_missing_prerequisites().unwrap().number, "A1");
}

#[test]
fn test_spaces_only_prerequisite_never_resolves() {
    let mut catalog = CourseCatalog::new();
    catalog.load_lines(["A1,Intro,  ", "A2,Advanced,A1"], ',');

    assert_eq!(catalog.find_missing_prerequisites().unwrap().number, "A1");
    assert_eq!(
        catalog.missing_prerequisites(),
        vec![MissingPrerequisite {
            course_number: "A1".to_string(),
            prerequisite: String::new(),
        }]
    );
}

#[test]
fn test_missing_prerequisites_lists_every_reference() {
    let mut catalog = CourseCatalog::new();
    catalog.load_lines(["B1,Second,X9,A1", "A1,First,Y9,Z9"], ',');

    let missing = catalog.missing_prerequisites();
    assert_eq!(
        missing,
        vec![
            MissingPrerequisite {
                course_number: "A1".to_string(),
                prerequisite: "Y9".to_string(),
            },
            MissingPrerequisite {
                course_number: "A1".to_string(),
                prerequisite: "Z9".to_string(),
            },
            MissingPrerequisite {
                course_number: "B1".to_string(),
                prerequisite: "X9".to_string(),
            },
        ]
    );
}

#[test]
fn test_listing_sorted_without_prerequisites() {
    let mut catalog = create_sample_catalog();
    let listing = catalog.listing();

    assert_eq!(listing.len(), SAMPLE_LINES.len());
    assert_eq!(listing[0], "CSCI100, Introduction to Computer Science");
    assert_eq!(listing[7], "MATH201, Discrete Mathematics");

    for (line, number) in listing.iter().zip(SAMPLE_NUMBERS_SORTED) {
        assert!(line.starts_with(&format!("{}, ", number)));
        assert!(!line.contains('\n'));
    }
}

#[test]
fn test_courses_returns_sorted_slice() {
    let mut catalog = create_sample_catalog();
    let numbers: Vec<&str> = catalog.courses().iter().map(|c| c.number.as_str()).collect();
    assert_eq!(numbers, SAMPLE_NUMBERS_SORTED);
}

#[test]
fn test_describe_with_resolved_prerequisites() {
    let mut catalog = create_sample_catalog();

    assert_eq!(
        catalog.describe("CSCI400").unwrap(),
        "CSCI400, Large Software Development\n\
         Prerequisites: CSCI301, Advanced Programming in C++; CSCI350, Operating Systems"
    );
}

#[test]
fn test_describe_without_prerequisites() {
    let mut catalog = create_sample_catalog();

    assert_eq!(
        catalog.describe("MATH201").unwrap(),
        "MATH201, Discrete Mathematics\nPrerequisites: None"
    );
}

#[test]
fn test_describe_partially_and_fully_unresolved() {
    let mut catalog = CourseCatalog::new();
    catalog.load_lines(["A1,Intro,GONE,A2", "A2,Advanced", "A3,Broken,GONE"], ',');

    assert_eq!(
        catalog.describe("A1").unwrap(),
        "A1, Intro\nPrerequisites: GONE (not found); A2, Advanced"
    );
    assert_eq!(
        catalog.describe("A3").unwrap(),
        "A3, Broken\nPrerequisites: Error: Prerequisites expected, but none found"
    );
}

#[test]
fn test_describe_unknown_course() {
    let mut catalog = create_sample_catalog();
    assert!(catalog.describe("NOPE100").is_none());

    let mut empty = CourseCatalog::new();
    assert!(empty.describe("NOPE100").is_none());
}
