//! In-place quicksort of courses by number
//!
//! Uses Hoare partitioning around the midpoint element. Course numbers are
//! compared as raw strings, so ordering is byte order rather than locale
//! order. The sort is not stable: courses that share a number may come out in
//! any relative order.

use crate::app::models::Course;

/// Sort `courses` ascending by number
pub fn quicksort_by_number(courses: &mut [Course]) {
    if courses.is_empty() {
        return;
    }

    let end = courses.len() - 1;
    quicksort(courses, 0, end);
}

/// Sort the inclusive range `[begin, end]`
///
/// Only the smaller side of each partition is sorted recursively; the larger
/// side is handled by the loop, so recursion depth stays logarithmic even
/// when every partition is maximally unbalanced.
fn quicksort(courses: &mut [Course], mut begin: usize, mut end: usize) {
    while begin < end {
        let boundary = partition(courses, begin, end);

        if boundary - begin < end - boundary {
            quicksort(courses, begin, boundary);
            begin = boundary + 1;
        } else {
            quicksort(courses, boundary + 1, end);
            end = boundary;
        }
    }
}

/// Partition `[begin, end]` around the midpoint number and return the boundary
///
/// On return every course in `[begin, boundary]` has a number no greater than
/// the pivot and every course in `[boundary + 1, end]` has a number no less
/// than it. The boundary is always strictly less than `end`.
fn partition(courses: &mut [Course], begin: usize, end: usize) -> usize {
    let midpoint = begin + (end - begin) / 2;
    // The pivot moves as elements are swapped, so hold its value
    let pivot = courses[midpoint].number.clone();

    let mut low = begin;
    let mut high = end;

    loop {
        while courses[low].number < pivot {
            low += 1;
        }
        while pivot < courses[high].number {
            high -= 1;
        }

        if low >= high {
            return high;
        }

        courses.swap(low, high);
        low += 1;
        high -= 1;
    }
}
