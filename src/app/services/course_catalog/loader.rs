//! Bulk loading of catalog lines
//!
//! Loading replaces the catalog contents and stops at the first line that
//! does not parse. Courses inserted before that line stay in the catalog;
//! lines after it are never looked at.

use super::CourseCatalog;
use super::metadata::{LineFailure, LoadReport};
use super::parser::parse_course_line;
use crate::{Error, Result};
use std::borrow::Cow;
use std::collections::HashSet;
use std::io::BufRead;
use std::time::Instant;
use tracing::{debug, info, warn};

impl CourseCatalog {
    /// Replace the catalog with courses parsed from `lines`
    ///
    /// The catalog is cleared before the first line is read, so earlier data
    /// is discarded even if the very first line fails. A parse failure is not
    /// an error: it is returned in [`LoadReport::failure`] and the catalog keeps
    /// the courses loaded up to that point.
    ///
    /// # Examples
    /// ```
    /// use course_planner::CourseCatalog;
    ///
    /// let mut catalog = CourseCatalog::new();
    /// let report = catalog.load_lines(["A1,Intro", "BAD_LINE", "A2,Advanced"], ',');
    ///
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(report.failure.unwrap().line, "BAD_LINE");
    /// ```
    pub fn load_lines<I, S>(&mut self, lines: I, delimiter: char) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let report = self.fill_from_lines(lines, delimiter);
        log_load_summary(&report);
        report
    }

    /// Clear the catalog and insert parsed lines until one fails
    fn fill_from_lines<I, S>(&mut self, lines: I, delimiter: char) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start_time = Instant::now();
        let mut report = LoadReport::new();
        let mut seen_numbers = HashSet::new();

        self.clear();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            report.lines_read += 1;

            let course = match parse_course_line(line, delimiter) {
                Ok(course) => course,
                Err(reason) => {
                    warn!("Error parsing line {}: '{}' ({})", index + 1, line, reason);
                    report.failure = Some(LineFailure {
                        line_number: index + 1,
                        line: line.to_string(),
                        reason,
                    });
                    break;
                }
            };

            if !seen_numbers.insert(course.number.clone()) {
                warn!(
                    "Duplicate course number {} on line {}, lookups for it are ambiguous",
                    course.number,
                    index + 1
                );
                report.duplicate_numbers += 1;
            }

            // Parsed courses always satisfy the insert check
            if let Err(e) = self.insert(course) {
                debug!("Insert rejected on line {}: {}", index + 1, e);
                continue;
            }
            report.courses_loaded += 1;
        }

        report.load_duration = start_time.elapsed();
        report
    }

    /// Replace the catalog with courses read line by line from `reader`
    ///
    /// Lines end at `\n` with an optional preceding `\r`. Bytes that are not
    /// valid UTF-8 are replaced with U+FFFD rather than failing the load.
    ///
    /// # Errors
    /// * Returns `Error::Io` if reading from `reader` fails; courses loaded up
    ///   to that point stay in the catalog
    pub fn load_reader<R: BufRead>(&mut self, mut reader: R, delimiter: char) -> Result<LoadReport> {
        let mut read_error = None;
        let mut buffer = Vec::new();
        let mut line_number = 0;

        let lines = std::iter::from_fn(|| {
            buffer.clear();
            match reader.read_until(b'\n', &mut buffer) {
                Ok(0) => None,
                Ok(_) => {
                    line_number += 1;
                    let line = decode_line(&buffer);
                    if let Cow::Owned(_) = line {
                        warn!("Line {} is not valid UTF-8, invalid bytes replaced", line_number);
                    }
                    Some(line.into_owned())
                }
                Err(e) => {
                    read_error = Some(e);
                    None
                }
            }
        });

        let report = self.fill_from_lines(lines, delimiter);

        if let Some(e) = read_error {
            warn!(
                "Reading stopped after {} lines, {} courses kept",
                report.lines_read, report.courses_loaded
            );
            return Err(Error::io("Failed to read course data", e));
        }

        log_load_summary(&report);
        Ok(report)
    }
}

/// Strip the line terminator and decode, replacing invalid UTF-8
fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let line = match bytes.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => bytes,
    };
    String::from_utf8_lossy(line)
}

fn log_load_summary(report: &LoadReport) {
    info!("{}", report.summary());
    debug!("Loading rate: {:.0} courses/sec", report.loading_rate());
}
