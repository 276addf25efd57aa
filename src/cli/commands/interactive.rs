//! Interactive menu implementation
//!
//! Prompts for a course file, then loops over a numbered menu to load the
//! file, print the course list, or look up a single course. Input and output
//! are generic so the loop can be driven from tests.

use super::shared::{CommandSummary, format_timing, open_course_file, timed};
use crate::app::services::course_catalog::{CourseCatalog, normalize};
use crate::cli::args::InteractiveArgs;
use crate::cli::commands::list::LISTING_HEADER;
use crate::config::Config;
use crate::constants::menu;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

/// Interactive command runner using stdin and stdout
pub fn run_interactive(args: InteractiveArgs) -> Result<CommandSummary> {
    let start_time = Instant::now();
    debug!("Interactive arguments: {:?}", args);

    let config = args.common.to_config()?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    let catalog = run_menu(&config, stdin.lock(), stdout.lock())?;

    Ok(CommandSummary {
        courses_loaded: catalog.len(),
        elapsed: start_time.elapsed(),
    })
}

/// Read one line, returning `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .context("Failed to read user input")?;

    if bytes == 0 {
        return Ok(None);
    }

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Drive the menu loop until the user exits or input ends
///
/// Returns the catalog as it stood when the loop finished.
pub fn run_menu<R: BufRead, W: Write>(
    config: &Config,
    mut input: R,
    mut output: W,
) -> Result<CourseCatalog> {
    let mut course_file = config.course_file.clone();
    let mut catalog = CourseCatalog::new();

    writeln!(
        output,
        "Enter a filename (and optional path) to read course data from,"
    )?;
    writeln!(
        output,
        "or press [Enter] to use the default: {}",
        course_file.display()
    )?;
    output.flush().context("Failed to flush output")?;

    if let Some(file_name) = read_line(&mut input)? {
        if !file_name.is_empty() {
            course_file = PathBuf::from(file_name);
        }
    }

    writeln!(output)?;
    writeln!(output)?;
    writeln!(output, "Welcome to the course planner.")?;

    loop {
        writeln!(output)?;
        writeln!(output, "Menu:")?;
        writeln!(
            output,
            "  {}. Load Data Structure. File [{}]",
            menu::LOAD,
            course_file.display()
        )?;
        writeln!(output, "  {}. Print Course List.", menu::PRINT_LIST)?;
        writeln!(output, "  {}. Print Course.", menu::PRINT_COURSE)?;
        writeln!(output, "  {}. Exit", menu::EXIT)?;
        write!(output, "What would you like to do? ")?;
        output.flush().context("Failed to flush output")?;

        let Some(raw_choice) = read_line(&mut input)? else {
            writeln!(output)?;
            break;
        };
        let choice = raw_choice.trim().parse::<u32>().unwrap_or(menu::INVALID);

        match choice {
            menu::LOAD => load_from_menu(config, &course_file, &mut catalog, &mut output)?,
            menu::PRINT_LIST => {
                if catalog.is_empty() {
                    writeln!(output, "No course data exists, please load course data first.")?;
                    continue;
                }
                writeln!(output, "{}", LISTING_HEADER)?;
                writeln!(output)?;

                let (listing, elapsed) = timed(|| catalog.listing());
                for line in listing {
                    writeln!(output, "{}", line)?;
                }
                if config.show_timing {
                    writeln!(output, "{}", format_timing("List", elapsed))?;
                }
            }
            menu::PRINT_COURSE => {
                if catalog.is_empty() {
                    writeln!(output, "No course data exists, please load course data first.")?;
                    continue;
                }
                write!(output, "Enter course number to search: ")?;
                output.flush().context("Failed to flush output")?;

                let query = read_line(&mut input)?.unwrap_or_default();
                let number = normalize(query.trim_start());

                let (description, elapsed) = timed(|| catalog.describe(&number));
                match description {
                    Some(description) => writeln!(output, "{}", description)?,
                    None => writeln!(output, "Course {} not found.", number)?,
                }
                if config.show_timing {
                    writeln!(output, "{}", format_timing("Search", elapsed))?;
                }
            }
            menu::EXIT => {
                writeln!(output, "Thank you for using the course planner!")?;
                break;
            }
            _ => writeln!(output, "{} is not a valid option.", raw_choice.trim())?,
        }
    }

    Ok(catalog)
}

/// Handle the load option: open the file and replace the catalog
fn load_from_menu<W: Write>(
    config: &Config,
    course_file: &Path,
    catalog: &mut CourseCatalog,
    output: &mut W,
) -> Result<()> {
    let reader = match open_course_file(course_file) {
        Ok(reader) => reader,
        Err(e) => {
            warn!("{}", e);
            writeln!(output, "ERROR: Could not open file")?;
            writeln!(output, "NO Courses loaded.")?;
            return Ok(());
        }
    };

    let (report, elapsed) = timed(|| catalog.load_reader(reader, config.delimiter));
    let report = match report {
        Ok(report) => report,
        Err(e) => {
            warn!("{}", e);
            writeln!(output, "ERROR: Could not read file")?;
            writeln!(output, "{} Courses loaded.", catalog.len())?;
            return Ok(());
        }
    };

    if let Some(failure) = &report.failure {
        writeln!(output, "Error parsing file line: {}", failure.line)?;
    }
    writeln!(output, "Courses loaded.")?;

    if config.show_timing {
        writeln!(output, "{}", format_timing("Load", elapsed))?;
    }
    Ok(())
}
