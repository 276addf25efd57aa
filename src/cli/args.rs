//! Command-line argument definitions for the course planner
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::Config;
use crate::constants::{DEFAULT_DELIMITER, LOG_LEVEL_ERROR, LOG_LEVEL_INFO, LOG_LEVEL_WARN};
use crate::Result;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the course planner
///
/// Loads a course catalog from a delimited text file and lists courses,
/// looks them up, or checks that every prerequisite exists.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "course-planner",
    version,
    about = "Load a course catalog, list courses, look them up, and check prerequisites",
    long_about = "Reads course records (number, name, prerequisites) from a comma-delimited \
                  text file into memory. Courses are sorted on demand and looked up by number \
                  with binary search. Prerequisite references can be checked against the \
                  loaded catalog to find courses that name courses which do not exist."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the course planner
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print every course in ascending number order
    List(ListArgs),
    /// Print one course with its resolved prerequisites
    Show(ShowArgs),
    /// Check that every prerequisite resolves to a loaded course
    Validate(ValidateArgs),
    /// Run the menu-driven course planner
    Interactive(InteractiveArgs),
}

/// Options shared by every subcommand
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Course file to load
    ///
    /// One course per line: number, name, then any prerequisite numbers.
    /// Defaults to "CS 300 ABCU_Advising_Program_Input.csv" in the working directory.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        help = "Course file to load"
    )]
    pub file: Option<PathBuf>,

    /// Field delimiter used in the course file
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "CHAR",
        default_value_t = DEFAULT_DELIMITER,
        help = "Field delimiter used in the course file"
    )]
    pub delimiter: char,

    /// Report elapsed time for loading, sorting, and lookups
    #[arg(long = "timing", help = "Report elapsed time for catalog operations")]
    pub timing: bool,

    /// Show a spinner while the course file loads
    #[arg(long = "progress", help = "Show a spinner while loading")]
    pub progress: bool,

    /// Output format for results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the list command
#[derive(Debug, Clone, Parser)]
pub struct ListArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// Course number to look up (case and surrounding spaces are ignored)
    #[arg(value_name = "COURSE")]
    pub course: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the interactive command
#[derive(Debug, Clone, Parser)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Output formats for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl CommonArgs {
    /// Build and validate the configuration these arguments describe
    pub fn to_config(&self) -> Result<Config> {
        let mut config = Config::default().with_delimiter(self.delimiter);

        if let Some(file) = &self.file {
            config = config.with_course_file(file.clone());
        }
        if self.timing {
            config = config.with_timing();
        }
        if self.progress && !self.quiet {
            config = config.with_progress();
        }

        config.validate()?;
        Ok(config)
    }

    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            LOG_LEVEL_ERROR
        } else {
            match self.verbose {
                0 => LOG_LEVEL_WARN,
                1 => LOG_LEVEL_INFO,
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl Commands {
    /// Get the options shared by every subcommand
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::List(args) => &args.common,
            Commands::Show(args) => &args.common,
            Commands::Validate(args) => &args.common,
            Commands::Interactive(args) => &args.common,
        }
    }
}
