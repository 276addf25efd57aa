//! Command implementations for the course planner CLI
//!
//! This module contains the command execution logic for the CLI interface.
//! Each command is implemented in its own module.

pub mod interactive;
pub mod list;
pub mod shared;
pub mod show;
pub mod validate;

pub use shared::CommandSummary;

use crate::cli::args::Commands;

/// Main command runner for the course planner
///
/// Dispatches to the subcommand handler:
/// - `list`: sorted course listing
/// - `show`: one course with resolved prerequisites
/// - `validate`: prerequisite integrity report
/// - `interactive`: menu-driven planner
pub fn run(command: Commands) -> anyhow::Result<CommandSummary> {
    shared::setup_logging(command.common())?;

    let summary = match command {
        Commands::List(list_args) => list::run_list(list_args)?,
        Commands::Show(show_args) => show::run_show(show_args)?,
        Commands::Validate(validate_args) => validate::run_validate(validate_args)?,
        Commands::Interactive(interactive_args) => interactive::run_interactive(interactive_args)?,
    };

    Ok(summary)
}
