use clap::Parser;
use course_planner::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(_summary) => {
            // Success - results have already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Course Planner - Course Catalog Lookup and Validation");
    println!("=====================================================");
    println!();
    println!("Load course records (number, name, prerequisites) from a comma-delimited");
    println!("file, then list them in order, look one up, or check its prerequisites.");
    println!();
    println!("USAGE:");
    println!("    course-planner <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    list         Print every course in ascending number order");
    println!("    show         Print one course with its resolved prerequisites");
    println!("    validate     Check that every prerequisite resolves to a loaded course");
    println!("    interactive  Run the menu-driven course planner");
    println!("    help         Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # List all courses from the default file:");
    println!("    course-planner list");
    println!();
    println!("    # Look up a course in a specific file, with timing:");
    println!("    course-planner show csci300 --file courses.csv --timing");
    println!();
    println!("    # Check prerequisites and emit JSON:");
    println!("    course-planner validate --file courses.csv --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    course-planner <COMMAND> --help");
}
