//! Main entry point for the ldres CLI.
//!
//! This is the command-line interface for the ldres locale resolver.
//! It provides commands for inspecting a directory of locale snapshots:
//! - `resolve`: Resolve a path in a locale
//! - `paths`: List the resolvable paths of a locale
//! - `chain`: Show the inheritance chain of a locale
//! - `canonicalize`: Print the canonical form of a path
//! - `aliases`: List the root alias directives

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = ldres::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Paths(cmd) => cmd.execute(&global),
        cli::Command::Chain(cmd) => cmd.execute(&global),
        cli::Command::Canonicalize(cmd) => cmd.execute(&global),
        cli::Command::Aliases(cmd) => cmd.execute(&global),
        cli::Command::ValidateConfig(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
