//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AliasesCommand, CanonicalizeCommand, ChainCommand, CompletionsCommand, PathsCommand,
    ResolveCommand, ValidateConfigCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting inherited, aliased locale data.
#[derive(Parser)]
#[command(name = "ldres")]
#[command(version, about = "Resolve inherited and aliased locale data", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory holding locale snapshot files
    #[arg(long, value_name = "PATH", global = true, env = "LDRES_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a path in a locale
    Resolve(ResolveCommand),

    /// List the resolvable paths of a locale
    Paths(PathsCommand),

    /// Show the inheritance chain of a locale
    Chain(ChainCommand),

    /// Print the canonical form of a path
    Canonicalize(CanonicalizeCommand),

    /// List the root alias directives
    Aliases(AliasesCommand),

    /// Validate a configuration file
    ValidateConfig(ValidateConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
