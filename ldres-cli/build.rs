//! Build script for ldres-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("ldres")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve inherited and aliased locale data")
        .long_about(
            "Command-line tool for resolving values in a directory of locale snapshots, \
             following inheritance chains and root aliases",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Directory holding locale snapshot files")
                .value_name("PATH")
                .global(true)
                .env("LDRES_DATA_DIR"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve a path in a locale")
                .long_about("Show the value that applies to a path, its origin and decorated form"),
            Command::new("paths")
                .about("List the resolvable paths of a locale")
                .long_about("List every path a locale can resolve, including aliased ones"),
            Command::new("chain")
                .about("Show the inheritance chain of a locale")
                .long_about("Show the locales searched, from the locale itself up to root"),
            Command::new("canonicalize")
                .about("Print the canonical form of a path")
                .long_about("Parse a path and print it with attributes in canonical order"),
            Command::new("aliases")
                .about("List the root alias directives")
                .long_about("List every alias found in the root snapshot"),
            Command::new("validate-config")
                .about("Validate a configuration file")
                .long_about("Check an ldres configuration file, or the merged configuration, for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("ldres.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
