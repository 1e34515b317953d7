//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which reports the value that
//! applies to a path in a locale and where it came from.

use crate::error::CliError;
use crate::utils::{grammar, open_view, parse_path, FormatArg, GlobalOptions};
use clap::Args;
use ldres::output::{OutputFormat, ResolutionReport};

/// Resolve a path in a locale.
#[derive(Args)]
pub struct ResolveCommand {
    /// Locale to resolve in
    #[arg(long, short = 'l', value_name = "LOCALE")]
    pub locale: String,

    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: FormatArg,

    /// Fail with exit code 1 if no value applies
    #[arg(long)]
    pub require: bool,

    /// Include every lookup and redirection step
    #[arg(long)]
    pub trace: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, view) = open_view(global, &self.locale)?;
        let query = parse_path(&grammar(&config), &self.path)?;

        let report = ResolutionReport::build(&view, &query, self.trace)?;
        if self.require && report.value.is_none() {
            return Err(CliError::SemanticFailure(format!(
                "No value for {} in {}",
                report.query, report.locale
            )));
        }

        let formatter = OutputFormat::from(self.format).create_formatter();
        println!("{}", formatter.format_resolution(&report)?);
        Ok(())
    }
}
