//! Paths command implementation.
//!
//! This module implements the `paths` command, which lists every path a
//! locale can resolve, optionally with the values they resolve to.

use crate::error::CliError;
use crate::utils::{grammar, open_view, parse_path, FormatArg, GlobalOptions};
use clap::Args;
use ldres::output::OutputFormat;
use ldres::Path;

/// List the resolvable paths of a locale.
#[derive(Args)]
pub struct PathsCommand {
    /// Locale whose paths to list
    #[arg(long, short = 'l', value_name = "LOCALE")]
    pub locale: String,

    /// Only list paths under this prefix
    #[arg(long, value_name = "PATH")]
    pub prefix: Option<String>,

    /// Show resolved values next to each path
    #[arg(long)]
    pub values: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: FormatArg,
}

impl PathsCommand {
    /// Execute the paths command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, view) = open_view(global, &self.locale)?;
        let prefix = self
            .prefix
            .as_deref()
            .map(|p| parse_path(&grammar(&config), p).map(|p| p.identity()))
            .transpose()?;
        let under_prefix = |path: &Path| prefix.as_ref().map_or(true, |p| path.starts_with(p));

        let formatter = OutputFormat::from(self.format).create_formatter();
        let output = if self.values {
            let mut entries = view.resolved_entries()?;
            entries.retain(|entry| under_prefix(&entry.path));
            formatter.format_entries(&entries)?
        } else {
            let paths: Vec<Path> = view
                .all_resolvable_paths()?
                .iter()
                .filter(|path| under_prefix(path))
                .cloned()
                .collect();
            formatter.format_paths(&paths)?
        };

        println!("{output}");
        Ok(())
    }
}
