//! Aliases command implementation.
//!
//! This module implements the `aliases` command, which lists the alias
//! directives found in the root snapshot.

use crate::error::CliError;
use crate::utils::{open_catalog, FormatArg, GlobalOptions};
use clap::Args;
use ldres::{AliasDirective, Error, LocaleId};
use serde::Serialize;

/// List the alias directives of the root locale.
#[derive(Args)]
pub struct AliasesCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: FormatArg,
}

/// One directive as printed in JSON.
#[derive(Serialize)]
struct AliasRow {
    old: String,
    new: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
}

impl From<&AliasDirective> for AliasRow {
    fn from(directive: &AliasDirective) -> Self {
        Self {
            old: directive.old_path().to_string(),
            new: directive.new_path().to_string(),
            locale: directive.target_locale().map(ToString::to_string),
        }
    }
}

impl AliasesCommand {
    /// Execute the aliases command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_config, catalog) = open_catalog(global)?;
        let root = catalog
            .get(&LocaleId::root())
            .ok_or(CliError::Library(Error::MissingRoot))?;

        let rows: Vec<AliasRow> = root
            .aliases()
            .map(|aliases| aliases.iter().map(AliasRow::from).collect())
            .unwrap_or_default();

        match self.format {
            FormatArg::Text => format_as_text(&rows),
            FormatArg::Json => {
                let json = serde_json::to_string_pretty(&rows).map_err(std::io::Error::from)?;
                println!("{json}");
            }
        }
        Ok(())
    }
}

fn format_as_text(rows: &[AliasRow]) {
    if rows.is_empty() {
        println!("No aliases.");
        return;
    }

    for row in rows {
        match &row.locale {
            Some(locale) => println!("{} -> {} ({locale})", row.old, row.new),
            None => println!("{} -> {}", row.old, row.new),
        }
    }
}
