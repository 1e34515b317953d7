//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, snapshot catalog loading, argument
//! parsing and output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use ldres::output::OutputFormat;
use ldres::path::Grammar;
use ldres::snapshot::load_catalog;
use ldres::{Config, ConfigBuilder, LocaleCatalog, LocaleId, Path, ResolvingView};
use std::path::PathBuf;
use std::sync::Arc;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the snapshot directory.
    pub data_dir: Option<PathBuf>,
}

/// Output format accepted on the command line.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. `ldres.local.yaml`, then `ldres.yaml`, found walking up from the CWD
/// 3. `~/.ldres/config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(_global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The snapshot directory to read.
///
/// Priority: `--data-dir` (or `LDRES_DATA_DIR`) > `data_dir` from configuration.
pub fn resolve_data_dir(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    global
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .ok_or(CliError::NoDataDirectory)
}

/// The path grammar described by `config`.
pub fn grammar(config: &Config) -> Grammar {
    config
        .grammar
        .as_ref()
        .map_or_else(|| Grammar::ldml().clone(), Grammar::with_config)
}

/// Load configuration and every snapshot in the data directory.
pub fn open_catalog(global: &GlobalOptions) -> Result<(Config, Arc<LocaleCatalog>), CliError> {
    let config = load_configuration(global)?;
    let data_dir = resolve_data_dir(global, &config)?;

    if !data_dir.is_dir() {
        return Err(CliError::InvalidArguments(format!(
            "Data directory not found: {}",
            data_dir.display()
        )));
    }

    let catalog = load_catalog(&data_dir, &config)?;
    log::debug!(
        "loaded {} locales from {}",
        catalog.len(),
        data_dir.display()
    );
    Ok((config, Arc::new(catalog)))
}

/// Open a resolving view for `locale`.
pub fn open_view(global: &GlobalOptions, locale: &str) -> Result<(Config, ResolvingView), CliError> {
    let locale = parse_locale(locale)?;
    let (config, catalog) = open_catalog(global)?;
    let view = catalog.view(&locale)?;
    Ok((config, view))
}

/// Parse a locale id given on the command line.
pub fn parse_locale(id: &str) -> Result<LocaleId, CliError> {
    LocaleId::new(id).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Parse a path given on the command line.
pub fn parse_path(grammar: &Grammar, path: &str) -> Result<Path, CliError> {
    grammar
        .parse(path)
        .map_err(|e| CliError::InvalidArguments(e.to_string()))
}
