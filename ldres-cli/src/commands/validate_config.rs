//! Command to validate an ldres configuration file.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use ldres::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a configuration file, or the merged configuration if none is given.
#[derive(Args)]
pub struct ValidateConfigCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let Some(config_path) = self.config_path else {
            load_configuration(global)?;
            println!("Configuration is valid");
            return Ok(());
        };

        if !config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                config_path.display()
            )));
        }

        let config = match ConfigLoader::load_file(&config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        match ConfigValidator::validate(&config) {
            Ok(()) => {
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
