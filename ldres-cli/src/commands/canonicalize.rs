//! Command to print the canonical form of a path.

use crate::error::CliError;
use crate::utils::{grammar, load_configuration, parse_path, GlobalOptions};
use clap::Args;

/// Print the canonical serialization of a path.
#[derive(Args)]
pub struct CanonicalizeCommand {
    /// Path to canonicalize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Drop decorative attributes
    #[arg(long)]
    pub identity: bool,
}

impl CanonicalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = parse_path(&grammar(&config), &self.path)?;

        if self.identity {
            println!("{}", path.identity());
        } else {
            println!("{path}");
        }
        Ok(())
    }
}
