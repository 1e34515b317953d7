//! Command to show the inheritance chain of a locale.

use crate::error::CliError;
use crate::utils::{open_view, FormatArg, GlobalOptions};
use clap::Args;

/// Show the inheritance chain of a locale.
#[derive(Args)]
pub struct ChainCommand {
    /// Locale whose chain to show
    #[arg(long, short = 'l', value_name = "LOCALE")]
    pub locale: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: FormatArg,
}

impl ChainCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_config, view) = open_view(global, &self.locale)?;
        let locales: Vec<&str> = view
            .chain()
            .stores()
            .iter()
            .map(|store| store.locale().as_str())
            .collect();

        match self.format {
            FormatArg::Text => println!("{}", view.chain()),
            FormatArg::Json => {
                let json =
                    serde_json::to_string_pretty(&locales).map_err(std::io::Error::from)?;
                println!("{json}");
            }
        }
        Ok(())
    }
}
