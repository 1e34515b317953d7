//! Builder assembling the final configuration from every source.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// # Examples
///
/// ```
/// use ldres::config::{Config, ConfigBuilder, ResolutionConfig};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         resolution: Some(ResolutionConfig {
///             max_alias_hops: Some(8),
///             ..Default::default()
///         }),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.resolution.unwrap().max_alias_hops, Some(8));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads files and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to start the project config search from.
    ///
    /// Defaults to the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml`, replacing `~/.ldres`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Skip configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skip `LDRES_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds a programmatic override; later overrides win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merges every source, applies the environment and validates.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is invalid, or the merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources: Vec<ConfigSource> = Vec::new();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir().map_err(Error::Io)?,
            };
            sources.extend(ConfigLoader::load_all(
                &working_dir,
                self.user_dir.as_deref(),
            )?);
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for override_config in &self.overrides {
            ConfigMerger::merge_into(&mut config, override_config);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
