//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading ldres configuration files
//! from various locations with proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project configuration file name.
pub const PROJECT_CONFIG: &str = "ldres.yaml";

/// Private project configuration file name.
pub const LOCAL_CONFIG: &str = "ldres.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use ldres::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.ldres/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use ldres::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.ldres/config.yaml` (precedence 1)
    /// 2. Project `ldres.yaml` files walking up from `working_dir` (precedence 2)
    /// 3. Project `ldres.local.yaml` files (precedence 3)
    ///
    /// `user_dir` overrides the directory the user config is loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_dir)? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);

        // Highest precedence last
        sources.sort_by_key(|s| s.precedence);

        log::debug!("loaded {} configuration sources", sources.len());
        Ok(sources)
    }

    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match Self::user_config_path() {
                Some(path) => path,
                None => return Ok(None),
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either `ldres.yaml` or
    /// `ldres.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            let mut found_any = false;

            for (name, precedence) in [(PROJECT_CONFIG, 2), (LOCAL_CONFIG, 3)] {
                let candidate = current.join(name);
                if candidate.exists() {
                    let config = Self::load_file(&candidate)?;
                    configs.push(ConfigSource {
                        path: candidate,
                        precedence,
                        config,
                    });
                    found_any = true;
                }
            }

            if found_any || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file cannot be read and
    /// [`Error::Configuration`] if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(serde_yaml::from_str(&contents)?)
    }

    /// `~/.ldres/config.yaml`, if a home directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".ldres").join("config.yaml"))
    }
}
