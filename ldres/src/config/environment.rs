//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `LDRES_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Overrides `resolution.max_alias_hops`.
pub const MAX_ALIAS_HOPS_ENV: &str = "LDRES_MAX_ALIAS_HOPS";
/// Overrides `resolution.max_closure_rounds`.
pub const MAX_CLOSURE_ROUNDS_ENV: &str = "LDRES_MAX_CLOSURE_ROUNDS";
/// Overrides `resolution.implicit_alt_fallback`.
pub const IMPLICIT_ALT_ENV: &str = "LDRES_IMPLICIT_ALT";
/// Overrides `resolution.implicit_count_fallback`.
pub const IMPLICIT_COUNT_ENV: &str = "LDRES_IMPLICIT_COUNT";
/// Overrides `data_dir`.
pub const DATA_DIR_ENV: &str = "LDRES_DATA_DIR";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use ldres::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a non-numeric bound or an invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        let mut resolution = config.resolution.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(val) = env::var(MAX_ALIAS_HOPS_ENV) {
            resolution.max_alias_hops = Some(Self::parse_count(MAX_ALIAS_HOPS_ENV, &val)?);
            modified = true;
        }

        if let Ok(val) = env::var(MAX_CLOSURE_ROUNDS_ENV) {
            resolution.max_closure_rounds = Some(Self::parse_count(MAX_CLOSURE_ROUNDS_ENV, &val)?);
            modified = true;
        }

        if let Ok(val) = env::var(IMPLICIT_ALT_ENV) {
            resolution.implicit_alt_fallback = Some(Self::parse_bool(IMPLICIT_ALT_ENV, &val)?);
            modified = true;
        }

        if let Ok(val) = env::var(IMPLICIT_COUNT_ENV) {
            resolution.implicit_count_fallback = Some(Self::parse_bool(IMPLICIT_COUNT_ENV, &val)?);
            modified = true;
        }

        if modified {
            config.resolution = Some(resolution);
        }

        if let Ok(dir) = env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        Ok(())
    }

    fn parse_count(field: &str, s: &str) -> Result<usize> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: "Must be a positive integer".into(),
        })
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
