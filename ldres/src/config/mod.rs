//! Configuration system for ldres.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of bounds, parent locales and grammar rules
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`LDRES_*`)
//! 3. Private project config (`ldres.local.yaml`)
//! 4. Project config (`ldres.yaml`)
//! 5. User config (`~/.ldres/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use ldres::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use ldres::config::{Config, ConfigBuilder};
//! use ldres::ResolveOptions;
//!
//! let custom: Config = serde_yaml::from_str(
//!     "resolution:\n  implicit_count_fallback: false\n",
//! ).unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! let options = ResolveOptions::from_config(&config);
//! assert!(!options.implicit_count_fallback);
//! assert_eq!(options.max_alias_hops, 40);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{
    Config, GrammarConfig, ResolutionConfig, DEFAULT_MAX_ALIAS_HOPS, DEFAULT_MAX_CLOSURE_ROUNDS,
};
pub use validator::ConfigValidator;
