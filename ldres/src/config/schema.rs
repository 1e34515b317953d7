//! Configuration schema definitions.
//!
//! This module defines the configuration structure for ldres: resolution
//! bounds and fallbacks, parent-locale overrides, grammar extensions and the
//! snapshot data directory.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default bound on alias hops during point resolution.
pub const DEFAULT_MAX_ALIAS_HOPS: usize = 40;

/// Default bound on fixed-point rounds during key-space closure.
pub const DEFAULT_MAX_CLOSURE_ROUNDS: usize = 40;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use ldres::config::{Config, ResolutionConfig};
///
/// let config = Config {
///     resolution: Some(ResolutionConfig {
///         max_alias_hops: Some(10),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.resolution.unwrap().max_alias_hops, Some(10));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Resolution bounds and implicit fallbacks.
    pub resolution: Option<ResolutionConfig>,

    /// Explicit parent locales, child id to parent id.
    pub parent_locales: Option<BTreeMap<String, String>>,

    /// Extensions to the built-in path grammar.
    pub grammar: Option<GrammarConfig>,

    /// Directory holding locale snapshot files.
    pub data_dir: Option<PathBuf>,
}

/// Resolution settings.
///
/// # Examples
///
/// ```
/// use ldres::config::ResolutionConfig;
///
/// let config: ResolutionConfig = serde_yaml::from_str("max_alias_hops: 12").unwrap();
/// assert_eq!(config.max_alias_hops, Some(12));
/// assert_eq!(config.implicit_alt_fallback, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResolutionConfig {
    /// Maximum alias hops for one lookup.
    pub max_alias_hops: Option<usize>,

    /// Maximum fixed-point rounds when computing the key space.
    pub max_closure_rounds: Option<usize>,

    /// Retry paths carrying `alt` without it.
    pub implicit_alt_fallback: Option<bool>,

    /// Retry paths carrying `count` with `count="other"`.
    pub implicit_count_fallback: Option<bool>,
}

/// Grammar extensions.
///
/// Entries are attribute names (`alt`) or element-scoped names (`alias@path`).
///
/// # Examples
///
/// ```
/// use ldres::config::GrammarConfig;
///
/// let yaml = "decorative: [\"numbers\", \"unit@category\"]\n";
/// let config: GrammarConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.decorative.unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GrammarConfig {
    /// Attributes forced into identity.
    pub distinguishing: Option<Vec<String>>,

    /// Attributes forced out of identity.
    pub decorative: Option<Vec<String>>,

    /// Replacement canonical attribute order.
    pub attribute_order: Option<Vec<String>>,
}
