//! Locale identifiers and their parent relation.
//!
//! A locale id is a chain of subtags joined by `_`, such as `en_GB` or
//! `sr_Latn_RS`. Every id except `root` has exactly one parent, derived by
//! dropping the last subtag. An explicit [`ParentLocales`] table can override
//! the derived parent for individual locales.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const ROOT: &str = "root";
const FALLBACK: &str = "code-fallback";

/// A validated locale identifier.
///
/// # Examples
///
/// ```
/// use ldres::LocaleId;
///
/// let en_gb = LocaleId::new("en_GB").unwrap();
/// let en = en_gb.parent().unwrap();
/// assert_eq!(en.as_str(), "en");
/// assert!(en.parent().unwrap().is_root());
/// assert!(LocaleId::root().parent().is_none());
///
/// assert!(LocaleId::new("en__GB").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleId(String);

impl LocaleId {
    /// Creates a locale id after validating its subtags.
    ///
    /// Subtags must be non-empty and contain only ASCII letters, digits or `-`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLocale`] if the id is empty or a subtag is
    /// empty or contains other characters.
    pub fn new(id: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidLocale {
            id: id.to_string(),
            reason: reason.to_string(),
        };

        if id.is_empty() {
            return Err(invalid("empty locale id"));
        }
        for subtag in id.split('_') {
            if subtag.is_empty() {
                return Err(invalid("empty subtag"));
            }
            if !subtag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(invalid("subtags must be ASCII letters, digits or '-'"));
            }
        }

        Ok(Self(id.to_string()))
    }

    /// The `root` locale.
    #[must_use]
    pub fn root() -> Self {
        Self(ROOT.to_string())
    }

    /// Label of the synthetic code-fallback store.
    pub(crate) fn code_fallback() -> Self {
        Self(FALLBACK.to_string())
    }

    /// Returns `true` for the `root` locale.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The subtags of this identifier.
    pub fn subtags(&self) -> impl Iterator<Item = &str> {
        self.0.split('_')
    }

    /// The derived parent: drop the last subtag, single subtags go to `root`,
    /// and `root` has none.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.0.rsplit_once('_') {
            Some((parent, _)) => Some(Self(parent.to_string())),
            None => Some(Self::root()),
        }
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for LocaleId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<LocaleId> for String {
    fn from(id: LocaleId) -> Self {
        id.0
    }
}

/// Explicit parent overrides consulted before subtag truncation.
///
/// # Examples
///
/// ```
/// use ldres::{LocaleId, ParentLocales};
///
/// let mut parents = ParentLocales::default();
/// parents.insert(LocaleId::new("en_150").unwrap(), LocaleId::new("en_001").unwrap());
///
/// let lineage = parents.lineage(&LocaleId::new("en_150").unwrap()).unwrap();
/// let ids: Vec<_> = lineage.iter().map(LocaleId::as_str).collect();
/// assert_eq!(ids, ["en_150", "en_001", "en", "root"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentLocales {
    overrides: BTreeMap<LocaleId, LocaleId>,
}

impl ParentLocales {
    /// Builds the table from string pairs, as found in configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLocale`] if any id is malformed.
    pub fn from_strings(pairs: &BTreeMap<String, String>) -> Result<Self> {
        let mut table = Self::default();
        for (child, parent) in pairs {
            table.insert(LocaleId::new(child)?, LocaleId::new(parent)?);
        }
        Ok(table)
    }

    /// Adds or replaces an override.
    pub fn insert(&mut self, child: LocaleId, parent: LocaleId) {
        self.overrides.insert(child, parent);
    }

    /// Number of overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Returns `true` if there are no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// The parent of `locale`: the override if present, else the derived one.
    #[must_use]
    pub fn parent_of(&self, locale: &LocaleId) -> Option<LocaleId> {
        if locale.is_root() {
            return None;
        }
        self.overrides
            .get(locale)
            .cloned()
            .or_else(|| locale.parent())
    }

    /// `locale` followed by each successive parent, ending with `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLocale`] if the overrides form a cycle.
    pub fn lineage(&self, locale: &LocaleId) -> Result<Vec<LocaleId>> {
        let mut seen = HashSet::new();
        let mut lineage = Vec::new();
        let mut current = Some(locale.clone());

        while let Some(id) = current {
            if !seen.insert(id.clone()) {
                return Err(Error::InvalidLocale {
                    id: locale.to_string(),
                    reason: format!("parent cycle through {id}"),
                });
            }
            current = self.parent_of(&id);
            lineage.push(id);
        }

        Ok(lineage)
    }
}
