//! YAML snapshots of locale stores.
//!
//! A snapshot holds one locale's entries as path strings:
//!
//! ```yaml
//! locale: en_GB
//! inheriting: true
//! entries:
//!   - path: '//ldml/foo[@draft="contributed"]'
//!     value: X
//!     comment: optional
//! ```
//!
//! [`load_catalog`] reads every `*.yaml` snapshot in a directory into a
//! [`LocaleCatalog`].

use std::fs;
use std::path::Path as FilePath;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::chain::LocaleCatalog;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::locale::{LocaleId, ParentLocales};
use crate::path::Grammar;
use crate::store::PathStore;
use crate::view::ResolveOptions;

const SNAPSHOT_EXTENSIONS: &[&str] = &["yaml", "yml"];

fn default_inheriting() -> bool {
    true
}

/// One stored value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotEntry {
    /// The decorated path.
    pub path: String,
    /// The value.
    pub value: String,
    /// Optional comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A locale store in serialized form.
///
/// # Examples
///
/// ```
/// use ldres::path::Grammar;
/// use ldres::snapshot::StoreSnapshot;
/// use ldres::Path;
///
/// let snapshot: StoreSnapshot = serde_yaml::from_str(r#"
/// locale: de
/// entries:
///   - path: //ldml/foo
///     value: X
/// "#).unwrap();
///
/// let store = snapshot.into_store(Grammar::ldml()).unwrap();
/// assert!(store.is_inheriting());
/// assert_eq!(store.get(&Path::parse("//ldml/foo").unwrap()), Some("X"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSnapshot {
    /// The store's locale.
    pub locale: LocaleId,
    /// `false` for supplemental data that never joins a chain.
    #[serde(default = "default_inheriting")]
    pub inheriting: bool,
    /// The stored values.
    #[serde(default)]
    pub entries: Vec<SnapshotEntry>,
}

impl StoreSnapshot {
    /// Reads a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file cannot be read and
    /// [`Error::Configuration`] if it is not a valid snapshot.
    pub fn load(path: &FilePath) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Builds a frozen store, parsing paths with `grammar`.
    ///
    /// Later entries for the same identity path replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPath`] for an unparsable path, or the alias
    /// errors of [`crate::PathStoreBuilder::freeze`] for a root snapshot.
    pub fn into_store(self, grammar: &Grammar) -> Result<PathStore> {
        self.into_store_with(Arc::new(grammar.clone()))
    }

    /// [`StoreSnapshot::into_store`] with a shared grammar.
    ///
    /// # Errors
    ///
    /// See [`StoreSnapshot::into_store`].
    pub fn into_store_with(self, grammar: Arc<Grammar>) -> Result<PathStore> {
        let mut builder = PathStore::builder(self.locale).with_grammar(Arc::clone(&grammar));
        if !self.inheriting {
            builder = builder.non_inheriting();
        }

        for entry in self.entries {
            let decorated = grammar.parse(&entry.path)?;
            let identity = decorated.identity();
            builder.put(identity.clone(), decorated, entry.value)?;
            if let Some(comment) = entry.comment {
                builder.set_comment(&identity, comment);
            }
        }

        builder.freeze()
    }
}

/// Loads every snapshot in `dir` into a catalog configured by `config`.
///
/// The grammar, parent overrides and resolution options all come from
/// `config`. Files are read in name order.
///
/// # Errors
///
/// Returns an error if the directory or a snapshot cannot be read, a snapshot
/// is invalid, the configuration's parent table is malformed, or two
/// snapshots name the same locale.
pub fn load_catalog(dir: &FilePath, config: &Config) -> Result<LocaleCatalog> {
    let grammar = Arc::new(match &config.grammar {
        Some(grammar) => Grammar::with_config(grammar),
        None => Grammar::ldml().clone(),
    });
    let parents = match &config.parent_locales {
        Some(table) => ParentLocales::from_strings(table)?,
        None => ParentLocales::default(),
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|source| Error::Read {
        path: dir.to_path_buf(),
        source,
    })? {
        let path = entry?.path();
        let is_snapshot = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SNAPSHOT_EXTENSIONS.contains(&ext));
        if is_snapshot && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut catalog = LocaleCatalog::new()
        .with_parents(parents)
        .with_options(ResolveOptions::from_config(config));

    for file in &files {
        let store = StoreSnapshot::load(file)?.into_store_with(Arc::clone(&grammar))?;
        let locale = store.locale().clone();
        if catalog.insert(store).is_some() {
            return Err(Error::Validation {
                field: file.display().to_string(),
                message: format!("duplicate snapshot for locale {locale}"),
            });
        }
    }

    log::debug!("loaded {} snapshots from {}", files.len(), dir.display());
    Ok(catalog)
}
