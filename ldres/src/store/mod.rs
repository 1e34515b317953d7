//! Per-locale, unresolved path stores.
//!
//! A store maps identity paths to an [`Entry`] holding the value, the decorated
//! path it was loaded under, and an optional comment. Stores are populated
//! through a [`PathStoreBuilder`] and become immutable once frozen:
//!
//! ```
//! use ldres::{LocaleId, Path, PathStore};
//!
//! let mut builder = PathStore::builder(LocaleId::new("de").unwrap());
//! builder.put_decorated(Path::parse(r#"//ldml/foo[@draft="contributed"]"#).unwrap(), "X");
//! let store = builder.freeze().unwrap();
//!
//! let foo = Path::parse("//ldml/foo").unwrap();
//! assert_eq!(store.get(&foo), Some("X"));
//! assert_eq!(
//!     store.get_decorated(&foo).unwrap().to_string(),
//!     r#"//ldml/foo[@draft="contributed"]"#
//! );
//! ```
//!
//! Only the root store interprets alias paths; its alias map is built and
//! validated when it is frozen.

mod builder;
pub(crate) mod fallback;

use std::collections::HashMap;

use crate::alias::AliasMap;
use crate::locale::LocaleId;
use crate::path::Path;

pub use builder::PathStoreBuilder;
pub use fallback::code_fallback;

/// Attribute stripped by [`PathStore::winning_path`].
const DRAFT: &str = "draft";
const ALT: &str = "alt";
const PROPOSED: &str = "proposed";

/// A stored value with its decorated path and comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    value: String,
    decorated: Path,
    comment: Option<String>,
}

impl Entry {
    /// The stored value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The decorated path the value was loaded under.
    #[must_use]
    pub fn decorated(&self) -> &Path {
        &self.decorated
    }

    /// The comment attached to the value, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// An immutable, unresolved store for one locale.
///
/// Frozen stores are shared between chains and views through `Arc` and are
/// safe to read from many threads.
#[derive(Debug)]
pub struct PathStore {
    locale: LocaleId,
    inheriting: bool,
    entries: HashMap<Path, Entry>,
    aliases: Option<AliasMap>,
}

impl PathStore {
    /// Starts building an inheriting store for `locale`.
    #[must_use]
    pub fn builder(locale: LocaleId) -> PathStoreBuilder {
        PathStoreBuilder::new(locale)
    }

    /// The owning locale.
    #[must_use]
    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    /// `false` for supplemental stores that never join an inheritance chain.
    #[must_use]
    pub fn is_inheriting(&self) -> bool {
        self.inheriting
    }

    /// Number of stored paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value at an identity path.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&str> {
        self.entries.get(path).map(Entry::value)
    }

    /// The decorated path stored under an identity path.
    #[must_use]
    pub fn get_decorated(&self, path: &Path) -> Option<&Path> {
        self.entries.get(path).map(Entry::decorated)
    }

    /// The comment stored under an identity path.
    #[must_use]
    pub fn comment(&self, path: &Path) -> Option<&str> {
        self.entries.get(path).and_then(Entry::comment)
    }

    /// The full entry under an identity path.
    #[must_use]
    pub fn entry(&self, path: &Path) -> Option<&Entry> {
        self.entries.get(path)
    }

    /// Whether a value is stored under the identity path.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Identity paths, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys()
    }

    /// Entries ordered by canonical identity string.
    #[must_use]
    pub fn entries_sorted(&self) -> Vec<(&Path, &Entry)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by_cached_key(|(path, _)| path.identity_string());
        entries
    }

    /// The alias directives of this store. Empty unless this is the root store.
    #[must_use]
    pub fn aliases(&self) -> Option<&AliasMap> {
        self.aliases.as_ref()
    }

    /// Strips `draft` and `alt="...proposed..."` markers from `path`.
    ///
    /// Returns the stripped path if this store holds a value there, otherwise
    /// `path` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ldres::{LocaleId, Path, PathStore};
    ///
    /// let mut builder = PathStore::builder(LocaleId::new("fr").unwrap());
    /// builder.put_decorated(Path::parse(r#"//ldml/x[@alt="short"]"#).unwrap(), "v");
    /// let store = builder.freeze().unwrap();
    ///
    /// let proposed = Path::parse(r#"//ldml/x[@alt="short-proposed-x1"]"#).unwrap();
    /// assert_eq!(
    ///     store.winning_path(&proposed).to_string(),
    ///     r#"//ldml/x[@alt="short"]"#
    /// );
    /// ```
    #[must_use]
    pub fn winning_path(&self, path: &Path) -> Path {
        let stripped = strip_proposed(path);
        if !stripped.same_decoration(path) && self.contains(&stripped) {
            stripped
        } else {
            path.clone()
        }
    }
}

/// Removes draft markers and the proposed part of `alt` values.
pub(crate) fn strip_proposed(path: &Path) -> Path {
    let mut stripped = path.clone();
    for node in stripped.nodes_mut() {
        node.remove_attribute(DRAFT);
        let Some(alt) = node.attribute(ALT).map(str::to_string) else {
            continue;
        };
        match alt.find(PROPOSED) {
            None => {}
            Some(0) => {
                node.remove_attribute(ALT);
            }
            Some(at) => {
                let kept = alt[..at].trim_end_matches('-');
                node.set_attribute_value(ALT, kept);
            }
        }
    }
    stripped
}
