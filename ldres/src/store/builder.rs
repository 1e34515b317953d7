//! Mutable construction of path stores.

use std::collections::HashMap;
use std::sync::Arc;

use crate::alias::{is_alias_path, AliasMap};
use crate::error::{Error, Result};
use crate::locale::LocaleId;
use crate::path::{Grammar, Path};
use crate::store::{Entry, PathStore};

/// Builder for a [`PathStore`].
///
/// This is the loader contract: a loader creates a builder, calls
/// [`put`](Self::put) once per datum, and finally [`freeze`](Self::freeze)s it.
/// Freezing consumes the builder, so a frozen store can never be mutated.
///
/// # Examples
///
/// ```
/// use ldres::{LocaleId, Path, PathStore};
///
/// let identity = Path::parse("//ldml/foo").unwrap();
/// let decorated = Path::parse(r#"//ldml/foo[@draft="contributed"]"#).unwrap();
///
/// let mut builder = PathStore::builder(LocaleId::root());
/// builder.put(identity.clone(), decorated, "X").unwrap();
/// builder.set_comment(&identity, "from survey");
///
/// let store = builder.freeze().unwrap();
/// assert_eq!(store.comment(&identity), Some("from survey"));
/// ```
#[derive(Debug)]
pub struct PathStoreBuilder {
    locale: LocaleId,
    inheriting: bool,
    grammar: Option<Arc<Grammar>>,
    entries: HashMap<Path, Entry>,
}

impl PathStoreBuilder {
    /// Creates an empty builder for an inheriting store.
    #[must_use]
    pub fn new(locale: LocaleId) -> Self {
        Self {
            locale,
            inheriting: true,
            grammar: None,
            entries: HashMap::new(),
        }
    }

    /// Marks the store as supplemental: it will never join a chain.
    #[must_use]
    pub fn non_inheriting(mut self) -> Self {
        self.inheriting = false;
        self
    }

    /// Sets the grammar used to interpret relative alias targets.
    ///
    /// Defaults to the LDML grammar.
    #[must_use]
    pub fn with_grammar(mut self, grammar: Arc<Grammar>) -> Self {
        self.grammar = Some(grammar);
        self
    }

    /// The locale the store is built for.
    #[must_use]
    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    /// Number of paths inserted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts or overwrites the value at `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdentityMismatch`] if `decorated` does not reduce to
    /// `identity`.
    pub fn put(&mut self, identity: Path, decorated: Path, value: impl Into<String>) -> Result<()> {
        if identity != decorated {
            return Err(Error::IdentityMismatch {
                identity: identity.to_string(),
                decorated: decorated.to_string(),
            });
        }

        let comment = self
            .entries
            .remove(&identity)
            .and_then(|previous| previous.comment);
        self.entries.insert(
            identity.identity(),
            Entry {
                value: value.into(),
                decorated,
                comment,
            },
        );
        Ok(())
    }

    /// Inserts or overwrites a value, deriving the identity path.
    pub fn put_decorated(&mut self, decorated: Path, value: impl Into<String>) -> &mut Self {
        let identity = decorated.identity();
        self.entries.insert(
            identity,
            Entry {
                value: value.into(),
                decorated,
                comment: None,
            },
        );
        self
    }

    /// Attaches a comment to an existing path. Returns `false` if absent.
    pub fn set_comment(&mut self, identity: &Path, comment: impl Into<String>) -> bool {
        match self.entries.get_mut(identity) {
            Some(entry) => {
                entry.comment = Some(comment.into());
                true
            }
            None => false,
        }
    }

    /// The value inserted at `identity`.
    #[must_use]
    pub fn get(&self, identity: &Path) -> Option<&str> {
        self.entries.get(identity).map(Entry::value)
    }

    /// The decorated path inserted at `identity`.
    #[must_use]
    pub fn get_decorated(&self, identity: &Path) -> Option<&Path> {
        self.entries.get(identity).map(Entry::decorated)
    }

    /// Removes a path, returning its value.
    pub fn remove(&mut self, identity: &Path) -> Option<String> {
        self.entries.remove(identity).map(|entry| entry.value)
    }

    /// Freezes the builder into an immutable store.
    ///
    /// For the inheriting `root` store this also discovers the alias map, so
    /// malformed aliases are reported here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlias`] if the root store holds a malformed or
    /// no-op alias.
    pub fn freeze(self) -> Result<PathStore> {
        let aliases = if self.locale.is_root() && self.inheriting {
            let grammar = match self.grammar.as_deref() {
                Some(grammar) => grammar,
                None => Grammar::ldml(),
            };
            Some(AliasMap::discover(self.entries.keys(), grammar)?)
        } else {
            let ignored = self.entries.keys().filter(|p| is_alias_path(p)).count();
            if ignored > 0 {
                log::debug!(
                    "{}: ignoring {ignored} alias paths outside the root store",
                    self.locale
                );
            }
            None
        };

        log::debug!("froze store {} with {} paths", self.locale, self.entries.len());
        Ok(PathStore {
            locale: self.locale,
            inheriting: self.inheriting,
            entries: self.entries,
            aliases,
        })
    }
}
