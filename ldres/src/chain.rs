//! Inheritance chains and the locale catalog.
//!
//! An [`InheritanceChain`] lists the stores consulted for a locale, most
//! specific first and `root` last. A [`LocaleCatalog`] owns the frozen stores
//! of many locales and builds chains and views from them.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::locale::{LocaleId, ParentLocales};
use crate::store::PathStore;
use crate::view::{ResolveOptions, ResolvingView};

/// Ordered stores from a locale up to `root`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use ldres::{InheritanceChain, LocaleId, PathStore};
///
/// let root = Arc::new(PathStore::builder(LocaleId::root()).freeze().unwrap());
/// let en = Arc::new(PathStore::builder(LocaleId::new("en").unwrap()).freeze().unwrap());
///
/// let chain = InheritanceChain::new(vec![en, root]).unwrap();
/// assert_eq!(chain.locale().as_str(), "en");
/// assert_eq!(chain.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct InheritanceChain {
    stores: Vec<Arc<PathStore>>,
}

impl InheritanceChain {
    /// Creates a chain from explicit stores.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRoot`] if the last store is not `root`, and
    /// [`Error::Validation`] if any store is non-inheriting.
    pub fn new(stores: Vec<Arc<PathStore>>) -> Result<Self> {
        match stores.last() {
            Some(last) if last.locale().is_root() => {}
            _ => return Err(Error::MissingRoot),
        }
        if let Some(store) = stores.iter().find(|s| !s.is_inheriting()) {
            return Err(Error::Validation {
                field: "chain".to_string(),
                message: format!("store {} is non-inheriting", store.locale()),
            });
        }
        Ok(Self { stores })
    }

    /// Builds the chain for `locale` by walking its lineage.
    ///
    /// Ancestors without a store are skipped; the requested locale and `root`
    /// must both be present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocale`] if `locale` has no store,
    /// [`Error::MissingRoot`] if `root` has none, and [`Error::InvalidLocale`]
    /// if the parent overrides form a cycle.
    pub fn build<F>(locale: &LocaleId, parents: &ParentLocales, lookup: F) -> Result<Self>
    where
        F: Fn(&LocaleId) -> Option<Arc<PathStore>>,
    {
        let lineage = parents.lineage(locale)?;
        let mut stores = Vec::with_capacity(lineage.len());

        for (depth, id) in lineage.iter().enumerate() {
            match lookup(id) {
                Some(store) => stores.push(store),
                None if depth == 0 => {
                    return Err(Error::UnknownLocale { id: id.to_string() });
                }
                None => log::debug!("{locale}: no store for ancestor {id}, skipping"),
            }
        }

        let chain = Self::new(stores)?;
        log::debug!("built chain {chain}");
        Ok(chain)
    }

    /// The locale of the first store.
    #[must_use]
    pub fn locale(&self) -> &LocaleId {
        self.stores[0].locale()
    }

    /// The stores, most specific first.
    #[must_use]
    pub fn stores(&self) -> &[Arc<PathStore>] {
        &self.stores
    }

    /// The `root` store at the end of the chain.
    #[must_use]
    pub fn root(&self) -> &Arc<PathStore> {
        &self.stores[self.stores.len() - 1]
    }

    /// Number of stores.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Always `false`: a chain holds at least `root`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// The chain without its first store, or `None` for a root-only chain.
    #[must_use]
    pub fn parent_chain(&self) -> Option<Self> {
        (self.stores.len() > 1).then(|| Self {
            stores: self.stores[1..].to_vec(),
        })
    }

    /// The tail of this chain starting at `locale`, if it is a member.
    #[must_use]
    pub fn suffix_from(&self, locale: &LocaleId) -> Option<Self> {
        let start = self.stores.iter().position(|s| s.locale() == locale)?;
        Some(Self {
            stores: self.stores[start..].to_vec(),
        })
    }
}

impl std::fmt::Display for InheritanceChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<_> = self.stores.iter().map(|s| s.locale().as_str()).collect();
        f.write_str(&ids.join(" -> "))
    }
}

/// Frozen stores for many locales.
///
/// Inheriting stores feed chains; non-inheriting (supplemental) stores are kept
/// apart and never join one. Views built from a catalog can follow aliases
/// that name another locale.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use ldres::{LocaleCatalog, LocaleId, Path, PathStore};
///
/// let mut root = PathStore::builder(LocaleId::root());
/// root.put_decorated(Path::parse("//ldml/foo").unwrap(), "V0");
///
/// let mut catalog = LocaleCatalog::new();
/// catalog.insert(root.freeze().unwrap());
/// catalog.insert(PathStore::builder(LocaleId::new("en").unwrap()).freeze().unwrap());
///
/// let view = Arc::new(catalog).view(&LocaleId::new("en").unwrap()).unwrap();
/// let foo = Path::parse("//ldml/foo").unwrap();
/// assert_eq!(view.value(&foo).unwrap().as_deref(), Some("V0"));
/// ```
#[derive(Debug, Default)]
pub struct LocaleCatalog {
    stores: HashMap<LocaleId, Arc<PathStore>>,
    supplemental: HashMap<LocaleId, Arc<PathStore>>,
    parents: ParentLocales,
    options: ResolveOptions,
}

impl LocaleCatalog {
    /// Creates an empty catalog with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parent overrides used when building chains.
    #[must_use]
    pub fn with_parents(mut self, parents: ParentLocales) -> Self {
        self.parents = parents;
        self
    }

    /// Sets the options handed to every view.
    #[must_use]
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// The parent overrides.
    #[must_use]
    pub fn parents(&self) -> &ParentLocales {
        &self.parents
    }

    /// Registers a frozen store, returning any store it replaces.
    pub fn insert(&mut self, store: PathStore) -> Option<Arc<PathStore>> {
        let locale = store.locale().clone();
        let store = Arc::new(store);
        if store.is_inheriting() {
            self.stores.insert(locale, store)
        } else {
            self.supplemental.insert(locale, store)
        }
    }

    /// The inheriting store for `locale`.
    #[must_use]
    pub fn get(&self, locale: &LocaleId) -> Option<Arc<PathStore>> {
        self.stores.get(locale).cloned()
    }

    /// The supplemental store for `locale`.
    #[must_use]
    pub fn supplemental(&self, locale: &LocaleId) -> Option<Arc<PathStore>> {
        self.supplemental.get(locale).cloned()
    }

    /// Locales with an inheriting store, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<LocaleId> {
        let mut locales: Vec<_> = self.stores.keys().cloned().collect();
        locales.sort();
        locales
    }

    /// Number of inheriting stores.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Returns `true` if no inheriting store is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Builds the inheritance chain for `locale`.
    ///
    /// # Errors
    ///
    /// See [`InheritanceChain::build`].
    pub fn chain(&self, locale: &LocaleId) -> Result<InheritanceChain> {
        InheritanceChain::build(locale, &self.parents, |id| self.get(id))
    }

    /// Builds a resolving view for `locale`.
    ///
    /// # Errors
    ///
    /// See [`InheritanceChain::build`].
    pub fn view(self: &Arc<Self>, locale: &LocaleId) -> Result<ResolvingView> {
        let chain = self.chain(locale)?;
        Ok(ResolvingView::new(chain)
            .with_options(self.options.clone())
            .with_catalog(Arc::clone(self)))
    }
}
