//! Resolving views.
//!
//! A [`ResolvingView`] answers "what value applies at this path, and where did
//! it come from" for one locale. It walks the locale's [`InheritanceChain`],
//! follows the root store's alias directives, applies the implicit `alt` and
//! `count` fallbacks, and finally consults the synthetic code-fallback store.
//!
//! Point results are memoized behind an upgradable lock; the complete key space
//! is computed once on first request.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use ldres::{InheritanceChain, LocaleId, Origin, Path, PathStore, ResolvingView};
//!
//! let mut root = PathStore::builder(LocaleId::root());
//! root.put_decorated(Path::parse(r#"//ldml/a/alias[@source="locale"][@path="../b"]"#).unwrap(), "");
//! root.put_decorated(Path::parse("//ldml/b/c").unwrap(), "Y");
//! let root = Arc::new(root.freeze().unwrap());
//!
//! let view = ResolvingView::new(InheritanceChain::new(vec![root]).unwrap());
//! let query = Path::parse("//ldml/a/c").unwrap();
//!
//! let location = view.resolve(&query).unwrap();
//! assert_eq!(location.path().to_string(), "//ldml/b/c");
//! assert!(matches!(location.origin(), Origin::Aliased { .. }));
//! assert_eq!(view.value(&query).unwrap().as_deref(), Some("Y"));
//! ```

mod closure;
mod resolve;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use serde::Serialize;

use crate::chain::{InheritanceChain, LocaleCatalog};
use crate::config::{Config, DEFAULT_MAX_ALIAS_HOPS, DEFAULT_MAX_CLOSURE_ROUNDS};
use crate::error::Result;
use crate::locale::LocaleId;
use crate::path::Path;
use crate::store::{code_fallback, PathStore};

use resolve::Resolved;

/// A stored value meaning "inherit from the parent", skipped during lookup.
pub const INHERITANCE_MARKER: &str = "↑↑↑";

/// Bounds and switches for resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Alias hops allowed for one lookup before [`crate::Error::CyclicAlias`].
    pub max_alias_hops: usize,
    /// Closure rounds allowed before [`crate::Error::CyclicAlias`].
    pub max_closure_rounds: usize,
    /// Retry a path carrying `alt` without it.
    pub implicit_alt_fallback: bool,
    /// Retry a path carrying `count` with `count="other"`.
    pub implicit_count_fallback: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_alias_hops: DEFAULT_MAX_ALIAS_HOPS,
            max_closure_rounds: DEFAULT_MAX_CLOSURE_ROUNDS,
            implicit_alt_fallback: true,
            implicit_count_fallback: true,
        }
    }
}

impl ResolveOptions {
    /// Options from the `resolution` section, defaults for anything unset.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        let Some(resolution) = &config.resolution else {
            return defaults;
        };

        Self {
            max_alias_hops: resolution
                .max_alias_hops
                .unwrap_or(defaults.max_alias_hops),
            max_closure_rounds: resolution
                .max_closure_rounds
                .unwrap_or(defaults.max_closure_rounds),
            implicit_alt_fallback: resolution
                .implicit_alt_fallback
                .unwrap_or(defaults.implicit_alt_fallback),
            implicit_count_fallback: resolution
                .implicit_count_fallback
                .unwrap_or(defaults.implicit_count_fallback),
        }
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    /// The view's own locale holds the value at the query path.
    Local {
        /// The view's locale.
        locale: LocaleId,
    },
    /// An ancestor holds the value at the query path.
    Inherited {
        /// The ancestor holding the value.
        locale: LocaleId,
    },
    /// The value was found after redirection.
    Aliased {
        /// The locale holding the value.
        locale: LocaleId,
        /// The last path that was redirected.
        alias: Path,
    },
    /// Nothing in the chain applies; the code-fallback store is consulted.
    Fallback,
}

impl Origin {
    /// The locale holding the value, `None` for [`Origin::Fallback`].
    #[must_use]
    pub fn locale(&self) -> Option<&LocaleId> {
        match self {
            Self::Local { locale } | Self::Inherited { locale } | Self::Aliased { locale, .. } => {
                Some(locale)
            }
            Self::Fallback => None,
        }
    }

    /// Returns `true` for [`Origin::Fallback`].
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local { locale } => write!(f, "local ({locale})"),
            Self::Inherited { locale } => write!(f, "inherited ({locale})"),
            Self::Aliased { locale, alias } => write!(f, "aliased ({locale} via {alias})"),
            Self::Fallback => f.write_str(LocaleId::code_fallback().as_str()),
        }
    }
}

/// The result of resolving a query path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasLocation {
    path: Path,
    origin: Origin,
}

impl AliasLocation {
    /// The identity path where the value was found.
    ///
    /// Differs from the query only when a redirection happened.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the value came from.
    #[must_use]
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The locale holding the value, `None` for the code fallback.
    #[must_use]
    pub fn locale(&self) -> Option<&LocaleId> {
        self.origin.locale()
    }

    /// Whether an alias redirected the lookup.
    #[must_use]
    pub fn is_aliased(&self) -> bool {
        matches!(self.origin, Origin::Aliased { .. })
    }
}

/// Why a resolution step was recorded in a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceReason {
    /// The store holds a value here.
    Value,
    /// The store holds the inheritance marker here.
    InheritanceMarker,
    /// The store holds nothing here.
    Absent,
    /// An alias directive redirected the lookup.
    Alias,
    /// The implicit `alt` fallback dropped the attribute.
    RemovedAlt,
    /// The implicit `count` fallback changed or dropped the attribute.
    ChangedCount,
    /// Resolution ended at the code fallback.
    Fallback,
}

/// One step of [`ResolvingView::trace`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// The store's locale, if the step concerns a store.
    pub locale: Option<LocaleId>,
    /// The path being looked up.
    pub path: Path,
    /// What happened.
    pub reason: TraceReason,
}

/// One row of [`ResolvingView::resolved_entries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    /// The identity path.
    pub path: Path,
    /// The identity path carrying the decorative attributes of the value.
    pub decorated: Path,
    /// The resolved value.
    pub value: String,
    /// The comment attached where the value was found.
    pub comment: Option<String>,
    /// Where the value came from.
    pub origin: Origin,
}

/// Read-only resolution over one locale's chain.
///
/// `Send + Sync`; share it behind an `Arc` to resolve from many threads.
pub struct ResolvingView {
    chain: InheritanceChain,
    fallback: Arc<PathStore>,
    options: ResolveOptions,
    catalog: Option<Arc<LocaleCatalog>>,
    memo: RwLock<HashMap<Path, Resolved>>,
    keyspace: OnceCell<Vec<Path>>,
}

impl fmt::Debug for ResolvingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvingView")
            .field("chain", &self.chain.to_string())
            .field("options", &self.options)
            .field("memoized", &self.memo.read().len())
            .finish_non_exhaustive()
    }
}

impl ResolvingView {
    /// A view over `chain` with default options and the shared code fallback.
    #[must_use]
    pub fn new(chain: InheritanceChain) -> Self {
        Self {
            chain,
            fallback: code_fallback(),
            options: ResolveOptions::default(),
            catalog: None,
            memo: RwLock::new(HashMap::new()),
            keyspace: OnceCell::new(),
        }
    }

    /// Replaces the resolution options.
    #[must_use]
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the code-fallback store.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Arc<PathStore>) -> Self {
        self.fallback = fallback;
        self
    }

    pub(crate) fn with_catalog(mut self, catalog: Arc<LocaleCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// The view's locale.
    #[must_use]
    pub fn locale(&self) -> &LocaleId {
        self.chain.locale()
    }

    /// The chain the view resolves over.
    #[must_use]
    pub fn chain(&self) -> &InheritanceChain {
        &self.chain
    }

    /// The resolution options.
    #[must_use]
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolves `path` to the place its value comes from.
    ///
    /// Decorative attributes on `path` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CyclicAlias`] if redirection exceeds
    /// `max_alias_hops`, or [`crate::Error::UnknownLocale`] if an alias names a
    /// locale the view cannot reach.
    pub fn resolve(&self, path: &Path) -> Result<AliasLocation> {
        Ok(self.resolve_cached(path)?.location)
    }

    /// The value applying at `path`, `None` if nothing does.
    ///
    /// # Errors
    ///
    /// See [`ResolvingView::resolve`].
    pub fn value(&self, path: &Path) -> Result<Option<String>> {
        let resolved = self.resolve_cached(path)?;
        Ok(resolved.value().map(str::to_string))
    }

    /// The decorated form of `path` for the value that applies there.
    ///
    /// When the value was found elsewhere, its decorative attributes are
    /// copied onto `path`, aligning nodes from the end. Attributes `path`
    /// already carries are kept.
    ///
    /// # Errors
    ///
    /// See [`ResolvingView::resolve`].
    pub fn decorated_path(&self, path: &Path) -> Result<Option<Path>> {
        let resolved = self.resolve_cached(path)?;
        Ok(resolved.transplant(path))
    }

    /// The locale whose store supplies the value, `None` for the code fallback.
    ///
    /// # Errors
    ///
    /// See [`ResolvingView::resolve`].
    pub fn source_locale(&self, path: &Path) -> Result<Option<LocaleId>> {
        Ok(self.resolve(path)?.locale().cloned())
    }

    /// Where the value would come from if this locale held nothing at `path`.
    ///
    /// # Errors
    ///
    /// See [`ResolvingView::resolve`].
    pub fn inherited_location(&self, path: &Path) -> Result<AliasLocation> {
        Ok(self.locate(&path.identity(), true, None)?.location)
    }

    /// The value that would apply if this locale held nothing at `path`.
    ///
    /// # Errors
    ///
    /// See [`ResolvingView::resolve`].
    pub fn inherited_value(&self, path: &Path) -> Result<Option<String>> {
        let resolved = self.locate(&path.identity(), true, None)?;
        Ok(resolved.value().map(str::to_string))
    }

    /// The winning path in the store that supplies the value.
    ///
    /// See [`PathStore::winning_path`].
    ///
    /// # Errors
    ///
    /// See [`ResolvingView::resolve`].
    pub fn winning_path(&self, path: &Path) -> Result<Path> {
        let resolved = self.resolve_cached(path)?;
        Ok(resolved.store.winning_path(resolved.location.path()))
    }

    /// Every step taken while resolving `path`. Not memoized.
    ///
    /// # Errors
    ///
    /// See [`ResolvingView::resolve`].
    pub fn trace(&self, path: &Path) -> Result<Vec<TraceStep>> {
        let mut steps = Vec::new();
        self.locate(&path.identity(), false, Some(&mut steps))?;
        Ok(steps)
    }
}
