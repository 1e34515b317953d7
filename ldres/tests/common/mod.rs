//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the ldres library.

use std::fs;
use std::path::Path as FilePath;
use std::sync::Arc;

use ldres::{InheritanceChain, LocaleId, Path, PathStore, ResolvingView};

/// Parses a path, panicking on malformed input.
#[allow(dead_code)]
pub fn path(s: &str) -> Path {
    Path::parse(s).unwrap_or_else(|e| panic!("fixture path {s:?} should parse: {e}"))
}

/// Parses a locale id, panicking on malformed input.
#[allow(dead_code)]
pub fn id(s: &str) -> LocaleId {
    LocaleId::new(s).unwrap_or_else(|e| panic!("fixture locale {s:?} should parse: {e}"))
}

/// Builder for frozen test stores.
///
/// # Examples
///
/// ```no_run
/// # use common::StoreFixture;
/// let root = StoreFixture::new("root")
///     .with("//ldml/foo", "V0")
///     .alias("//ldml/a", "../b")
///     .build();
/// ```
#[allow(dead_code)]
pub struct StoreFixture {
    locale: LocaleId,
    inheriting: bool,
    entries: Vec<(String, String)>,
    comments: Vec<(String, String)>,
}

#[allow(dead_code)]
impl StoreFixture {
    /// Creates an empty fixture for `locale`.
    pub fn new(locale: &str) -> Self {
        Self {
            locale: id(locale),
            inheriting: true,
            entries: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Adds a value at a decorated path.
    pub fn with(mut self, path: &str, value: &str) -> Self {
        self.entries.push((path.to_string(), value.to_string()));
        self
    }

    /// Adds a comment for the identity of `path`.
    pub fn comment(mut self, path: &str, comment: &str) -> Self {
        self.comments.push((path.to_string(), comment.to_string()));
        self
    }

    /// Adds an alias under `old` pointing at `target` in the same locale.
    pub fn alias(self, old: &str, target: &str) -> Self {
        let alias = format!(r#"{old}/alias[@source="locale"][@path="{target}"]"#);
        self.with(&alias, "")
    }

    /// Adds an alias under `old` pointing at `target` in `locale`.
    pub fn alias_to(self, old: &str, locale: &str, target: &str) -> Self {
        let alias = format!(r#"{old}/alias[@source="{locale}"][@path="{target}"]"#);
        self.with(&alias, "")
    }

    /// Marks the store as supplemental.
    pub fn non_inheriting(mut self) -> Self {
        self.inheriting = false;
        self
    }

    /// Freezes the store.
    ///
    /// # Panics
    ///
    /// Panics if the store cannot be frozen.
    pub fn freeze(self) -> PathStore {
        let mut builder = PathStore::builder(self.locale);
        if !self.inheriting {
            builder = builder.non_inheriting();
        }
        for (p, value) in &self.entries {
            builder.put_decorated(path(p), value.as_str());
        }
        for (p, comment) in &self.comments {
            assert!(builder.set_comment(&path(p).identity(), comment.as_str()));
        }
        builder.freeze().expect("fixture store should freeze")
    }

    /// Freezes the store into an `Arc`.
    pub fn build(self) -> Arc<PathStore> {
        Arc::new(self.freeze())
    }
}

/// A view over `stores`, most specific first, with an empty code fallback.
#[allow(dead_code)]
pub fn view(stores: Vec<Arc<PathStore>>) -> ResolvingView {
    let fallback = Arc::new(
        PathStore::builder(LocaleId::root())
            .freeze()
            .expect("empty store should freeze"),
    );
    ResolvingView::new(InheritanceChain::new(stores).expect("fixture chain should be valid"))
        .with_fallback(fallback)
}

/// Writes a snapshot file into `dir`.
#[allow(dead_code)]
pub fn write_snapshot(dir: &FilePath, locale: &str, entries: &[(&str, &str)]) {
    let mut yaml = format!("locale: {locale}\nentries:\n");
    for (p, value) in entries {
        yaml.push_str(&format!("  - path: '{p}'\n    value: '{value}'\n"));
    }
    fs::write(dir.join(format!("{locale}.yaml")), yaml).unwrap();
}
