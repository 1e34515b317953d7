#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # ldres
//!
//! A library for resolving hierarchical, partially overridden locale data.
//!
//! Locale data lives in per-locale [`PathStore`]s keyed by structural
//! [`Path`]s. A [`ResolvingView`] composes a locale's [`InheritanceChain`]
//! with the root store's alias directives and answers, for any path, which
//! value applies and where it came from.
//!
//! ## Core Types
//!
//! - [`Path`] and [`path::Grammar`]: the path language and its identity rules
//! - [`LocaleId`] and [`ParentLocales`]: locale identifiers and parents
//! - [`PathStore`] and [`PathStoreBuilder`]: frozen per-locale data
//! - [`AliasDirective`] and [`AliasMap`]: redirections found in root
//! - [`InheritanceChain`] and [`LocaleCatalog`]: stores from a locale up to root
//! - [`ResolvingView`], [`AliasLocation`] and [`Origin`]: resolution results
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use ldres::{InheritanceChain, LocaleId, Path, PathStore, ResolvingView};
//!
//! let mut root = PathStore::builder(LocaleId::root());
//! root.put_decorated(Path::parse("//ldml/foo").unwrap(), "V0");
//!
//! let mut en = PathStore::builder(LocaleId::new("en").unwrap());
//! en.put_decorated(Path::parse("//ldml/foo").unwrap(), "V1");
//!
//! let en_gb = PathStore::builder(LocaleId::new("en_GB").unwrap());
//!
//! let chain = InheritanceChain::new(vec![
//!     Arc::new(en_gb.freeze().unwrap()),
//!     Arc::new(en.freeze().unwrap()),
//!     Arc::new(root.freeze().unwrap()),
//! ])
//! .unwrap();
//!
//! let view = ResolvingView::new(chain);
//! let foo = Path::parse("//ldml/foo").unwrap();
//! assert_eq!(view.value(&foo).unwrap().as_deref(), Some("V1"));
//! assert_eq!(view.source_locale(&foo).unwrap().unwrap().as_str(), "en");
//! ```

pub mod alias;
pub mod chain;
pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod output;
pub mod path;
pub mod snapshot;
pub mod store;
pub mod view;

// Re-export key types at crate root for convenience
pub use alias::{AliasDirective, AliasMap};
pub use chain::{InheritanceChain, LocaleCatalog};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use locale::{LocaleId, ParentLocales};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{first_difference, Path, PathRelationship};
pub use store::{code_fallback, PathStore, PathStoreBuilder};
pub use view::{
    AliasLocation, Origin, ResolveOptions, ResolvedEntry, ResolvingView, TraceReason, TraceStep,
    INHERITANCE_MARKER,
};
