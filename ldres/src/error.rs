//! Error types for the ldres library.
//!
//! This module provides the error hierarchy for path parsing, store
//! construction, alias discovery and resolution, using `thiserror` for
//! ergonomic error handling.
//!
//! Absence of a value is never an error: lookups that find nothing return
//! `Ok(None)`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an ldres error.
///
/// # Examples
///
/// ```
/// use ldres::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(40)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the ldres library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path string violated the path grammar.
    #[error("malformed path '{path}' at offset {offset}")]
    MalformedPath {
        /// The offending input.
        path: String,
        /// Character offset where the scan failed.
        offset: usize,
    },

    /// An alias directive could not be constructed.
    #[error("invalid alias at {path}: {reason}")]
    InvalidAlias {
        /// The alias path as found in the root store.
        path: String,
        /// The reason the directive is invalid.
        reason: String,
    },

    /// Alias chasing or key-space closure exceeded its bound.
    #[error("alias cycle detected at {path} (limit {limit})")]
    CyclicAlias {
        /// The path being resolved when the bound was hit.
        path: String,
        /// The bound that was exceeded.
        limit: usize,
    },

    /// A locale identifier is malformed.
    #[error("invalid locale id '{id}': {reason}")]
    InvalidLocale {
        /// The rejected identifier.
        id: String,
        /// The reason the identifier is invalid.
        reason: String,
    },

    /// A locale was requested that has no registered store.
    #[error("unknown locale: {id}")]
    UnknownLocale {
        /// The missing locale.
        id: String,
    },

    /// An inheritance chain does not end with the root store.
    #[error("inheritance chain must end with the root store")]
    MissingRoot,

    /// A decorated path was stored under an identity path it does not reduce to.
    #[error("decorated path {decorated} does not reduce to identity {identity}")]
    IdentityMismatch {
        /// The identity path supplied by the caller.
        identity: String,
        /// The decorated path supplied by the caller.
        decorated: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration or snapshot file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Builds a [`Error::MalformedPath`] for `path` at `offset`.
    pub(crate) fn malformed(path: &str, offset: usize) -> Self {
        Self::MalformedPath {
            path: path.to_string(),
            offset,
        }
    }

    /// Check if the error reports an alias cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use ldres::Error;
    ///
    /// let err = Error::CyclicAlias { path: "//ldml/a".into(), limit: 40 };
    /// assert!(err.is_cyclic_alias());
    /// ```
    #[must_use]
    pub fn is_cyclic_alias(&self) -> bool {
        matches!(self, Self::CyclicAlias { .. })
    }

    /// Check if the error is a path grammar violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ldres::Error;
    ///
    /// let err = Error::MalformedPath { path: "ldml".into(), offset: 0 };
    /// assert!(err.is_malformed_path());
    /// ```
    #[must_use]
    pub fn is_malformed_path(&self) -> bool {
        matches!(self, Self::MalformedPath { .. })
    }
}
