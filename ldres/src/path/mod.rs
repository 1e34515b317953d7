//! Structural paths and their grammar.
//!
//! Paths address values inside a locale data store, for example
//! `//ldml/dates/calendars/calendar[@type="gregorian"]/eras`.
//!
//! # Key Concepts
//!
//! ## Identity vs. decoration
//!
//! Each attribute is either *distinguishing* or *decorative*, as decided by a
//! [`Grammar`] table keyed on element and attribute name. Identity equality and
//! hashing only look at element names and distinguishing attributes, so
//! `//ldml/foo[@draft="contributed"]` and `//ldml/foo` are the same key.
//!
//! ## Canonical form
//!
//! Attributes are held in the grammar's canonical order: distinguishing first,
//! then by rank, unknown names alphabetically. Serializing a parsed path and
//! parsing it again yields the same path.
//!
//! # Examples
//!
//! ```
//! use ldres::path::{first_difference, PathRelationship};
//! use ldres::Path;
//!
//! let a = Path::parse(r#"//ldml/a[@draft="x"][@type="t"]/b"#).unwrap();
//! assert_eq!(a.to_string(), r#"//ldml/a[@type="t"][@draft="x"]/b"#);
//! assert_eq!(a.identity_string(), r#"//ldml/a[@type="t"]/b"#);
//!
//! let parent = a.parent().unwrap();
//! assert_eq!(PathRelationship::between(&parent, &a), PathRelationship::Ancestor);
//! assert_eq!(first_difference(&a, &a.identity()), 1);
//! ```

mod grammar;
mod parse;
pub mod relationship;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use grammar::Grammar;
pub use relationship::{first_difference, PathRelationship};
pub use types::{Attribute, Node, Path};
