//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve a path in a locale
//! - `paths`: List the resolvable paths of a locale
//! - `chain`: Show the inheritance chain of a locale
//! - `canonicalize`: Print the canonical form of a path
//! - `aliases`: List the root alias directives
//! - `validate_config`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod aliases;
pub mod canonicalize;
pub mod chain;
pub mod completions;
pub mod paths;
pub mod resolve;
pub mod validate_config;

pub use aliases::AliasesCommand;
pub use canonicalize::CanonicalizeCommand;
pub use chain::ChainCommand;
pub use completions::CompletionsCommand;
pub use paths::PathsCommand;
pub use resolve::ResolveCommand;
pub use validate_config::ValidateConfigCommand;
