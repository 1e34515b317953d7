//! Configuration validation.
//!
//! This module checks a merged configuration before it is turned into
//! resolution options, parent overrides and a grammar.

use crate::config::schema::{Config, GrammarConfig, ResolutionConfig};
use crate::error::{Error, Result};
use crate::locale::{LocaleId, ParentLocales};
use std::collections::{BTreeMap, HashSet};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use ldres::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref resolution) = config.resolution {
            Self::validate_resolution(resolution)?;
        }

        if let Some(ref parents) = config.parent_locales {
            Self::validate_parent_locales(parents)?;
        }

        if let Some(ref grammar) = config.grammar {
            Self::validate_grammar(grammar)?;
        }

        if let Some(ref dir) = config.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "data_dir".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        Ok(())
    }

    /// Validate resolution bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is zero.
    pub fn validate_resolution(resolution: &ResolutionConfig) -> Result<()> {
        for (field, bound) in [
            ("resolution.max_alias_hops", resolution.max_alias_hops),
            ("resolution.max_closure_rounds", resolution.max_closure_rounds),
        ] {
            if bound == Some(0) {
                return Err(Error::Validation {
                    field: field.into(),
                    message: "Must be greater than 0".into(),
                });
            }
        }
        Ok(())
    }

    /// Validate the parent-locale table.
    ///
    /// Every id must be well formed, root has no parent, no locale is its own
    /// parent and the table must be acyclic.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first bad entry.
    pub fn validate_parent_locales(parents: &BTreeMap<String, String>) -> Result<()> {
        let field = |child: &str| format!("parent_locales.{child}");

        for (child, parent) in parents {
            let child_id = LocaleId::new(child).map_err(|e| Error::Validation {
                field: field(child),
                message: e.to_string(),
            })?;
            let parent_id = LocaleId::new(parent).map_err(|e| Error::Validation {
                field: field(child),
                message: e.to_string(),
            })?;

            if child_id.is_root() {
                return Err(Error::Validation {
                    field: field(child),
                    message: "root cannot have a parent".into(),
                });
            }
            if child_id == parent_id {
                return Err(Error::Validation {
                    field: field(child),
                    message: "A locale cannot be its own parent".into(),
                });
            }
        }

        let table = ParentLocales::from_strings(parents)?;
        for child in parents.keys() {
            let id = LocaleId::new(child)?;
            table.lineage(&id).map_err(|e| Error::Validation {
                field: field(child),
                message: e.to_string(),
            })?;
        }

        Ok(())
    }

    /// Validate grammar extensions.
    ///
    /// # Errors
    ///
    /// Returns an error for empty entries, malformed `element@attr` entries,
    /// an entry listed as both distinguishing and decorative, or a duplicate
    /// in the attribute order.
    pub fn validate_grammar(grammar: &GrammarConfig) -> Result<()> {
        let mut distinguishing = HashSet::new();
        for entry in grammar.distinguishing.iter().flatten() {
            Self::validate_rule_entry("grammar.distinguishing", entry)?;
            distinguishing.insert(entry.as_str());
        }

        for entry in grammar.decorative.iter().flatten() {
            Self::validate_rule_entry("grammar.decorative", entry)?;
            if distinguishing.contains(entry.as_str()) {
                return Err(Error::Validation {
                    field: "grammar.decorative".into(),
                    message: format!("'{entry}' is also listed as distinguishing"),
                });
            }
        }

        if let Some(ref order) = grammar.attribute_order {
            let mut seen = HashSet::new();
            for name in order {
                if name.trim().is_empty() || name.contains('@') {
                    return Err(Error::Validation {
                        field: "grammar.attribute_order".into(),
                        message: format!("Invalid attribute name '{name}'"),
                    });
                }
                if !seen.insert(name.as_str()) {
                    return Err(Error::Validation {
                        field: "grammar.attribute_order".into(),
                        message: format!("Duplicate attribute '{name}'"),
                    });
                }
            }
        }

        Ok(())
    }

    fn validate_rule_entry(field: &str, entry: &str) -> Result<()> {
        let valid = match entry.split_once('@') {
            Some((element, attribute)) => {
                is_name(element) && is_name(attribute) && !attribute.contains('@')
            }
            None => is_name(entry),
        };

        if valid {
            Ok(())
        } else {
            Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid entry '{entry}' (expected 'attr' or 'element@attr')"),
            })
        }
    }
}

fn is_name(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':' | '.'))
}
