//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.
//! Parent-locale tables accumulate across sources; everything else is
//! overridden field by field.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, GrammarConfig, ResolutionConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use ldres::config::{Config, ConfigMerger};
/// use std::path::PathBuf;
///
/// let low = Config { data_dir: Some(PathBuf::from("low")), ..Default::default() };
/// let high = Config { data_dir: Some(PathBuf::from("high")), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.data_dir, Some(PathBuf::from("high")));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Resolution and grammar: field-by-field merge
    /// - Parent locales: accumulated, source wins per child
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.data_dir.is_some() {
            target.data_dir.clone_from(&source.data_dir);
        }

        if let Some(ref source_resolution) = source.resolution {
            target.resolution = Some(match &target.resolution {
                Some(target_resolution) => {
                    Self::merge_resolution(target_resolution, source_resolution)
                }
                None => source_resolution.clone(),
            });
        }

        if let Some(ref source_parents) = source.parent_locales {
            let parents = target.parent_locales.get_or_insert_with(Default::default);
            for (child, parent) in source_parents {
                parents.insert(child.clone(), parent.clone());
            }
        }

        if let Some(ref source_grammar) = source.grammar {
            target.grammar = Some(match &target.grammar {
                Some(target_grammar) => Self::merge_grammar(target_grammar, source_grammar),
                None => source_grammar.clone(),
            });
        }
    }

    fn merge_resolution(target: &ResolutionConfig, source: &ResolutionConfig) -> ResolutionConfig {
        ResolutionConfig {
            max_alias_hops: source.max_alias_hops.or(target.max_alias_hops),
            max_closure_rounds: source.max_closure_rounds.or(target.max_closure_rounds),
            implicit_alt_fallback: source.implicit_alt_fallback.or(target.implicit_alt_fallback),
            implicit_count_fallback: source
                .implicit_count_fallback
                .or(target.implicit_count_fallback),
        }
    }

    /// Rule lists accumulate; an attribute order replaces the previous one.
    fn merge_grammar(target: &GrammarConfig, source: &GrammarConfig) -> GrammarConfig {
        let concat = |a: &Option<Vec<String>>, b: &Option<Vec<String>>| match (a, b) {
            (Some(a), Some(b)) => Some(a.iter().chain(b).cloned().collect()),
            (a, b) => b.clone().or_else(|| a.clone()),
        };

        GrammarConfig {
            distinguishing: concat(&target.distinguishing, &source.distinguishing),
            decorative: concat(&target.decorative, &source.decorative),
            attribute_order: source
                .attribute_order
                .clone()
                .or_else(|| target.attribute_order.clone()),
        }
    }
}
