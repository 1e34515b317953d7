//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, ResolutionConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn resolution_strategy() -> impl Strategy<Value = ResolutionConfig> {
    (
        prop::option::of(1usize..200),
        prop::option::of(1usize..200),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(hops, rounds, alt, count)| ResolutionConfig {
            max_alias_hops: hops,
            max_closure_rounds: rounds,
            implicit_alt_fallback: alt,
            implicit_count_fallback: count,
        })
}

fn parents_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-z]{2}_[A-Z]{2}", "[a-z]{2}", 0..5)
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(resolution_strategy()),
        prop::option::of(parents_strategy()),
    )
        .prop_map(|(resolution, parent_locales)| Config {
            resolution,
            parent_locales,
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Set fields in the higher source always win; unset ones keep the lower value
    #[test]
    fn config_merge_higher_precedence_wins(
        low in resolution_strategy(),
        high in resolution_strategy()
    ) {
        let mut result = Config { resolution: Some(low.clone()), ..Default::default() };
        ConfigMerger::merge_into(&mut result, &Config { resolution: Some(high.clone()), ..Default::default() });
        let merged = result.resolution.unwrap();

        prop_assert_eq!(merged.max_alias_hops, high.max_alias_hops.or(low.max_alias_hops));
        prop_assert_eq!(merged.max_closure_rounds, high.max_closure_rounds.or(low.max_closure_rounds));
        prop_assert_eq!(merged.implicit_alt_fallback, high.implicit_alt_fallback.or(low.implicit_alt_fallback));
        prop_assert_eq!(merged.implicit_count_fallback, high.implicit_count_fallback.or(low.implicit_count_fallback));
    }

    // Merging an empty config changes nothing
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // Every child of either parent table survives the merge
    #[test]
    fn parent_tables_union(low in parents_strategy(), high in parents_strategy()) {
        let mut result = Config { parent_locales: Some(low.clone()), ..Default::default() };
        ConfigMerger::merge_into(&mut result, &Config { parent_locales: Some(high.clone()), ..Default::default() });
        let merged = result.parent_locales.unwrap();

        for (child, parent) in &high {
            prop_assert_eq!(merged.get(child), Some(parent));
        }
        for child in low.keys() {
            prop_assert!(merged.contains_key(child));
        }
    }

    // Non-zero bounds always validate
    #[test]
    fn positive_bounds_validate(resolution in resolution_strategy()) {
        prop_assert!(ConfigValidator::validate_resolution(&resolution).is_ok());
    }
}
