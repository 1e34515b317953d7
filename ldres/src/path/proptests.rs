//! Property-based tests for the path grammar.

use super::relationship::{first_difference, PathRelationship};
use super::types::Path;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,8}"
}

fn attribute_strategy() -> impl Strategy<Value = (String, String)> {
    (
        prop_oneof![
            Just("type".to_string()),
            Just("alt".to_string()),
            Just("count".to_string()),
            Just("draft".to_string()),
            Just("references".to_string()),
            "[a-z]{1,6}",
        ],
        "[a-zA-Z0-9 ./\\[\\]@'-]{0,10}",
    )
}

fn segment_strategy() -> impl Strategy<Value = String> {
    (
        name_strategy(),
        prop::collection::vec(attribute_strategy(), 0..4),
    )
        .prop_map(|(name, attributes)| {
            let mut segment = name;
            for (key, value) in attributes {
                segment.push_str(&format!("[@{key}=\"{value}\"]"));
            }
            segment
        })
}

fn path_string_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..6).prop_map(|segments| {
        format!("//{}", segments.join("/"))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Canonicalization is idempotent: parse(to_string(parse(s))) == parse(s).
    #[test]
    fn canonical_form_idempotent(s in path_string_strategy()) {
        let once = Path::parse(&s).unwrap();
        let rendered = once.to_string();
        let twice = Path::parse(&rendered).unwrap();
        prop_assert!(once.same_decoration(&twice));
        prop_assert_eq!(rendered, twice.to_string());
    }

    // Identity is a projection: applying it twice changes nothing.
    #[test]
    fn identity_is_idempotent(s in path_string_strategy()) {
        let path = Path::parse(&s).unwrap();
        let identity = path.identity();
        prop_assert!(identity.same_decoration(&identity.identity()));
        prop_assert_eq!(&path, &identity);
    }

    // Every path is related to itself.
    #[test]
    fn relationship_reflexive(s in path_string_strategy()) {
        let path = Path::parse(&s).unwrap();
        prop_assert_eq!(PathRelationship::between(&path, &path), PathRelationship::Same);
        prop_assert_eq!(first_difference(&path, &path), path.len());
    }

    // A parent is always an ancestor of its child.
    #[test]
    fn parent_is_ancestor(s in path_string_strategy()) {
        let path = Path::parse(&s).unwrap();
        if let Some(parent) = path.parent() {
            if !parent.is_empty() {
                prop_assert_eq!(
                    PathRelationship::between(&parent, &path),
                    PathRelationship::Ancestor
                );
            }
        }
    }
}
