//! Property-based tests for resolution.

use std::sync::Arc;

use proptest::prelude::*;

use super::{Origin, ResolvingView};
use crate::chain::InheritanceChain;
use crate::locale::LocaleId;
use crate::path::Path;
use crate::store::PathStore;

fn path(s: &str) -> Path {
    Path::parse(s).unwrap()
}

/// A chain `l0 -> l1 -> ... -> root` where `present[i]` says whether store `i`
/// holds a value at `//ldml/x`.
fn layered_chain(present: &[bool]) -> InheritanceChain {
    let depth = present.len();
    let stores = present
        .iter()
        .enumerate()
        .map(|(i, has)| {
            let locale = if i + 1 == depth {
                LocaleId::root()
            } else {
                let id = (0..depth - 1 - i).map(|_| "a").collect::<Vec<_>>().join("_");
                LocaleId::new(&id).unwrap()
            };
            let mut builder = PathStore::builder(locale);
            if *has {
                builder.put_decorated(path("//ldml/x"), format!("v{i}"));
            }
            Arc::new(builder.freeze().unwrap())
        })
        .collect();
    InheritanceChain::new(stores).unwrap()
}

/// Root with aliases `//ldml/s0 -> //ldml/s1 -> ... -> //ldml/sN` and a value at `sN/leaf`.
fn alias_ladder(n: usize) -> InheritanceChain {
    let mut builder = PathStore::builder(LocaleId::root());
    for i in 0..n {
        builder.put_decorated(
            path(&format!(
                r#"//ldml/s{i}/alias[@source="locale"][@path="../s{}"]"#,
                i + 1
            )),
            "",
        );
    }
    builder.put_decorated(path(&format!("//ldml/s{n}/leaf")), "end");
    InheritanceChain::new(vec![Arc::new(builder.freeze().unwrap())]).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // The most specific store holding a value always wins
    #[test]
    fn most_specific_value_wins(present in prop::collection::vec(any::<bool>(), 1..6)) {
        let view = ResolvingView::new(layered_chain(&present));
        let value = view.value(&path("//ldml/x")).unwrap();

        match present.iter().position(|has| *has) {
            Some(i) => {
                prop_assert_eq!(value, Some(format!("v{i}")));
                let origin = view.resolve(&path("//ldml/x")).unwrap().origin().clone();
                if i == 0 {
                    let is_local = matches!(origin, Origin::Local { .. });
                    prop_assert!(is_local);
                } else {
                    let is_inherited = matches!(origin, Origin::Inherited { .. });
                    prop_assert!(is_inherited);
                }
            }
            None => prop_assert_eq!(value, None),
        }
    }

    // N acyclic aliases resolve within N hops and not within N - 1
    #[test]
    fn alias_ladder_needs_exactly_n_hops(n in 1usize..30) {
        let chain = alias_ladder(n);
        let query = path("//ldml/s0/leaf");

        let enough = ResolvingView::new(chain.clone()).with_options(super::ResolveOptions {
            max_alias_hops: n,
            ..Default::default()
        });
        prop_assert_eq!(enough.value(&query).unwrap(), Some("end".to_string()));

        let short = ResolvingView::new(chain).with_options(super::ResolveOptions {
            max_alias_hops: n - 1,
            ..Default::default()
        });
        prop_assert!(short.resolve(&query).unwrap_err().is_cyclic_alias());
    }

    // Every alias source in the ladder joins the key space exactly once
    #[test]
    fn ladder_closure_is_complete(n in 1usize..15) {
        let view = ResolvingView::new(alias_ladder(n));
        let paths = view.all_resolvable_paths().unwrap();
        for i in 0..=n {
            let leaf = path(&format!("//ldml/s{i}/leaf"));
            prop_assert_eq!(paths.iter().filter(|p| **p == leaf).count(), 1);
        }
    }
}
