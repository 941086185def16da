//! Property tests for route registry assembly.

use std::collections::BTreeSet;

use proptest::prelude::*;

use feature_navigation::feature::assemble_routes;
use feature_navigation::Feature;

mod common;

/// Disjoint groups of route names, one group per feature.
fn arb_disjoint_features() -> impl Strategy<Value = Vec<Feature>> {
    prop::collection::btree_set("[a-z]{1,6}(\\.[A-Z]{1,4})?", 1..24).prop_flat_map(|names| {
        let names: Vec<String> = names.into_iter().collect();
        let len = names.len();
        (Just(names), prop::collection::vec(0usize..4, len))
    })
    .prop_map(|(names, owners)| {
        (0..4)
            .map(|owner| {
                let routes: Vec<&str> = names
                    .iter()
                    .zip(&owners)
                    .filter(|(_, o)| **o == owner)
                    .map(|(n, _)| n.as_str())
                    .collect();
                common::feature(&format!("feature-{}", owner), &routes)
            })
            .collect()
    })
}

proptest! {
    /// With disjoint route names the activation order does not matter.
    #[test]
    fn disjoint_features_commute(
        features in arb_disjoint_features(),
        rotate in 0usize..4,
    ) {
        let forward = assemble_routes("route", &features);

        let mut reordered = features.clone();
        let len = reordered.len().max(1);
        reordered.rotate_left(rotate % len);
        reordered.reverse();

        prop_assert_eq!(assemble_routes("route", &reordered), forward);
    }

    /// Every contributed name ends up in the registry exactly once.
    #[test]
    fn registry_holds_union_of_names(features in arb_disjoint_features()) {
        let registry = assemble_routes("route", &features);

        let expected: BTreeSet<String> = features
            .iter()
            .filter_map(|f| f.aspect_content("route"))
            .filter_map(|c| c["routes"].as_object())
            .flat_map(|routes| routes.keys().cloned())
            .collect();
        let actual: BTreeSet<String> = registry.names().map(String::from).collect();

        prop_assert_eq!(actual, expected);
    }

    /// On a shared name the later feature's definition wins.
    #[test]
    fn later_feature_wins(name in "[a-z]{1,8}", first in "[A-Z][a-z]{0,6}", second in "[A-Z][a-z]{0,6}") {
        let make = |feature: &str, screen: &str| {
            let mut routes = serde_json::Map::new();
            routes.insert(name.clone(), serde_json::json!({ "screen": screen }));
            Feature::new(feature).with_content("route", serde_json::json!({ "routes": routes }))
        };
        let features = vec![make("a", &first), make("b", &second)];

        let registry = assemble_routes("route", &features);

        prop_assert_eq!(registry.len(), 1);
        prop_assert_eq!(&registry.get(&name).unwrap().screen, &second);
    }
}
