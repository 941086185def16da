//! Route registry assembly.
//!
//! Merges every feature's `<aspect>.routes` into one flat registry, in
//! activation order. A route name exposed by two features resolves to the
//! later feature's definition.

use serde::Deserialize;

use crate::feature::Feature;
use crate::routing::definition::{RouteDefinition, RouteRegistry};

/// Build a fresh registry from `features`, in the order given.
pub fn assemble_routes<'a, I>(aspect: &str, features: I) -> RouteRegistry
where
    I: IntoIterator<Item = &'a Feature>,
{
    let mut registry = RouteRegistry::new();

    for feature in features {
        let Some(routes) = feature.routes_object(aspect) else {
            continue;
        };

        for (name, raw) in routes {
            match RouteDefinition::deserialize(raw) {
                Ok(definition) => {
                    if registry.insert(name.clone(), definition).is_some() {
                        tracing::debug!(
                            feature = %feature.name,
                            route = %name,
                            "Route overridden by later feature"
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        feature = %feature.name,
                        route = %name,
                        error = %e,
                        "Skipping malformed route definition"
                    );
                }
            }
        }
    }

    tracing::debug!(aspect, count = registry.len(), "Route registry assembled");
    registry
}
