//! Feature content validation.
//!
//! # Responsibilities
//! - Check a feature exposes routes under `<aspect>.routes` when it exposes
//!   any routing at all
//! - Check every route's `screen` names a renderable component
//! - Check every route reads as a route definition, so assembly never has
//!   to drop an entry that passed validation
//!
//! # Design Decisions
//! - Features without aspect content are valid (nothing to check)
//! - An empty `routes` array counts as a feature with no routes
//! - First failure wins: one error per feature, not an aggregate
//! - Pure function: Feature → Result<(), ContentError>

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::component::ComponentCatalog;
use crate::feature::Feature;
use crate::routing::definition::RouteDefinition;

/// Problems with a single feature's route content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error(
        "if a feature exposes some routing, routes must be exposed under feature.{aspect}.routes"
    )]
    RoutesShape { aspect: String },

    #[error(
        "feature routes must have a valid renderable reference under `screen` (feature `{feature}`, route `{route}`)"
    )]
    InvalidScreen { feature: String, route: String },

    #[error("feature `{feature}` route `{route}` is not a valid route definition: {reason}")]
    MalformedRoute {
        feature: String,
        route: String,
        reason: String,
    },
}

/// Validate the content `feature` exposes for the aspect named `aspect`.
pub fn validate_content(
    aspect: &str,
    feature: &Feature,
    catalog: &ComponentCatalog,
) -> Result<(), ContentError> {
    let Some(content) = feature.aspect_content(aspect) else {
        return Ok(());
    };
    if is_empty_route_list(content) {
        return Ok(());
    }

    let routes = feature
        .routes_object(aspect)
        .ok_or_else(|| ContentError::RoutesShape {
            aspect: aspect.to_string(),
        })?;

    for (route, definition) in routes {
        let screen = definition.get("screen").unwrap_or(&Value::Null);
        if !catalog.is_renderable(screen) {
            tracing::debug!(
                feature = %feature.name,
                route = %route,
                screen = %screen,
                "Route screen is not a renderable component"
            );
            return Err(ContentError::InvalidScreen {
                feature: feature.name.clone(),
                route: route.clone(),
            });
        }
        if let Err(e) = RouteDefinition::deserialize(definition) {
            return Err(ContentError::MalformedRoute {
                feature: feature.name.clone(),
                route: route.clone(),
                reason: e.to_string(),
            });
        }
    }

    Ok(())
}

fn is_empty_route_list(content: &Value) -> bool {
    content
        .get("routes")
        .and_then(Value::as_array)
        .is_some_and(|routes| routes.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> ComponentCatalog {
        ComponentCatalog::from_names(["Test"])
    }

    fn check(feature: &Feature) -> Result<(), ContentError> {
        validate_content("route", feature, &catalog())
    }

    #[test]
    fn test_feature_without_routes_is_valid() {
        assert_eq!(check(&Feature::new("empty")), Ok(()));
        // Content for another aspect is not ours to judge.
        let other = Feature::new("other").with_content("state", json!("anything"));
        assert_eq!(check(&other), Ok(()));
    }

    #[test]
    fn test_non_object_route_is_rejected() {
        let feature = Feature::new("f").with_content("route", json!("string"));
        assert_eq!(
            check(&feature),
            Err(ContentError::RoutesShape {
                aspect: "route".into()
            })
        );
    }

    #[test]
    fn test_non_object_routes_is_rejected() {
        let feature = Feature::new("f").with_content("route", json!({ "routes": "string" }));
        let err = check(&feature).unwrap_err();
        assert_eq!(
            err.to_string(),
            "if a feature exposes some routing, routes must be exposed under feature.route.routes"
        );

        let missing = Feature::new("f").with_content("route", json!({}));
        assert!(matches!(check(&missing), Err(ContentError::RoutesShape { .. })));
    }

    #[test]
    fn test_valid_routes() {
        let feature = Feature::new("f")
            .with_content("route", json!({ "routes": { "myroute": { "screen": "Test" } } }));
        assert_eq!(check(&feature), Ok(()));
    }

    #[test]
    fn test_invalid_screen_is_rejected() {
        for screen in [json!(null), json!("Unknown"), json!(12)] {
            let feature = Feature::new("f")
                .with_content("route", json!({ "routes": { "myroute": { "screen": screen } } }));
            assert_eq!(
                check(&feature),
                Err(ContentError::InvalidScreen {
                    feature: "f".into(),
                    route: "myroute".into()
                })
            );
        }

        let no_screen = Feature::new("f")
            .with_content("route", json!({ "routes": { "myroute": { "options": {} } } }));
        assert!(check(&no_screen).unwrap_err().to_string().contains("`screen`"));
    }

    #[test]
    fn test_empty_route_array_is_valid() {
        let feature = Feature::new("f").with_content("route", json!({ "routes": [] }));
        assert_eq!(check(&feature), Ok(()));

        let filled = Feature::new("f").with_content("route", json!({ "routes": ["home"] }));
        assert!(matches!(check(&filled), Err(ContentError::RoutesShape { .. })));
    }

    #[test]
    fn test_undecodable_route_is_rejected() {
        for bad in [
            json!({ "screen": "Test", "options": "not-a-map" }),
            json!({ "screen": "Test", "navigationOptions": 3 }),
        ] {
            let feature =
                Feature::new("f").with_content("route", json!({ "routes": { "home": bad } }));
            let err = check(&feature).unwrap_err();
            assert!(
                matches!(err, ContentError::MalformedRoute { ref route, .. } if route == "home"),
                "unexpected {:?}",
                err
            );
        }
    }

    #[test]
    fn test_first_failure_short_circuits() {
        let feature = Feature::new("f").with_content(
            "route",
            json!({ "routes": {
                "a": { "screen": "Missing" },
                "b": { "screen": "AlsoMissing" }
            } }),
        );

        // serde_json maps iterate in key order, so `a` is reported.
        assert_eq!(
            check(&feature),
            Err(ContentError::InvalidScreen {
                feature: "f".into(),
                route: "a".into()
            })
        );
    }
}
