//! Shared fixtures for integration tests.

use serde_json::{json, Map, Value};

use feature_navigation::aspect::{JsonAppContainer, RouteAspect};
use feature_navigation::component::NamedComponent;
use feature_navigation::routing::{JsonNavigator, NavigatorNode};
use feature_navigation::Feature;

/// Feature exposing one `Test` screen per route name.
pub fn feature(name: &str, routes: &[&str]) -> Feature {
    let mut table = Map::new();
    for route in routes {
        table.insert(route.to_string(), json!({ "screen": "Test" }));
    }
    Feature::new(name).with_content("route", json!({ "routes": table }))
}

/// Features of a small app: a start screen, login/subscription flows and
/// three authenticated areas.
#[allow(dead_code)]
pub fn sample_features() -> Vec<Feature> {
    vec![
        feature("home", &["home"]),
        feature("app", &["app.START"]),
        feature("app-login", &["app-login.LOGIN", "app-login.LOGIN_SUCCESS"]),
        feature("app-subscription", &["app-subscription.START", "app-subscription.FORM"]),
        feature("app-home", &["app-home.HOME"]),
        feature("app-profil", &["app-profil.SETTINGS", "app-profil.SECURITY"]),
        feature("app-offers", &["app-offers.LIST", "app-offers.DETAILS"]),
    ]
}

/// Pattern nesting switch navigators three levels deep.
#[allow(dead_code)]
pub fn sample_pattern() -> NavigatorNode {
    serde_json::from_value(json!({
        "navigator": "switch",
        "routes": {
            "startup": {
                "navigator": "switch",
                "navigationOptions": { "initialRouteName": "app.START" },
                "routes": ["app.START"]
            },
            "unauth": {
                "navigator": "switch",
                "featureRoutes": ["app-login", "app-subscription"]
            },
            "auth": {
                "navigator": "switch",
                "routes": {
                    "realytricky": {
                        "navigator": "switch",
                        "routes": ["home"]
                    }
                },
                "featureRoutes": ["app-home", "app-profil", "app-offers"]
            }
        }
    }))
    .unwrap()
}

/// Aspect rendering navigators as JSON, wrapped in `{ "app": ... }`.
#[allow(dead_code)]
pub fn json_aspect(pattern: Option<NavigatorNode>) -> RouteAspect<Value, Value> {
    let mut builder = RouteAspect::builder()
        .navigator("switch", JsonNavigator::new("switch"))
        .navigator("stack", JsonNavigator::new("stack"))
        .app_container(JsonAppContainer)
        .component(NamedComponent::new("Test"));
    if let Some(pattern) = pattern {
        builder = builder.navigation_pattern(pattern);
    }
    builder.build().unwrap()
}

/// Leaf route as rendered by `JsonNavigator`.
#[allow(dead_code)]
pub fn leaf() -> Value {
    json!({ "screen": "Test" })
}
