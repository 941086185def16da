//! Route definitions and the flat route registry.
//!
//! # Responsibilities
//! - Describe a single named route (screen + options)
//! - Hold the merged name → definition map built from all features
//!
//! # Design Decisions
//! - Registry is ordered (BTreeMap) so iteration and output are stable
//! - Registry is rebuilt from scratch on every assembly, never patched

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::routing::matcher::{PrefixMatcher, RouteMatcher};

/// Free-form options attached to a route or navigator.
pub type Options = Map<String, Value>;

/// A single route contributed by a feature.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteDefinition {
    /// Name of the renderable component mounted for this route.
    pub screen: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,

    /// Legacy spelling of `options`.
    #[serde(
        default,
        rename = "navigationOptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub navigation_options: Option<Options>,

    /// Any other keys are carried through untouched.
    #[serde(flatten)]
    pub props: Options,
}

impl RouteDefinition {
    pub fn new(screen: impl Into<String>) -> Self {
        Self {
            screen: screen.into(),
            options: None,
            navigation_options: None,
            props: Options::new(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Options to hand to the navigator.
    ///
    /// The legacy `navigationOptions` key still wins when present.
    pub fn effective_options(&self) -> Option<&Options> {
        if let Some(legacy) = &self.navigation_options {
            tracing::warn!(
                screen = %self.screen,
                "navigationOptions is deprecated in route configuration, use options instead"
            );
            return Some(legacy);
        }
        self.options.as_ref()
    }
}

/// Flat registry of every route exposed by the active features.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RouteRegistry {
    routes: BTreeMap<String, RouteDefinition>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route, returning the definition it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        definition: RouteDefinition,
    ) -> Option<RouteDefinition> {
        self.routes.insert(name.into(), definition)
    }

    pub fn get(&self, name: &str) -> Option<&RouteDefinition> {
        self.routes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RouteDefinition)> {
        self.routes.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Entries whose name starts with `prefix` (literal, case-sensitive).
    pub fn with_prefix<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = (&'a String, &'a RouteDefinition)> + 'a {
        let matcher = PrefixMatcher::new(prefix);
        self.routes
            .iter()
            .filter(move |(name, _)| matcher.matches(name))
    }
}

impl FromIterator<(String, RouteDefinition)> for RouteRegistry {
    fn from_iter<T: IntoIterator<Item = (String, RouteDefinition)>>(iter: T) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}
