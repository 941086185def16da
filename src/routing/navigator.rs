//! Navigator factories and the resolved tree nodes they receive.
//!
//! A navigator factory turns the resolved children of one pattern level
//! (plus that level's options) into whatever the host uses as a navigator.
//! The core never looks inside the value a factory returns.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;
use serde_json::{json, Value};

use crate::routing::definition::{Options, RouteDefinition};

/// Child of a resolved navigator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResolvedChild<N> {
    /// Nested navigator built by a factory.
    Navigator(N),
    /// Leaf route.
    Route(RouteDefinition),
    /// Non-string route list element, passed through as-is.
    Inline(Value),
}

/// Resolved children keyed by route or child name.
pub type Children<N> = BTreeMap<String, ResolvedChild<N>>;

/// Materializes one navigator level.
pub trait NavigatorFactory<N>: Send + Sync {
    fn create(&self, children: Children<N>, options: Options) -> N;
}

impl<N, F> NavigatorFactory<N> for F
where
    F: Fn(Children<N>, Options) -> N + Send + Sync,
{
    fn create(&self, children: Children<N>, options: Options) -> N {
        self(children, options)
    }
}

/// Navigator factories available to the resolver, keyed by name.
pub struct NavigatorSet<N> {
    factories: HashMap<String, Box<dyn NavigatorFactory<N>>>,
}

impl<N> NavigatorSet<N> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: NavigatorFactory<N> + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    pub fn with<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: NavigatorFactory<N> + 'static,
    {
        self.register(name, factory);
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn NavigatorFactory<N>> {
        self.factories.get(name).map(|f| f.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<N> Default for NavigatorSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for NavigatorSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigatorSet")
            .field("factories", &self.names())
            .finish()
    }
}

/// Navigator that renders itself as a JSON description.
///
/// Used by the CLI and tests to inspect a resolved tree.
#[derive(Debug, Clone)]
pub struct JsonNavigator {
    kind: String,
}

impl JsonNavigator {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

impl NavigatorFactory<Value> for JsonNavigator {
    fn create(&self, children: Children<Value>, options: Options) -> Value {
        let routes: serde_json::Map<String, Value> = children
            .into_iter()
            .map(|(name, child)| {
                let value = match child {
                    ResolvedChild::Navigator(value) | ResolvedChild::Inline(value) => value,
                    ResolvedChild::Route(def) => serde_json::to_value(def).unwrap_or_default(),
                };
                (name, value)
            })
            .collect();

        json!({
            "navigator": self.kind,
            "routes": routes,
            "options": options,
        })
    }
}
