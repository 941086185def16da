//! Navigation pattern: the author-defined tree of navigator nodes.
//!
//! ```toml
//! navigator = "switch"
//!
//! [routes.startup]
//! navigator = "stack"
//! routes = ["app.START"]
//! options = { initialRouteName = "app.START" }
//!
//! [routes.unauth]
//! navigator = "stack"
//! feature_routes = ["app-login", "app-subscription"]
//! ```
//!
//! A node lists its children either as an ordered list of registry route
//! names (`routes = [...]`), as a table of named children (nested nodes or
//! inline route definitions), and/or as feature prefixes whose routes are
//! pulled from the registry (`feature_routes`).

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::routing::definition::{Options, RouteDefinition};

/// One level of the navigation pattern.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NavigatorNode {
    /// Name of the navigator factory materializing this level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigator: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<RoutesSpec>,

    /// Feature prefixes expanded against the registry.
    #[serde(
        default,
        alias = "featureRoutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub feature_routes: Option<Vec<String>>,

    #[serde(
        default,
        alias = "navigationOptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub options: Option<Options>,
}

impl NavigatorNode {
    pub fn new(navigator: impl Into<String>) -> Self {
        Self {
            navigator: Some(navigator.into()),
            ..Self::default()
        }
    }

    /// Children given as registry route names.
    pub fn with_route_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let refs = names.into_iter().map(|n| RouteRef::Name(n.into())).collect();
        self.routes = Some(RoutesSpec::List(refs));
        self
    }

    /// Add a named child to the explicit routes table.
    ///
    /// A list of route names, if set, is replaced by a table.
    pub fn with_child(mut self, name: impl Into<String>, entry: impl Into<PatternEntry>) -> Self {
        let mut table = match self.routes.take() {
            Some(RoutesSpec::Map(table)) => table,
            _ => BTreeMap::new(),
        };
        table.insert(name.into(), entry.into());
        self.routes = Some(RoutesSpec::Map(table));
        self
    }

    pub fn with_feature_routes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_routes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Literal rendering of the node used in error messages.
    pub fn describe(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }

    /// Every navigator name used by this node and its descendants.
    pub fn navigator_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_navigators(&mut names);
        names
    }

    fn collect_navigators<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(name) = &self.navigator {
            out.push(name.as_str());
        }
        if let Some(RoutesSpec::Map(table)) = &self.routes {
            for entry in table.values() {
                if let PatternEntry::Navigator(child) = entry {
                    child.collect_navigators(out);
                }
            }
        }
    }
}

/// Explicit children of a navigator node.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RoutesSpec {
    /// Ordered references into the registry.
    List(Vec<RouteRef>),
    /// Named children: nested navigators or inline route definitions.
    Map(BTreeMap<String, PatternEntry>),
}

/// Element of a route list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RouteRef {
    Name(String),
    /// Non-string element, bound under its own literal text.
    Inline(Value),
}

/// Value of a named child in a routes table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PatternEntry {
    Navigator(NavigatorNode),
    Route(RouteDefinition),
}

impl PatternEntry {
    /// True when `value` carries a `navigator` key. Other keys such as
    /// `routes` may be plain route props.
    pub fn is_node_value(value: &Value) -> bool {
        value
            .as_object()
            .is_some_and(|obj| obj.contains_key("navigator"))
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if Self::is_node_value(&value) {
            serde_json::from_value(value).map(PatternEntry::Navigator)
        } else {
            serde_json::from_value(value).map(PatternEntry::Route)
        }
    }
}

impl<'de> Deserialize<'de> for PatternEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        PatternEntry::from_value(value).map_err(de::Error::custom)
    }
}

impl From<NavigatorNode> for PatternEntry {
    fn from(node: NavigatorNode) -> Self {
        PatternEntry::Navigator(node)
    }
}

impl From<RouteDefinition> for PatternEntry {
    fn from(route: RouteDefinition) -> Self {
        PatternEntry::Route(route)
    }
}
