//! Navigation pattern resolution.
//!
//! # Responsibilities
//! - Expand route name lists against the registry
//! - Expand feature prefixes against the registry
//! - Merge both with explicit entries winning on collision
//! - Recurse into nested navigator nodes, depth first
//! - Hand each level's children and options to its navigator factory
//!
//! # Per-level steps
//! ```text
//! factory check      navigator named and registered, else MissingNavigatorFactory
//! list expansion     names looked up in registry, else RouteNotFound
//! prefix expansion   every registry route starting with each prefix, later prefix wins
//! merge              prefix-expanded entries overlaid by explicit entries
//! shape check        no routes and no feature_routes: NoRoutesDetected
//! non-empty check    zero children: EmptyRouteList
//! recursive build    nested nodes resolved, everything else is a leaf
//! materialize        factory(children, options)
//! ```
//!
//! # Design Decisions
//! - Pure and synchronous; the pattern and registry are only borrowed
//! - Resolution is all-or-nothing: the first error aborts the whole tree
//! - Depth is bounded so a runaway pattern fails instead of overflowing

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::Value;

use crate::routing::definition::{RouteDefinition, RouteRegistry};
use crate::routing::navigator::{Children, NavigatorSet, ResolvedChild};
use crate::routing::pattern::{NavigatorNode, PatternEntry, RouteRef, RoutesSpec};
use crate::routing::types::{RouteError, RouteResult};

/// Default bound on pattern nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Child of a level after expansion and merge, before recursion.
#[derive(Debug)]
enum Effective<'a> {
    Node(Cow<'a, NavigatorNode>),
    Route(&'a RouteDefinition),
    Inline(&'a Value),
}

/// Resolves navigation patterns against one registry snapshot.
#[derive(Debug)]
pub struct Resolver<'a, N> {
    registry: &'a RouteRegistry,
    navigators: &'a NavigatorSet<N>,
    max_depth: usize,
}

impl<'a, N> Resolver<'a, N> {
    pub fn new(registry: &'a RouteRegistry, navigators: &'a NavigatorSet<N>) -> Self {
        Self {
            registry,
            navigators,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Resolve `root` into a navigator built by the registered factories.
    pub fn resolve(&self, root: &NavigatorNode) -> RouteResult<N> {
        self.resolve_node(root, 0)
    }

    fn resolve_node(&self, node: &NavigatorNode, depth: usize) -> RouteResult<N> {
        if depth >= self.max_depth {
            return Err(RouteError::DepthExceeded {
                max: self.max_depth,
            });
        }

        let navigator = node.navigator.as_deref();
        let factory = navigator
            .and_then(|name| self.navigators.get(name))
            .ok_or_else(|| RouteError::missing_navigator(navigator))?;

        let explicit = match &node.routes {
            Some(spec) => Some(self.expand_explicit(spec)?),
            None => None,
        };
        let expanded = node
            .feature_routes
            .as_deref()
            .map(|prefixes| self.expand_prefixes(prefixes));

        let effective = match (expanded, explicit) {
            (None, None) => return Err(RouteError::NoRoutesDetected(node.describe())),
            (Some(mut expanded), Some(explicit)) => {
                expanded.extend(explicit);
                expanded
            }
            (Some(routes), None) | (None, Some(routes)) => routes,
        };

        if effective.is_empty() {
            return Err(RouteError::EmptyRouteList {
                navigator: navigator.unwrap_or_default().to_string(),
            });
        }

        let mut children = Children::new();
        for (name, entry) in effective {
            let child = match entry {
                Effective::Node(nested) => {
                    ResolvedChild::Navigator(self.resolve_node(&nested, depth + 1)?)
                }
                Effective::Route(def) => ResolvedChild::Route(def.clone()),
                Effective::Inline(value) => ResolvedChild::Inline(value.clone()),
            };
            children.insert(name, child);
        }

        let options = node.options.clone().unwrap_or_default();

        tracing::debug!(
            navigator = navigator.unwrap_or_default(),
            depth,
            count = children.len(),
            "Navigator level resolved"
        );

        Ok(factory.create(children, options))
    }

    /// Explicit `routes` as a name → entry map.
    fn expand_explicit<'p>(
        &self,
        spec: &'p RoutesSpec,
    ) -> RouteResult<BTreeMap<String, Effective<'p>>>
    where
        'a: 'p,
    {
        match spec {
            RoutesSpec::List(refs) => {
                let mut routes = BTreeMap::new();
                for route in refs {
                    match route {
                        RouteRef::Name(name) => {
                            let def = self
                                .registry
                                .get(name)
                                .ok_or_else(|| RouteError::RouteNotFound(name.clone()))?;
                            routes.insert(name.clone(), Effective::Route(def));
                        }
                        RouteRef::Inline(value) => {
                            routes.insert(value.to_string(), inline_entry(value));
                        }
                    }
                }
                Ok(routes)
            }
            RoutesSpec::Map(table) => Ok(table
                .iter()
                .map(|(name, entry)| {
                    let effective = match entry {
                        PatternEntry::Navigator(node) => Effective::Node(Cow::Borrowed(node)),
                        PatternEntry::Route(def) => Effective::Route(def),
                    };
                    (name.clone(), effective)
                })
                .collect()),
        }
    }

    /// Registry routes selected by `feature_routes`, later prefixes winning.
    fn expand_prefixes(&self, prefixes: &[String]) -> BTreeMap<String, Effective<'a>> {
        let mut expanded = BTreeMap::new();
        for prefix in prefixes {
            for (name, def) in self.registry.with_prefix(prefix) {
                expanded.insert(name.clone(), Effective::Route(def));
            }
        }
        expanded
    }
}

/// Inline list elements carrying a `navigator` are resolved like any other
/// nested node; everything else is passed through untouched.
fn inline_entry(value: &Value) -> Effective<'_> {
    if PatternEntry::is_node_value(value) {
        match serde_json::from_value::<NavigatorNode>(value.clone()) {
            Ok(node) => return Effective::Node(Cow::Owned(node)),
            Err(e) => tracing::warn!(
                entry = %value,
                error = %e,
                "Inline navigator entry is malformed, binding it as an inline route"
            ),
        }
    }
    Effective::Inline(value)
}

/// Resolve `root` against `registry` using the default depth bound.
pub fn resolve<N>(
    registry: &RouteRegistry,
    navigators: &NavigatorSet<N>,
    root: &NavigatorNode,
) -> RouteResult<N> {
    Resolver::new(registry, navigators).resolve(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::definition::Options;
    use crate::routing::navigator::JsonNavigator;
    use serde_json::json;

    fn registry(names: &[&str]) -> RouteRegistry {
        names
            .iter()
            .map(|n| (n.to_string(), RouteDefinition::new(format!("{}Screen", n))))
            .collect()
    }

    fn navigators() -> NavigatorSet<Value> {
        NavigatorSet::new()
            .with("stack", JsonNavigator::new("stack"))
            .with("switch", JsonNavigator::new("switch"))
    }

    /// Navigator that only records which children it received.
    fn keys_navigators() -> NavigatorSet<Vec<String>> {
        NavigatorSet::new().with("keys", |children: Children<Vec<String>>, _: Options| {
            children.into_keys().collect::<Vec<_>>()
        })
    }

    #[test]
    fn test_route_list_expansion() {
        let reg = registry(&["a", "b", "c"]);
        let node = NavigatorNode::new("stack").with_route_names(["a", "b"]);

        let tree = resolve(&reg, &navigators(), &node).unwrap();

        assert_eq!(
            tree["routes"],
            json!({ "a": { "screen": "aScreen" }, "b": { "screen": "bScreen" } })
        );
    }

    #[test]
    fn test_feature_prefix_expansion() {
        let reg = registry(&["foo.A", "bar.B"]);
        let node = NavigatorNode::new("keys").with_feature_routes(["foo"]);

        let keys = resolve(&reg, &keys_navigators(), &node).unwrap();
        assert_eq!(keys, vec!["foo.A"]);
    }

    #[test]
    fn test_explicit_entries_win_over_prefix_entries() {
        let reg = registry(&["app.HOME", "app.LIST"]);
        let node = NavigatorNode::new("stack")
            .with_child("app.HOME", RouteDefinition::new("CustomHome"))
            .with_feature_routes(["app"]);

        let tree = resolve(&reg, &navigators(), &node).unwrap();

        assert_eq!(tree["routes"]["app.HOME"]["screen"], "CustomHome");
        assert_eq!(tree["routes"]["app.LIST"]["screen"], "app.LISTScreen");
    }

    #[test]
    fn test_route_not_found() {
        let reg = registry(&["a"]);
        let node = NavigatorNode::new("stack").with_route_names(["home"]);

        let err = resolve(&reg, &navigators(), &node).unwrap_err();
        assert_eq!(err, RouteError::RouteNotFound("home".into()));
        assert!(err.to_string().contains("home"));
    }

    #[test]
    fn test_missing_navigator() {
        let reg = registry(&["a"]);

        let unnamed = NavigatorNode::default().with_route_names(["a"]);
        let err = resolve(&reg, &navigators(), &unnamed).unwrap_err();
        assert_eq!(
            err,
            RouteError::MissingNavigatorFactory {
                current: "undefined".into()
            }
        );

        let unknown = NavigatorNode::new("drawer").with_route_names(["a"]);
        let err = resolve(&reg, &navigators(), &unknown).unwrap_err();
        assert!(err.to_string().ends_with("current: drawer"));
    }

    #[test]
    fn test_no_routes_detected_includes_node() {
        let reg = registry(&["a"]);
        let node = NavigatorNode::new("stack");

        let err = resolve(&reg, &navigators(), &node).unwrap_err();
        assert_eq!(err, RouteError::NoRoutesDetected(r#"{"navigator":"stack"}"#.into()));
        assert!(err.to_string().contains(r#"{"navigator":"stack"}"#));
    }

    #[test]
    fn test_empty_route_list() {
        let reg = registry(&["a"]);

        let empty = NavigatorNode::new("stack").with_route_names(Vec::<String>::new());
        assert!(matches!(
            resolve(&reg, &navigators(), &empty),
            Err(RouteError::EmptyRouteList { .. })
        ));

        let unmatched = NavigatorNode::new("stack").with_feature_routes(["nothing"]);
        assert!(matches!(
            resolve(&reg, &navigators(), &unmatched),
            Err(RouteError::EmptyRouteList { .. })
        ));
    }

    #[test]
    fn test_nested_error_aborts_whole_tree() {
        let reg = registry(&["a"]);
        let node = NavigatorNode::new("switch")
            .with_child("ok", NavigatorNode::new("stack").with_route_names(["a"]))
            .with_child("broken", NavigatorNode::new("stack").with_route_names(["missing"]));

        let err = resolve(&reg, &navigators(), &node).unwrap_err();
        assert_eq!(err, RouteError::RouteNotFound("missing".into()));
    }

    #[test]
    fn test_options_passed_to_factory() {
        let reg = registry(&["a"]);
        let mut options = Options::new();
        options.insert("initialRouteName".into(), json!("a"));
        let node = NavigatorNode::new("stack")
            .with_route_names(["a"])
            .with_options(options);

        let tree = resolve(&reg, &navigators(), &node).unwrap();
        assert_eq!(tree["options"], json!({ "initialRouteName": "a" }));
    }

    #[test]
    fn test_inline_list_element_bound_under_itself() {
        let reg = registry(&["a"]);
        let node: NavigatorNode =
            serde_json::from_value(json!({ "navigator": "stack", "routes": ["a", 7] })).unwrap();

        let tree = resolve(&reg, &navigators(), &node).unwrap();
        assert_eq!(tree["routes"]["7"], json!(7));
    }

    #[test]
    fn test_inline_route_with_routes_prop_stays_a_leaf() {
        let reg = registry(&["a"]);
        let node: NavigatorNode = serde_json::from_value(json!({
            "navigator": "stack",
            "routes": ["a", { "screen": "X", "routes": "y" }]
        }))
        .unwrap();

        let tree = resolve(&reg, &navigators(), &node).unwrap();
        let children = tree["routes"].as_object().unwrap();
        assert_eq!(children.len(), 2);
        assert!(children.values().any(|c| c == &json!({ "screen": "X", "routes": "y" })));
    }

    #[test]
    fn test_depth_bound() {
        let reg = registry(&["a"]);
        let mut node = NavigatorNode::new("stack").with_route_names(["a"]);
        for _ in 0..4 {
            node = NavigatorNode::new("stack").with_child("inner", node);
        }

        assert!(Resolver::new(&reg, &navigators())
            .with_max_depth(5)
            .resolve(&node)
            .is_ok());
        assert_eq!(
            Resolver::new(&reg, &navigators())
                .with_max_depth(4)
                .resolve(&node)
                .unwrap_err(),
            RouteError::DepthExceeded { max: 4 }
        );
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let reg = registry(&["app.A", "app.B", "home"]);
        let node = NavigatorNode::new("switch")
            .with_child("main", NavigatorNode::new("stack").with_feature_routes(["app"]))
            .with_child("home", NavigatorNode::new("stack").with_route_names(["home"]));

        let first = resolve(&reg, &navigators(), &node).unwrap();
        let second = resolve(&reg, &navigators(), &node).unwrap();
        assert_eq!(first, second);
    }
}
