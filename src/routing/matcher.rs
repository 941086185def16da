//! Route name matching.
//!
//! # Responsibilities
//! - Match route names by literal prefix (feature namespaces)
//! - Match route names exactly
//! - Combine conditions with OR semantics
//!
//! # Design Decisions
//! - Prefix matching is case-sensitive and literal: "foo" matches
//!   "foo.A" and "foobar.B" alike, no separator is implied
//! - Empty prefix matches every route
//! - No regex

use std::collections::BTreeSet;
use std::fmt;

use crate::routing::definition::RouteRegistry;

/// Trait for matching route names against a condition.
pub trait RouteMatcher: Send + Sync + fmt::Debug {
    /// Returns true if the route name matches this condition.
    fn matches(&self, name: &str) -> bool;
}

/// Matches route names starting with a feature prefix.
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    prefix: String,
}

impl PrefixMatcher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl RouteMatcher for PrefixMatcher {
    fn matches(&self, name: &str) -> bool {
        name.starts_with(&self.prefix)
    }
}

/// Matches an explicit set of route names.
#[derive(Debug, Clone, Default)]
pub struct NameMatcher {
    names: BTreeSet<String>,
}

impl NameMatcher {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl RouteMatcher for NameMatcher {
    fn matches(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug, Default)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn RouteMatcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn RouteMatcher>>) -> Self {
        Self { matchers }
    }
}

impl RouteMatcher for AnyMatcher {
    fn matches(&self, name: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(name))
    }
}

/// Selects routes listed by name or belonging to one of the given features.
#[derive(Debug, Clone, Default)]
pub struct RouteFilter {
    pub names: Vec<String>,
    pub prefixes: Vec<String>,
}

impl RouteFilter {
    pub fn new(names: Vec<String>, prefixes: Vec<String>) -> Self {
        Self { names, prefixes }
    }

    /// True when neither names nor prefixes were given.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.prefixes.is_empty()
    }

    fn matcher(&self) -> AnyMatcher {
        let mut matchers: Vec<Box<dyn RouteMatcher>> =
            vec![Box::new(NameMatcher::new(self.names.iter().cloned()))];
        for prefix in &self.prefixes {
            matchers.push(Box::new(PrefixMatcher::new(prefix.clone())));
        }
        AnyMatcher::new(matchers)
    }

    /// Copy of `registry` restricted to the selected routes.
    pub fn apply(&self, registry: &RouteRegistry) -> RouteRegistry {
        let matcher = self.matcher();
        registry
            .iter()
            .filter(|(name, _)| matcher.matches(name))
            .map(|(name, def)| (name.clone(), def.clone()))
            .collect()
    }
}
