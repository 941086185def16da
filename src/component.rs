//! Renderable components referenced by route screens.
//!
//! # Responsibilities
//! - Define the `Renderable` capability a screen component must provide
//! - Keep a catalog of known components, keyed by name
//! - Answer "is this screen reference valid?" for feature validation
//!
//! # Design Decisions
//! - Routes reference screens by name; the catalog is the only place that
//!   knows which names are backed by a real component
//! - Lookups never consult anything but the catalog (no shape sniffing)

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Capability implemented by anything that can be mounted as a screen.
pub trait Renderable: fmt::Debug + Send + Sync {
    /// Name the component is registered under.
    fn name(&self) -> &str;
}

/// Plain component identified only by its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedComponent {
    name: String,
}

impl NamedComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Renderable for NamedComponent {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Registry of renderable components.
#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    components: BTreeMap<String, Arc<dyn Renderable>>,
}

impl ComponentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog of [`NamedComponent`]s.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for name in names {
            catalog.register(NamedComponent::new(name));
        }
        catalog
    }

    /// Register a component under its own name, replacing any previous one.
    pub fn register<C>(&mut self, component: C)
    where
        C: Renderable + 'static,
    {
        self.components
            .insert(component.name().to_string(), Arc::new(component));
    }

    pub fn with<C>(mut self, component: C) -> Self
    where
        C: Renderable + 'static,
    {
        self.register(component);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Renderable>> {
        self.components.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns true if `screen` names a registered component.
    pub fn is_renderable(&self, screen: &Value) -> bool {
        screen
            .as_str()
            .map(|name| self.components.contains_key(name))
            .unwrap_or(false)
    }
}
