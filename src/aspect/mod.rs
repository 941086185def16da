//! Route aspect: the plug-in that turns feature routes into the app root.
//!
//! # Lifecycle
//! ```text
//! genesis()                      required configuration present?
//! validate_feature_content(f)    once per active feature
//! assemble_feature_content(fs)   → RouteAssemblyState (flat registry)
//! initial_root_app_elm(state, root)
//!     → resolve pattern against the registry
//!     → app container factory wraps the tree
//!     → new application root
//! ```
//!
//! # Design Decisions
//! - Validation hooks report problems as messages (`None` = valid); the
//!   host decides how to surface them
//! - Assembly state is an owned value handed back to the caller, never
//!   kept inside the aspect
//! - This aspect must be the only one seeding the root: an existing root
//!   is a conflict once there is something to render

pub mod container;

use std::fmt;

use thiserror::Error;

use crate::component::{ComponentCatalog, Renderable};
use crate::config::schema::AspectConfig;
use crate::feature::{assemble_routes, validate_content, Feature};
use crate::routing::definition::RouteRegistry;
use crate::routing::navigator::{NavigatorFactory, NavigatorSet};
use crate::routing::pattern::NavigatorNode;
use crate::routing::resolver::Resolver;
use crate::routing::types::{RouteError, RouteResult};

pub use container::{AppContainerFactory, JsonAppContainer};

/// Invalid parameters given when building a [`RouteAspect`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AspectError {
    #[error("route aspect parameter violation: name is required")]
    MissingName,

    #[error("route aspect parameter violation: max_depth must be greater than zero")]
    ZeroDepth,
}

/// Routes assembled from one set of active features.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteAssemblyState {
    routes: RouteRegistry,
    contributors: Vec<String>,
}

impl RouteAssemblyState {
    pub fn routes(&self) -> &RouteRegistry {
        &self.routes
    }

    /// Names of the features that exposed a routes table, in order.
    pub fn contributors(&self) -> &[String] {
        &self.contributors
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Aspect building the navigation tree for the application root.
///
/// `N` is the navigator type produced by navigator factories, `R` the
/// application root produced by the app container factory.
pub struct RouteAspect<N, R> {
    config: AspectConfig,
    pattern: Option<NavigatorNode>,
    navigators: NavigatorSet<N>,
    container: Option<Box<dyn AppContainerFactory<N, R>>>,
    catalog: ComponentCatalog,
}

impl<N, R> RouteAspect<N, R> {
    pub fn builder() -> RouteAspectBuilder<N, R> {
        RouteAspectBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &AspectConfig {
        &self.config
    }

    pub fn navigation_pattern(&self) -> Option<&NavigatorNode> {
        self.pattern.as_ref()
    }

    pub fn navigators(&self) -> &NavigatorSet<N> {
        &self.navigators
    }

    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    /// Check required configuration. `None` means ready.
    pub fn genesis(&self) -> Option<String> {
        tracing::debug!(aspect = %self.name(), "genesis() validating required configuration");

        if self.pattern.is_none() {
            return Some(format!(
                "the {} aspect requires a navigation pattern to be configured",
                self.name()
            ));
        }
        if self.container.is_none() {
            return Some(format!(
                "the {} aspect requires an app container factory to be configured",
                self.name()
            ));
        }
        None
    }

    /// Check one feature's route content. `None` means valid.
    pub fn validate_feature_content(&self, feature: &Feature) -> Option<String> {
        validate_content(self.name(), feature, &self.catalog)
            .err()
            .map(|e| e.to_string())
    }

    /// Merge the routes of `features` (active, in activation order).
    pub fn assemble_feature_content<'a, I>(&self, features: I) -> RouteAssemblyState
    where
        I: IntoIterator<Item = &'a Feature>,
    {
        let features: Vec<&Feature> = features.into_iter().collect();
        let contributors = features
            .iter()
            .filter(|f| f.routes_object(self.name()).is_some())
            .map(|f| f.name.clone())
            .collect();

        RouteAssemblyState {
            routes: assemble_routes(self.name(), features),
            contributors,
        }
    }

    /// Resolve the configured navigation pattern against `state`.
    pub fn resolve(&self, state: &RouteAssemblyState) -> RouteResult<N> {
        let pattern = self.pattern.as_ref().ok_or(RouteError::PatternMissing)?;
        Resolver::new(&state.routes, &self.navigators)
            .with_max_depth(self.config.max_depth)
            .resolve(pattern)
    }

    /// Seed the application root with the navigation tree.
    ///
    /// With no routes at all the current root is returned untouched.
    pub fn initial_root_app_elm(
        &self,
        state: &RouteAssemblyState,
        current_root: Option<R>,
    ) -> RouteResult<Option<R>> {
        if state.is_empty() {
            tracing::info!(
                aspect = %self.name(),
                "No routes exposed by any feature, root app element left untouched"
            );
            return Ok(current_root);
        }

        if current_root.is_some() {
            return Err(RouteError::RootConflict);
        }

        if self.pattern.is_none() {
            return Err(RouteError::PatternMissing);
        }
        let container = self
            .container
            .as_deref()
            .ok_or(RouteError::ContainerMissing)?;

        let tree = self.resolve(state)?;

        tracing::info!(
            aspect = %self.name(),
            routes = state.routes.len(),
            "Introducing app container into root app element"
        );
        Ok(Some(container.create(tree)))
    }
}

impl<N, R> fmt::Debug for RouteAspect<N, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteAspect")
            .field("config", &self.config)
            .field("pattern", &self.pattern)
            .field("navigators", &self.navigators)
            .field("container", &self.container.is_some())
            .field("catalog", &self.catalog)
            .finish()
    }
}

/// Builder for [`RouteAspect`].
pub struct RouteAspectBuilder<N, R> {
    config: AspectConfig,
    pattern: Option<NavigatorNode>,
    navigators: NavigatorSet<N>,
    container: Option<Box<dyn AppContainerFactory<N, R>>>,
    catalog: ComponentCatalog,
}

impl<N, R> RouteAspectBuilder<N, R> {
    fn new() -> Self {
        Self {
            config: AspectConfig::default(),
            pattern: None,
            navigators: NavigatorSet::new(),
            container: None,
            catalog: ComponentCatalog::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn config(mut self, config: AspectConfig) -> Self {
        self.config = config;
        self
    }

    pub fn navigation_pattern(mut self, pattern: NavigatorNode) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn navigator<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: NavigatorFactory<N> + 'static,
    {
        self.navigators.register(name, factory);
        self
    }

    pub fn navigators(mut self, navigators: NavigatorSet<N>) -> Self {
        self.navigators = navigators;
        self
    }

    pub fn app_container<F>(mut self, factory: F) -> Self
    where
        F: AppContainerFactory<N, R> + 'static,
    {
        self.container = Some(Box::new(factory));
        self
    }

    pub fn catalog(mut self, catalog: ComponentCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn component<C>(mut self, component: C) -> Self
    where
        C: Renderable + 'static,
    {
        self.catalog.register(component);
        self
    }

    pub fn build(self) -> Result<RouteAspect<N, R>, AspectError> {
        if self.config.name.trim().is_empty() {
            return Err(AspectError::MissingName);
        }
        if self.config.max_depth == 0 {
            return Err(AspectError::ZeroDepth);
        }

        Ok(RouteAspect {
            config: self.config,
            pattern: self.pattern,
            navigators: self.navigators,
            container: self.container,
            catalog: self.catalog,
        })
    }
}
