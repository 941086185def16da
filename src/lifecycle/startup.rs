//! Startup orchestration.
//!
//! # Responsibilities
//! - Run the route aspect hooks in their fixed order
//! - Build the route aspect described by a manifest
//!
//! # Order
//! ```text
//! genesis → validate each active feature → assemble registry → inject root
//! ```
//!
//! # Design Decisions
//! - Fail fast: the first genesis or feature problem aborts startup
//! - Only enabled features take part, in declaration order
//! - Each launch assembles a fresh registry

use serde_json::Value;
use thiserror::Error;

use crate::aspect::{AspectError, JsonAppContainer, RouteAspect, RouteAssemblyState};
use crate::component::ComponentCatalog;
use crate::config::schema::Manifest;
use crate::feature::{active_features, Feature};
use crate::routing::navigator::{JsonNavigator, NavigatorSet};
use crate::routing::types::RouteError;

/// Startup failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LaunchError {
    #[error("genesis failed: {0}")]
    Genesis(String),

    #[error("feature `{feature}` content is invalid: {message}")]
    InvalidFeature { feature: String, message: String },

    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Outcome of a successful launch.
#[derive(Debug)]
pub struct Launched<R> {
    pub state: RouteAssemblyState,
    /// Root element after the aspect had its turn.
    pub root: Option<R>,
}

/// Run every route aspect hook against `features`.
pub fn launch<N, R>(
    aspect: &RouteAspect<N, R>,
    features: &[Feature],
    current_root: Option<R>,
) -> Result<Launched<R>, LaunchError> {
    if let Some(message) = aspect.genesis() {
        return Err(LaunchError::Genesis(message));
    }

    for feature in active_features(features) {
        if let Some(message) = aspect.validate_feature_content(feature) {
            tracing::error!(feature = %feature.name, %message, "Feature validation failed");
            return Err(LaunchError::InvalidFeature {
                feature: feature.name.clone(),
                message,
            });
        }
    }

    let state = aspect.assemble_feature_content(active_features(features));
    let root = aspect.initial_root_app_elm(&state, current_root)?;

    tracing::info!(
        aspect = %aspect.name(),
        features = state.contributors().len(),
        routes = state.routes().len(),
        "Application assembled"
    );
    Ok(Launched { state, root })
}

/// Every genesis and feature validation message, without stopping at the
/// first one.
pub fn collect_issues<N, R>(aspect: &RouteAspect<N, R>, features: &[Feature]) -> Vec<String> {
    let mut issues: Vec<String> = aspect.genesis().into_iter().collect();

    for feature in active_features(features) {
        if let Some(message) = aspect.validate_feature_content(feature) {
            issues.push(format!("feature `{}`: {}", feature.name, message));
        }
    }
    issues
}

/// Route aspect for a manifest, rendering the tree as JSON.
pub fn manifest_aspect(manifest: &Manifest) -> Result<RouteAspect<Value, Value>, AspectError> {
    let mut navigators: NavigatorSet<Value> = NavigatorSet::new();
    for kind in &manifest.navigators {
        navigators.register(kind.clone(), JsonNavigator::new(kind.clone()));
    }

    let mut builder = RouteAspect::builder()
        .config(manifest.aspect.clone())
        .navigators(navigators)
        .catalog(ComponentCatalog::from_names(manifest.components.iter().cloned()))
        .app_container(JsonAppContainer);
    if let Some(pattern) = &manifest.pattern {
        builder = builder.navigation_pattern(pattern.clone());
    }
    builder.build()
}
