//! Feature contributions.
//!
//! # Data Flow
//! ```text
//! Feature (name, enabled, aspect-keyed content)
//!     → validation.rs (shape + screen checks, per feature)
//!     → assembly.rs (merge every active feature's routes)
//!     → RouteRegistry
//! ```
//!
//! # Design Decisions
//! - Feature content stays loosely typed until validated: it is authored
//!   by independent features and may be malformed
//! - Activation order is the order features are declared in
//! - Disabled features contribute nothing

pub mod assembly;
pub mod validation;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use assembly::assemble_routes;
pub use validation::{validate_content, ContentError};

/// An independently activated module of the application.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Feature {
    pub name: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Content keyed by aspect name (e.g. `route`).
    #[serde(flatten)]
    pub content: Map<String, Value>,
}

fn default_enabled() -> bool {
    true
}

impl Feature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            content: Map::new(),
        }
    }

    /// Attach content for the aspect named `aspect`.
    pub fn with_content(mut self, aspect: impl Into<String>, content: Value) -> Self {
        self.content.insert(aspect.into(), content);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn aspect_content(&self, aspect: &str) -> Option<&Value> {
        self.content.get(aspect)
    }

    /// The `routes` object under the aspect's content, if well-formed.
    pub(crate) fn routes_object(&self, aspect: &str) -> Option<&Map<String, Value>> {
        self.aspect_content(aspect)?
            .as_object()?
            .get("routes")?
            .as_object()
    }
}

/// Enabled features, in declaration order.
pub fn active_features(features: &[Feature]) -> impl Iterator<Item = &Feature> {
    features.iter().filter(|f| f.enabled)
}
