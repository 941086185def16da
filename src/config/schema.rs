//! Configuration schema definitions.
//!
//! This module defines the application manifest read by the `navtree`
//! binary. All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::feature::Feature;
use crate::routing::pattern::NavigatorNode;
use crate::routing::resolver::DEFAULT_MAX_DEPTH;

/// Root configuration: one application's features and navigation pattern.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Manifest {
    /// Route aspect settings.
    pub aspect: AspectConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Names of renderable screen components.
    pub components: Vec<String>,

    /// Navigator kinds the pattern may use.
    pub navigators: Vec<String>,

    /// Root navigation pattern node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<NavigatorNode>,

    /// Features, in activation order.
    pub features: Vec<Feature>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            aspect: AspectConfig::default(),
            observability: ObservabilityConfig::default(),
            components: Vec::new(),
            navigators: default_navigators(),
            pattern: None,
            features: Vec::new(),
        }
    }
}

fn default_navigators() -> Vec<String> {
    ["switch", "stack", "tab", "drawer"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Route aspect configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AspectConfig {
    /// Aspect name; features expose routes under `<name>.routes`.
    pub name: String,

    /// Maximum nesting depth of the navigation pattern.
    pub max_depth: usize,
}

impl Default for AspectConfig {
    fn default() -> Self {
        Self {
            name: "route".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
