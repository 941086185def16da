//! Resolution error definitions.

use thiserror::Error;

/// Fatal errors raised while building the navigation tree.
///
/// Any of these aborts application assembly; there is no partial tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A pattern level has no usable navigator factory.
    #[error(
        "each level of the navigation pattern must name a registered navigator factory (key: `navigator`), current: {current}"
    )]
    MissingNavigatorFactory { current: String },

    /// A route listed by name is not in the registry.
    #[error("expanding route `{0}` failed, route not found")]
    RouteNotFound(String),

    /// A node declares neither `routes` nor `feature_routes`.
    #[error(
        "no routes detected, please check the navigation pattern and the routes exposed by features, actual node: {0}"
    )]
    NoRoutesDetected(String),

    /// A node resolved to zero children.
    #[error("navigator `{navigator}` must specify at least one route")]
    EmptyRouteList { navigator: String },

    /// Something else already injected the application root.
    #[error(
        "the route aspect must be registered before other aspects that inject content in the root app element, the app container does not support children"
    )]
    RootConflict,

    /// Routes exist but no navigation pattern was configured.
    #[error("a navigation pattern must be configured to build the navigation tree")]
    PatternMissing,

    /// Routes exist but no app container factory was configured.
    #[error("an app container factory must be configured to inject the navigation tree")]
    ContainerMissing,

    /// The pattern nests deeper than the configured limit.
    #[error("navigation pattern exceeds the maximum depth of {max}")]
    DepthExceeded { max: usize },
}

impl RouteError {
    pub(crate) fn missing_navigator(navigator: Option<&str>) -> Self {
        RouteError::MissingNavigatorFactory {
            current: navigator.unwrap_or("undefined").to_string(),
        }
    }
}

/// Result alias for resolution.
pub type RouteResult<T> = Result<T, RouteError>;
