//! Feature navigation: builds an application's navigation tree from routes
//! contributed by independent features and a static navigation pattern.

pub mod aspect;
pub mod component;
pub mod config;
pub mod feature;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod screens;

pub use aspect::{RouteAspect, RouteAssemblyState};
pub use config::schema::Manifest;
pub use feature::Feature;
pub use routing::{resolve, NavigatorNode, RouteDefinition, RouteError, RouteRegistry};
