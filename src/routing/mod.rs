//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Feature routes (merged by feature::assembly)
//!     → definition.rs (RouteRegistry, flat name → RouteDefinition)
//!
//! Navigation pattern (pattern.rs, author-defined, static)
//!     → resolver.rs (expand names and feature prefixes, merge, recurse)
//!     → navigator.rs (NavigatorFactory per level)
//!     → Return: resolved navigator tree or RouteError
//! ```
//!
//! # Design Decisions
//! - Registry is read-only during resolution
//! - Feature prefixes are literal, case-sensitive string prefixes
//! - Explicit routes win over feature-prefix routes on collision
//! - Deterministic: same registry and pattern always build the same tree

pub mod definition;
pub mod matcher;
pub mod navigator;
pub mod pattern;
pub mod resolver;
pub mod types;

pub use definition::{Options, RouteDefinition, RouteRegistry};
pub use navigator::{Children, JsonNavigator, NavigatorFactory, NavigatorSet, ResolvedChild};
pub use pattern::{NavigatorNode, PatternEntry, RouteRef, RoutesSpec};
pub use resolver::{resolve, Resolver};
pub use types::{RouteError, RouteResult};
