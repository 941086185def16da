//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! manifest file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → Manifest (validated, immutable)
//!     → lifecycle::startup builds the route aspect from it
//!
//! On change (watch mode):
//!     watcher.rs detects change
//!     → loader.rs loads new manifest
//!     → validation.rs validates
//!     → new Manifest sent over a channel, full re-assembly
//! ```
//!
//! # Design Decisions
//! - Manifest is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal manifests
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_manifest, parse_manifest, ConfigError};
pub use schema::{AspectConfig, Manifest, ObservabilityConfig};
pub use validation::ValidationError;
