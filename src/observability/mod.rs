//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → stderr (fmt layer), filtered by RUST_LOG or manifest level
//! ```

pub mod logging;

pub use logging::init_logging;
