//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load manifest → Build aspect → Genesis → Validate features
//!     → Assemble routes → Resolve pattern → Inject application root
//! ```
//!
//! # Design Decisions
//! - Ordered startup: configuration first, root injection last
//! - Runs once per assembly cycle; nothing is shared between cycles

pub mod startup;

pub use startup::{collect_issues, launch, manifest_aspect, LaunchError, Launched};
