//! Backhaul core logic
//!
//! This crate holds the pure half of Backhaul: job configuration,
//! the filename ordering the mirror relies on, the incremental diff
//! between a local and a remote listing, and the retention planner
//! that bounds the target directory to a configured cap.
//!
//! Nothing in here touches the network or spawns tasks; the I/O lives
//! in `backhaul-transfer` and the per-job loop in the `backhaul`
//! binary.

pub mod config;
pub mod diff;
pub mod error;
pub mod ordering;
pub mod retention;

// Re-export commonly used types
pub use config::{load_jobs, JobConfig};
pub use error::{Error, Result};
pub use retention::RetentionPlan;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
