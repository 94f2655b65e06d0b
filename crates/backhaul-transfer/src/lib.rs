//! Backhaul transfer I/O
//!
//! The impure half of a mirroring job: scanning the local target
//! directory, scraping the remote directory index, and streaming file
//! downloads with partial-artifact cleanup. All listing results come
//! back ascending-sorted so the core diff and retention logic can
//! consume them directly.

pub mod download;
pub mod index;
pub mod local;

// Re-export commonly used types
pub use index::{HtmlIndexParser, IndexParser, RemoteSource};
pub use local::{list_local, remove_file};
