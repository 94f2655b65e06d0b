//! Backhaul binary internals, exposed for integration tests.

pub mod cli;
pub mod runner;
pub mod supervisor;
