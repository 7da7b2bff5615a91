//! Logging initialization shared by the binaries and test suites of the
//! workspace.
pub mod config;
pub mod tracing;

pub use config::Config;
