//! Logging for the storefront tools.
//!
//! This crate provides:
//! - `LogLevel` / `LogFormat` - Configurable log settings
//! - `init_logging` - Global `tracing` subscriber installation

mod logging;

pub use logging::*;
