//! Infrastructure layer module
//!
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)
//! - Composition root wiring stores, caches and query handlers

pub mod bootstrap;
pub mod config;
pub mod logging;
