//! Domain layer for the vocabulary backend
//!
//! This module contains the entities, read-side views, repository ports and
//! error types shared by the adapters and services.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
