//! Adapters implementing the domain ports.

pub mod cache;
pub mod memory;
