//! Infrastructure adapters for Roster.
//!
//! This crate implements the ports defined in `roster-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod fixtures;
pub mod gateway;

// Re-export commonly used adapters
pub use gateway::{GatewayBuildError, HttpUserGateway, InMemoryUserGateway};
