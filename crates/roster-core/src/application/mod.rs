//! Application layer for Roster.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (UserCollection, ThemeStore)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Validation lives in `crate::domain`.

pub mod error;
pub mod operation;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CollectionSnapshot, // read-only view handed to presentation
    DEFAULT_DISPLAY_LIMIT,
    ThemeControl,
    ThemeStore,
    UserCollection,
};

// Re-export port traits (for adapter implementation)
pub use ports::UserGateway;

pub use error::ApplicationError;
pub use operation::CollectionOperation;
