//! Unified error handling for Roster Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Roster Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RosterError {
    /// Errors from the domain layer (validation of drafts and patches).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (remote calls, local lookups).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl RosterError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }

    /// Remote failures are worth a manual retry; nothing else is.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::RequestFailed { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Remote,
}

/// Convenient result type alias.
pub type RosterResult<T> = Result<T, RosterError>;
