//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::application::CollectionOperation;
use crate::domain::UserId;
use crate::error::ErrorCategory;

/// Errors that occur while talking to the remote or reconciling local state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The remote call did not succeed.
    ///
    /// Transport failures, non-success statuses and undecodable bodies all
    /// collapse into this one kind. `reason` is diagnostic text only.
    #[error("{}: {reason}", .operation.failure_message())]
    RequestFailed {
        operation: CollectionOperation,
        reason: String,
    },

    /// The id is not present in the local collection.
    #[error("User {id} is not in the collection")]
    UnknownUser { id: UserId },
}

impl ApplicationError {
    pub fn request_failed(operation: CollectionOperation, reason: impl Into<String>) -> Self {
        Self::RequestFailed {
            operation,
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RequestFailed { .. } => vec![
                "Check your network connection and the configured API URL".into(),
                "Run the command again to retry".into(),
                "Use --offline to work against the built-in fixture data".into(),
            ],
            Self::UnknownUser { id } => vec![
                format!("User {} was not among the loaded users", id),
                "Try: roster users list to see which ids are loaded".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RequestFailed { .. } => ErrorCategory::Remote,
            Self::UnknownUser { .. } => ErrorCategory::NotFound,
        }
    }
}
