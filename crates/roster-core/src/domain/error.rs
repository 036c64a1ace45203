// ============================================================================
// domain/error.rs - DOMAIN VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant is a validation failure and carries suggestions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingField { field: &'static str },

    #[error("Update must change at least one field")]
    EmptyPatch,

    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingField { field } => vec![
                format!("The '{}' field cannot be blank", field),
                "Both name and email are required to create a user".into(),
            ],
            Self::EmptyPatch => vec![
                "Pass --name and/or --email to describe the change".into(),
            ],
            Self::InvalidUserId(raw) => vec![
                format!("'{}' is not a user id", raw),
                "User ids are positive integers, e.g. 3".into(),
            ],
            Self::InvalidTheme(raw) => vec![
                format!("'{}' is not a theme", raw),
                "Supported themes: light, dark".into(),
            ],
        }
    }
}
