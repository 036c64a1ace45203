use crate::domain::{
    entities::{NewUser, UserPatch},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Entry points for callers that receive raw strings (the CLI form and the
/// interactive shell) so parsing rules live here, not in the presentation.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_draft(name: &str, email: &str) -> Result<NewUser, DomainError> {
        NewUser::new(name, email)
    }

    pub fn validate_patch(
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<UserPatch, DomainError> {
        UserPatch::from_parts(name.map(str::to_owned), email.map(str::to_owned))
    }
}
