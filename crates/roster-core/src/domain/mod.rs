// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Roster.
//!
//! This module contains pure business logic with no I/O. Remote access is
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::user::{NewUser, User, UserId, UserPatch};

pub use error::DomainError;

pub use value_objects::{Theme, ThemeAction};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Theme Tests
    // ========================================================================

    #[test]
    fn theme_parses_correctly() {
        assert_eq!(Theme::from_str("light").unwrap(), Theme::Light);
        assert_eq!(Theme::from_str(" DARK ").unwrap(), Theme::Dark);
        assert!(Theme::from_str("sepia").is_err());
    }

    #[test]
    fn theme_defaults_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn toggle_flips_between_the_two_states() {
        assert_eq!(Theme::Light.apply(ThemeAction::Toggle), Theme::Dark);
        assert_eq!(Theme::Dark.apply(ThemeAction::Toggle), Theme::Light);
    }

    #[test]
    fn toggle_twice_is_identity() {
        let theme = Theme::Dark;
        assert_eq!(
            theme.apply(ThemeAction::Toggle).apply(ThemeAction::Toggle),
            theme
        );
    }

    #[test]
    fn set_ignores_current_state() {
        for current in [Theme::Light, Theme::Dark] {
            assert_eq!(current.apply(ThemeAction::Set(Theme::Dark)), Theme::Dark);
            assert_eq!(current.apply(ThemeAction::Set(Theme::Light)), Theme::Light);
        }
    }

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }

    // ========================================================================
    // User Tests
    // ========================================================================

    #[test]
    fn user_id_parses() {
        assert_eq!(UserId::from_str("3").unwrap(), UserId::new(3));
        assert!(UserId::from_str("three").is_err());
        assert!(UserId::from_str("-1").is_err());
    }

    #[test]
    fn user_decodes_and_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough" }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user, User::new(1, "Leanne Graham", "Sincere@april.biz"));
    }

    #[test]
    fn identity_is_the_id_only() {
        let a = User::new(3, "A", "a@x.com");
        let b = User::new(3, "B", "b@x.com");
        let c = User::new(4, "A", "a@x.com");

        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&c));
    }

    // ========================================================================
    // Draft / Patch Tests
    // ========================================================================

    #[test]
    fn new_user_trims_and_accepts() {
        let draft = NewUser::new("  Ada ", "ada@x.com").unwrap();
        assert_eq!(draft.name(), "Ada");
        assert_eq!(draft.email(), "ada@x.com");
    }

    #[test]
    fn new_user_rejects_blank_fields() {
        assert_eq!(
            NewUser::new("", "a@x.com"),
            Err(DomainError::MissingField { field: "name" })
        );
        assert_eq!(
            NewUser::new("A", "   "),
            Err(DomainError::MissingField { field: "email" })
        );
    }

    #[test]
    fn patch_omits_absent_fields_on_the_wire() {
        let patch = UserPatch::new().with_name("B").unwrap();
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"name":"B"}"#);
    }

    #[test]
    fn patch_from_parts_rejects_no_change() {
        assert_eq!(UserPatch::from_parts(None, None), Err(DomainError::EmptyPatch));
    }

    #[test]
    fn patch_rejects_blank_present_field() {
        assert!(UserPatch::from_parts(Some(" ".into()), None).is_err());
    }

    #[test]
    fn patch_applies_present_fields_only() {
        let user = User::new(3, "Old", "old@x.com");
        let patch = UserPatch::new().with_name("New").unwrap();

        let updated = patch.apply_to(&user);

        assert_eq!(updated, User::new(3, "New", "old@x.com"));
    }

    #[test]
    fn validator_delegates_to_constructors() {
        assert!(DomainValidator::validate_draft("A", "a@x.com").is_ok());
        assert!(DomainValidator::validate_patch(None, Some("e@x.com")).is_ok());
        assert!(DomainValidator::validate_patch(None, None).is_err());
    }
}
