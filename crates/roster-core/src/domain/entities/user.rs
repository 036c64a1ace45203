//! The user record and the two request shapes that produce one.
//!
//! - [`User`]: a confirmed record. Identity is [`UserId`], assigned by the
//!   remote and never changed locally.
//! - [`NewUser`]: a validated draft for creation.
//! - [`UserPatch`]: a partial update with explicit per-field presence.
//!   An absent field is left alone by the remote; a present field replaces
//!   the stored value. There is no "clear" state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── UserId ───────────────────────────────────────────────────────────────────

/// Server-assigned identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidUserId(s.to_string()))
    }
}

// ── User ─────────────────────────────────────────────────────────────────────

/// A user record as confirmed by the remote.
///
/// Unknown fields in remote payloads are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Two records are the same user iff their ids match.
    pub fn same_identity(&self, other: &User) -> bool {
        self.id == other.id
    }
}

// ── NewUser ──────────────────────────────────────────────────────────────────

/// Draft for creating a user. Both fields are required and non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, DomainError> {
        let name = required("name", name.into())?;
        let email = required("email", email.into())?;
        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ── UserPatch ────────────────────────────────────────────────────────────────

/// Partial update. Each field is either absent (untouched) or a new value.
///
/// Absent fields are omitted from the serialized body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl UserPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self, DomainError> {
        self.name = Some(required("name", name.into())?);
        Ok(self)
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Result<Self, DomainError> {
        self.email = Some(required("email", email.into())?);
        Ok(self)
    }

    /// Build from optional inputs, rejecting a patch that changes nothing.
    pub fn from_parts(name: Option<String>, email: Option<String>) -> Result<Self, DomainError> {
        let mut patch = Self::new();
        if let Some(name) = name {
            patch = patch.with_name(name)?;
        }
        if let Some(email) = email {
            patch = patch.with_email(email)?;
        }
        if patch.is_empty() {
            return Err(DomainError::EmptyPatch);
        }
        Ok(patch)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Apply the present fields to a local record.
    ///
    /// Used by adapters that confirm updates themselves (the in-memory
    /// gateway); the collection always takes the remote's returned record.
    pub fn apply_to(&self, user: &User) -> User {
        User {
            id: user.id,
            name: self.name.clone().unwrap_or_else(|| user.name.clone()),
            email: self.email.clone().unwrap_or_else(|| user.email.clone()),
        }
    }
}

fn required(field: &'static str, value: String) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(trimmed.to_string())
}
