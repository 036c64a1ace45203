//! Domain value objects: Theme and ThemeAction.
//!
//! # Design
//!
//! The light/dark toggle is one finite-state machine with two states and two
//! transitions. It is modelled here exactly once as a pure function,
//! [`Theme::apply`]. Stateful holders (see `application::services::theme_store`)
//! delegate to it and never re-encode the transitions themselves.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Theme ────────────────────────────────────────────────────────────────────

/// Colour scheme for presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Apply a transition and return the resulting state.
    pub const fn apply(self, action: ThemeAction) -> Self {
        match action {
            ThemeAction::Toggle => self.toggled(),
            ThemeAction::Set(theme) => theme,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(DomainError::InvalidTheme(other.to_string())),
        }
    }
}

// ── ThemeAction ──────────────────────────────────────────────────────────────

/// The only two ways a theme can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Toggle,
    Set(Theme),
}
