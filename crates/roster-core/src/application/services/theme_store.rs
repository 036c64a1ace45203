//! Theme Store - the owned holder of the current theme.
//!
//! The transitions themselves live in [`Theme::apply`]; this service only
//! stores the current value. It is constructed explicitly and passed by
//! reference to whoever needs it. There is no process-wide instance.

use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::domain::{Theme, ThemeAction};

/// Read and change the current theme.
///
/// Call sites choose how to obtain an implementation (explicit argument,
/// a field on a session, a trait object in a container).
pub trait ThemeControl: Send + Sync {
    /// Current theme.
    fn get(&self) -> Theme;

    /// Flip between light and dark; returns the new theme.
    fn toggle(&self) -> Theme;

    /// Set a specific theme.
    fn set(&self, theme: Theme);
}

/// Thread-safe theme holder.
#[derive(Debug, Default)]
pub struct ThemeStore {
    current: RwLock<Theme>,
}

impl ThemeStore {
    /// Create a store starting at `initial`.
    pub fn new(initial: Theme) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// Apply an action and return the resulting theme.
    pub fn dispatch(&self, action: ThemeAction) -> Theme {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = current.apply(action);
        if next != *current {
            debug!(from = %*current, to = %next, "Theme changed");
        }
        *current = next;
        next
    }
}

impl ThemeControl for ThemeStore {
    fn get(&self) -> Theme {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn toggle(&self) -> Theme {
        self.dispatch(ThemeAction::Toggle)
    }

    fn set(&self, theme: Theme) {
        self.dispatch(ThemeAction::Set(theme));
    }
}
