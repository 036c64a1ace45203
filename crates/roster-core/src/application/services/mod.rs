//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "load the users" or "toggle the theme".

pub mod theme_store;
pub mod user_collection;

pub use theme_store::{ThemeControl, ThemeStore};
pub use user_collection::{CollectionSnapshot, DEFAULT_DISPLAY_LIMIT, UserCollection};
