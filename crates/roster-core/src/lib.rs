//! Roster Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Roster
//! user-directory client, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           roster-cli (CLI)              │
//! │   (Presentation: commands, shell)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (UserCollection, ThemeStore)        │
//! │    Sequences and reconciles state       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: UserGateway)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    roster-adapters (Infrastructure)     │
//! │ (HttpUserGateway, InMemoryUserGateway)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │    (User, NewUser, UserPatch, Theme)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_core::prelude::*;
//!
//! // 1. Inject an adapter
//! let collection = UserCollection::new(Box::new(gateway));
//!
//! // 2. Drive operations; failures land in the snapshot, never in a Result
//! collection.fetch_all().await;
//! let snapshot = collection.snapshot();
//! assert!(!snapshot.is_processing);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CollectionOperation, CollectionSnapshot, ThemeControl, ThemeStore, UserCollection,
        ports::UserGateway,
    };
    pub use crate::domain::{NewUser, Theme, ThemeAction, User, UserId, UserPatch};
    pub use crate::error::{RosterError, RosterResult};
}

