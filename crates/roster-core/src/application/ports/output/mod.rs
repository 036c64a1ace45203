//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `roster-adapters` crate provides implementations.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId, UserPatch};
use crate::error::RosterResult;

/// Port for the remote user collection.
///
/// Implemented by:
/// - `roster_adapters::gateway::HttpUserGateway` (production, REST over HTTP)
/// - `roster_adapters::gateway::InMemoryUserGateway` (offline fixture, testing)
///
/// ## Contract
///
/// - Stateless from the caller's point of view: no caching, no retry.
/// - Every failure is `ApplicationError::RequestFailed` tagged with the
///   operation; callers do not branch on the reason.
/// - `list` returns remote order, unpaginated.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Read the full collection.
    async fn list(&self) -> RosterResult<Vec<User>>;

    /// Read one user by id.
    async fn get(&self, id: UserId) -> RosterResult<User>;

    /// Create a user; the returned record carries the server-assigned id.
    async fn create(&self, draft: &NewUser) -> RosterResult<User>;

    /// Apply a partial update; returns the record as confirmed by the remote.
    async fn update(&self, id: UserId, patch: &UserPatch) -> RosterResult<User>;

    /// Delete a user.
    async fn remove(&self, id: UserId) -> RosterResult<()>;
}
