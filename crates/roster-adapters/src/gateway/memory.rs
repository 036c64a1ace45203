//! In-memory user gateway for offline use and testing.

use std::{
    collections::HashSet,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use tracing::debug;

use roster_core::{
    application::{ApplicationError, CollectionOperation, ports::UserGateway},
    domain::{NewUser, User, UserId, UserPatch},
    error::RosterResult,
};

use crate::fixtures;

/// Thread-safe in-memory stand-in for the remote collection.
///
/// Assigns ids as `max(id) + 1`. Individual operations can be switched to
/// fail so callers can exercise their error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserGateway {
    inner: Arc<RwLock<InMemoryUserGatewayInner>>,
}

#[derive(Debug, Default)]
struct InMemoryUserGatewayInner {
    users: Vec<User>,
    failing: HashSet<CollectionOperation>,
    requests: Vec<CollectionOperation>,
}

impl InMemoryUserGateway {
    /// Create an empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway holding `users` in the given order.
    pub fn with_users(users: Vec<User>) -> Self {
        let gateway = Self::new();
        if let Ok(mut inner) = gateway.inner.write() {
            inner.users = users;
        }
        gateway
    }

    /// Create a gateway seeded with the built-in fixture users.
    pub fn with_fixtures() -> Self {
        Self::with_users(fixtures::all_users())
    }

    /// Make every subsequent `operation` fail until [`Self::recover`] is called.
    pub fn fail_on(&self, operation: CollectionOperation) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.insert(operation);
        }
    }

    /// Stop failing `operation`.
    pub fn recover(&self, operation: CollectionOperation) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.remove(&operation);
        }
    }

    /// Current contents (testing helper).
    pub fn users(&self) -> Vec<User> {
        self.inner
            .read()
            .map(|inner| inner.users.clone())
            .unwrap_or_default()
    }

    /// Operations received so far, in order (testing helper).
    pub fn requests(&self) -> Vec<CollectionOperation> {
        self.inner
            .read()
            .map(|inner| inner.requests.clone())
            .unwrap_or_default()
    }

    /// Record the request, honour failure injection, then run `f` on the store.
    fn with_store<T>(
        &self,
        operation: CollectionOperation,
        f: impl FnOnce(&mut Vec<User>) -> Result<T, String>,
    ) -> RosterResult<T> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::request_failed(operation, "store lock poisoned"))?;

        inner.requests.push(operation);
        debug!(%operation, "In-memory request");

        if inner.failing.contains(&operation) {
            return Err(ApplicationError::request_failed(operation, "simulated failure").into());
        }

        f(&mut inner.users).map_err(|reason| ApplicationError::request_failed(operation, reason).into())
    }
}

fn not_found(id: UserId) -> String {
    format!("unexpected status 404 Not Found for user {id}")
}

#[async_trait]
impl UserGateway for InMemoryUserGateway {
    async fn list(&self) -> RosterResult<Vec<User>> {
        self.with_store(CollectionOperation::Fetch, |users| Ok(users.clone()))
    }

    async fn get(&self, id: UserId) -> RosterResult<User> {
        self.with_store(CollectionOperation::Get, |users| {
            users
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .ok_or_else(|| not_found(id))
        })
    }

    async fn create(&self, draft: &NewUser) -> RosterResult<User> {
        self.with_store(CollectionOperation::Create, |users| {
            let next = users.iter().map(|u| u.id.get()).max().unwrap_or(0) + 1;
            let user = User::new(next, draft.name(), draft.email());
            users.push(user.clone());
            Ok(user)
        })
    }

    async fn update(&self, id: UserId, patch: &UserPatch) -> RosterResult<User> {
        self.with_store(CollectionOperation::Update, |users| {
            let slot = users
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or_else(|| not_found(id))?;
            *slot = patch.apply_to(slot);
            Ok(slot.clone())
        })
    }

    async fn remove(&self, id: UserId) -> RosterResult<()> {
        self.with_store(CollectionOperation::Delete, |users| {
            let before = users.len();
            users.retain(|u| u.id != id);
            if users.len() == before {
                return Err(not_found(id));
            }
            Ok(())
        })
    }
}
