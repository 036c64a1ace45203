//! User Collection - the in-memory, presentation-owned view of the remote.
//!
//! This service sequences the four collection operations against a
//! [`UserGateway`] and reconciles local state with what the remote confirms:
//!
//! 1. Mark processing and clear the previous error
//! 2. Await the remote
//! 3. On success, apply the confirmed result to `items`
//!    On failure, record the operation's message in `last_error`
//! 4. Leave processing (always, including when the future is dropped)
//!
//! Nothing is written to `items` before the remote confirms. Errors never
//! escape to the caller; presentation reads them from [`CollectionSnapshot`].
//!
//! ## Concurrency
//!
//! Operations take `&self`, so a second call may start while one is in
//! flight. `is_processing` is advisory (for disabling controls), not a lock,
//! and stays `true` until every in-flight operation has settled. Overlapping
//! calls settle in undefined order and the last writer wins on `items` and
//! `last_error`.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, CollectionOperation, ports::UserGateway},
    domain::{NewUser, User, UserId, UserPatch},
    error::RosterError,
};

/// How many users `fetch_all` keeps from the remote list.
pub const DEFAULT_DISPLAY_LIMIT: usize = 5;

/// Read-only copy of the collection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionSnapshot {
    /// Users in arrival order (remote order after a fetch, then appends).
    pub items: Vec<User>,
    /// `true` while at least one operation is awaiting the remote.
    pub is_processing: bool,
    /// Message from the most recent failed operation, if it was the last one.
    pub last_error: Option<String>,
}

impl CollectionSnapshot {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: UserId) -> Option<&User> {
        self.items.iter().find(|u| u.id == id)
    }
}

/// Mutable state behind the lock. `in_flight` counts unsettled operations.
#[derive(Debug, Default)]
struct CollectionState {
    items: Vec<User>,
    in_flight: usize,
    last_error: Option<String>,
}

impl CollectionState {
    fn contains(&self, id: UserId) -> bool {
        self.items.iter().any(|u| u.id == id)
    }
}

/// Owns the user list plus the processing counter and error slot.
pub struct UserCollection {
    gateway: Box<dyn UserGateway>,
    state: RwLock<CollectionState>,
    display_limit: usize,
}

impl UserCollection {
    /// Create an empty collection backed by `gateway`.
    pub fn new(gateway: Box<dyn UserGateway>) -> Self {
        Self {
            gateway,
            state: RwLock::new(CollectionState::default()),
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }

    /// Override how many users `fetch_all` keeps.
    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    /// The adapter, for calls that do not touch collection state.
    pub fn gateway(&self) -> &dyn UserGateway {
        self.gateway.as_ref()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> CollectionSnapshot {
        let state = self.read();
        CollectionSnapshot {
            items: state.items.clone(),
            is_processing: state.in_flight > 0,
            last_error: state.last_error.clone(),
        }
    }

    pub fn is_processing(&self) -> bool {
        self.read().in_flight > 0
    }

    pub fn last_error(&self) -> Option<String> {
        self.read().last_error.clone()
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Replace `items` with the first `display_limit` users from the remote.
    #[instrument(skip_all, fields(limit = self.display_limit))]
    pub async fn fetch_all(&self) {
        let _processing = self.begin(CollectionOperation::Fetch);

        match self.gateway.list().await {
            Ok(users) => {
                let total = users.len();
                let kept: Vec<User> = users.into_iter().take(self.display_limit).collect();
                info!(total, kept = kept.len(), "Users fetched");
                self.write().items = kept;
            }
            Err(e) => self.fail(CollectionOperation::Fetch, &e),
        }
    }

    /// Append the user the remote creates from `draft`.
    #[instrument(skip_all, fields(name = %draft.name()))]
    pub async fn create(&self, draft: NewUser) {
        let _processing = self.begin(CollectionOperation::Create);

        match self.gateway.create(&draft).await {
            Ok(user) => {
                info!(id = %user.id, "User created");
                let mut state = self.write();
                if state.items.iter().any(|u| u.same_identity(&user)) {
                    warn!(id = %user.id, "Remote returned an id that is already loaded");
                }
                state.items.push(user);
            }
            Err(e) => self.fail(CollectionOperation::Create, &e),
        }
    }

    /// Replace the user with `id` by the record the remote confirms.
    ///
    /// Fails without contacting the remote if `id` is not loaded.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn update(&self, id: UserId, patch: UserPatch) {
        let _processing = self.begin(CollectionOperation::Update);

        if let Err(e) = self.ensure_loaded(id) {
            self.reject(&e);
            return;
        }

        match self.gateway.update(id, &patch).await {
            Ok(updated) => {
                info!("User updated");
                for slot in self.write().items.iter_mut().filter(|u| u.id == id) {
                    *slot = updated.clone();
                }
            }
            Err(e) => self.fail(CollectionOperation::Update, &e),
        }
    }

    /// Remove the user with `id` once the remote confirms the delete.
    ///
    /// Fails without contacting the remote if `id` is not loaded.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn remove(&self, id: UserId) {
        let _processing = self.begin(CollectionOperation::Delete);

        if let Err(e) = self.ensure_loaded(id) {
            self.reject(&e);
            return;
        }

        match self.gateway.remove(id).await {
            Ok(()) => {
                info!("User deleted");
                self.write().items.retain(|u| u.id != id);
            }
            Err(e) => self.fail(CollectionOperation::Delete, &e),
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Enter `Processing`: count the operation, clear the previous error.
    fn begin(&self, operation: CollectionOperation) -> ProcessingGuard<'_> {
        let mut state = self.write();
        state.in_flight += 1;
        state.last_error = None;
        debug!(%operation, in_flight = state.in_flight, "Operation started");
        ProcessingGuard { state: &self.state }
    }

    fn ensure_loaded(&self, id: UserId) -> Result<(), ApplicationError> {
        if self.read().contains(id) {
            Ok(())
        } else {
            Err(ApplicationError::UnknownUser { id })
        }
    }

    /// Record a remote failure under the operation's message.
    fn fail(&self, operation: CollectionOperation, error: &RosterError) {
        warn!(%operation, error = %error, "Operation failed");
        self.write().last_error = Some(operation.failure_message().to_string());
    }

    /// Record a local rejection (no remote call was made).
    fn reject(&self, error: &ApplicationError) {
        warn!(error = %error, "Operation rejected");
        self.write().last_error = Some(error.to_string());
    }

    fn read(&self) -> RwLockReadGuard<'_, CollectionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CollectionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Uncounts its operation when it settles or is dropped.
struct ProcessingGuard<'a> {
    state: &'a RwLock<CollectionState>,
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}
