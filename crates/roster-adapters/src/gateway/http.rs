//! Reqwest-backed user gateway.
//!
//! This adapter owns transport details only: URL construction, request
//! serialisation, timeout, status checking and JSON decoding. Every failure
//! becomes `ApplicationError::RequestFailed` for the operation in progress.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url, header::ACCEPT};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use roster_core::{
    application::{ApplicationError, CollectionOperation, ports::UserGateway},
    domain::{NewUser, User, UserId, UserPatch},
    error::{RosterError, RosterResult},
};

/// The public fixture resource the original demo talks to.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Client-level request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while constructing an [`HttpUserGateway`].
#[derive(Debug, Error)]
pub enum GatewayBuildError {
    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Gateway that maps the four collection verbs onto one REST resource.
///
/// | Operation | Request              |
/// |-----------|----------------------|
/// | list      | `GET    {base}`      |
/// | get       | `GET    {base}/{id}` |
/// | create    | `POST   {base}`      |
/// | update    | `PUT    {base}/{id}` |
/// | remove    | `DELETE {base}/{id}` |
#[derive(Debug, Clone)]
pub struct HttpUserGateway {
    client: Client,
    base: String,
}

impl HttpUserGateway {
    /// Build a gateway for `base_url` with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is not an absolute http(s) URL or the
    /// reqwest client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayBuildError> {
        let url = Url::parse(base_url).map_err(|e| GatewayBuildError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(GatewayBuildError::InvalidUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Gateway for the public fixture API with the default timeout.
    pub fn with_defaults() -> Result<Self, GatewayBuildError> {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// The collection URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn item_url(&self, id: UserId) -> String {
        format!("{}/{}", self.base, id)
    }

    /// Send a request and return the body of a successful response.
    async fn execute(
        &self,
        operation: CollectionOperation,
        request: RequestBuilder,
    ) -> RosterResult<Vec<u8>> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| map_transport_error(operation, &e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_transport_error(operation, &e))?;
        debug!(%operation, status = status.as_u16(), bytes = body.len(), "Response received");

        if !status.is_success() {
            return Err(map_status_error(operation, status));
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl UserGateway for HttpUserGateway {
    #[instrument(skip_all, fields(url = %self.base))]
    async fn list(&self) -> RosterResult<Vec<User>> {
        let op = CollectionOperation::Fetch;
        let body = self.execute(op, self.client.get(&self.base)).await?;
        decode(op, &body)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: UserId) -> RosterResult<User> {
        let op = CollectionOperation::Get;
        let body = self.execute(op, self.client.get(self.item_url(id))).await?;
        decode(op, &body)
    }

    #[instrument(skip_all)]
    async fn create(&self, draft: &NewUser) -> RosterResult<User> {
        let op = CollectionOperation::Create;
        let request = self.client.post(&self.base).json(draft);
        let body = self.execute(op, request).await?;
        decode(op, &body)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: UserId, patch: &UserPatch) -> RosterResult<User> {
        let op = CollectionOperation::Update;
        let request = self.client.put(self.item_url(id)).json(patch);
        let body = self.execute(op, request).await?;
        decode(op, &body)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: UserId) -> RosterResult<()> {
        // Body is ignored; the fixture API answers `{}`.
        self.execute(CollectionOperation::Delete, self.client.delete(self.item_url(id)))
            .await
            .map(drop)
    }
}

fn decode<T: DeserializeOwned>(operation: CollectionOperation, body: &[u8]) -> RosterResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        ApplicationError::request_failed(operation, format!("invalid JSON payload: {e}")).into()
    })
}

fn map_transport_error(operation: CollectionOperation, error: &reqwest::Error) -> RosterError {
    let kind = if error.is_timeout() {
        "timed out"
    } else if error.is_connect() {
        "connection failed"
    } else {
        "transport error"
    };
    ApplicationError::request_failed(operation, format!("{kind}: {error}")).into()
}

fn map_status_error(operation: CollectionOperation, status: StatusCode) -> RosterError {
    ApplicationError::request_failed(operation, format!("unexpected status {status}")).into()
}
