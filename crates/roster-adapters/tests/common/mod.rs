//! In-process fixture API for exercising the HTTP gateway.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// How the fixture answers every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Behave like the public fixture API.
    Normal,
    /// Answer every request with this status and an error body.
    Status(u16),
    /// Answer 200 with a body that is not JSON.
    Garbage,
}

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug)]
struct FixtureState {
    users: Vec<Value>,
    mode: Mode,
    requests: Vec<CapturedRequest>,
}

type Shared = Arc<Mutex<FixtureState>>;

/// Fixture server bound to an ephemeral localhost port.
pub struct FixtureApi {
    pub addr: SocketAddr,
    state: Shared,
}

impl FixtureApi {
    /// Start a server holding `count` users with ids `1..=count`.
    pub async fn start(count: u64) -> Self {
        let users = (1..=count)
            .map(|i| {
                json!({
                    "id": i,
                    "name": format!("User {i}"),
                    "username": format!("user{i}"),
                    "email": format!("user{i}@example.com"),
                })
            })
            .collect();
        let state: Shared = Arc::new(Mutex::new(FixtureState {
            users,
            mode: Mode::Normal,
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/users", get(list_users).post(create_user))
            .route(
                "/users/{id}",
                get(get_user).put(update_user).delete(delete_user),
            )
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fixture server");
        let addr = listener.local_addr().expect("fixture server address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { addr, state }
    }

    /// Collection URL for the gateway under test.
    pub fn users_url(&self) -> String {
        format!("http://{}/users", self.addr)
    }

    pub async fn set_mode(&self, mode: Mode) {
        self.state.lock().await.mode = mode;
    }

    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.state.lock().await.requests.clone()
    }
}

/// A URL on which nothing is listening.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}/users")
}

// ── handlers ──────────────────────────────────────────────────────────────────

async fn record(state: &Shared, method: Method, path: String, body: Option<Value>) -> Option<Response> {
    let mut guard = state.lock().await;
    guard.requests.push(CapturedRequest { method, path, body });
    match guard.mode {
        Mode::Normal => None,
        Mode::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Some((status, Json(json!({ "error": "fixture failure" }))).into_response())
        }
        Mode::Garbage => Some((StatusCode::OK, "<html>not json</html>").into_response()),
    }
}

async fn list_users(State(state): State<Shared>) -> Response {
    if let Some(short) = record(&state, Method::GET, "/users".into(), None).await {
        return short;
    }
    Json(Value::Array(state.lock().await.users.clone())).into_response()
}

async fn get_user(State(state): State<Shared>, Path(id): Path<u64>) -> Response {
    if let Some(short) = record(&state, Method::GET, format!("/users/{id}"), None).await {
        return short;
    }
    let guard = state.lock().await;
    match guard.users.iter().find(|u| u["id"] == id) {
        Some(user) => Json(user.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn create_user(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    if let Some(short) = record(&state, Method::POST, "/users".into(), Some(body.clone())).await {
        return short;
    }
    let mut guard = state.lock().await;
    let id = guard.users.len() as u64 + 1;
    let mut created = body;
    created["id"] = json!(id);
    guard.users.push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn update_user(
    State(state): State<Shared>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    if let Some(short) = record(&state, Method::PUT, format!("/users/{id}"), Some(body.clone())).await {
        return short;
    }
    let mut guard = state.lock().await;
    let Some(user) = guard.users.iter_mut().find(|u| u["id"] == id) else {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))).into_response();
    };
    if let (Some(target), Some(changes)) = (user.as_object_mut(), body.as_object()) {
        for (key, value) in changes {
            target.insert(key.clone(), value.clone());
        }
    }
    Json(user.clone()).into_response()
}

async fn delete_user(State(state): State<Shared>, Path(id): Path<u64>) -> Response {
    if let Some(short) = record(&state, Method::DELETE, format!("/users/{id}"), None).await {
        return short;
    }
    state.lock().await.users.retain(|u| u["id"] != id);
    Json(json!({})).into_response()
}
