//! User gateway adapters.

mod http;
mod memory;

pub use http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GatewayBuildError, HttpUserGateway};
pub use memory::InMemoryUserGateway;
