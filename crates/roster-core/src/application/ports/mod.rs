//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `roster-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `UserGateway`: remote user collection
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The CLI drives `UserCollection` directly)

pub mod output;

pub use output::UserGateway;

#[cfg(test)]
pub use output::MockUserGateway;
