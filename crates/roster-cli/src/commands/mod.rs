//! Command handlers.
//!
//! Each handler translates parsed arguments into calls on the core services
//! and renders the result. The helpers here wire a [`UserCollection`] to the
//! gateway selected by `--offline` and the configuration.

use std::time::Duration;

use tokio::runtime::Runtime;
use tracing::debug;

use roster_adapters::{HttpUserGateway, InMemoryUserGateway};
use roster_core::application::{UserCollection, ports::UserGateway};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
};

pub mod completions;
pub mod config;
pub mod init;
pub mod shell;
pub mod theme;
pub mod users;

/// The gateway this invocation talks to.
pub fn build_gateway(global: &GlobalArgs, config: &AppConfig) -> CliResult<Box<dyn UserGateway>> {
    if global.offline {
        debug!("Using built-in fixture users");
        return Ok(Box::new(InMemoryUserGateway::with_fixtures()));
    }

    debug!(url = %config.api.base_url, "Using remote users API");
    let gateway = HttpUserGateway::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )?;
    Ok(Box::new(gateway))
}

/// A fresh, empty collection over the selected gateway.
pub fn build_collection(global: &GlobalArgs, config: &AppConfig) -> CliResult<UserCollection> {
    let gateway = build_gateway(global, config)?;
    Ok(UserCollection::new(gateway).with_display_limit(config.collection.display_limit))
}

/// Single-threaded runtime that drives one command's operations.
pub fn runtime() -> CliResult<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .with_cli_context(|| "Failed to start the async runtime")
}

/// Turn the error slot of a settled operation into a command failure.
pub fn settled(collection: &UserCollection) -> CliResult<()> {
    match collection.last_error() {
        Some(message) => Err(CliError::OperationFailed { message }),
        None => Ok(()),
    }
}
