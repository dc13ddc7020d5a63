//! Shared, immutable per-process state handed to every handler.

use std::sync::Arc;

use sundial_executor::CommandRunner;

use crate::settings::GatewayConfig;

/// Everything a handler may need: configuration and the command runner.
#[derive(Debug)]
pub struct AppState {
    pub config: GatewayConfig,
    pub runner: Arc<dyn CommandRunner>,
}

/// State as stored in the router.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Bundle configuration and runner into shareable state.
    #[must_use]
    pub fn new(config: GatewayConfig, runner: Arc<dyn CommandRunner>) -> SharedState {
        Arc::new(Self { config, runner })
    }
}
