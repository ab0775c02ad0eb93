//! Shared application state

use lms_core::{AuthClient, AuthService, Catalog, LmsConfig};
use std::sync::Arc;
use tracing::info;

#[derive(Clone, Debug)]
pub struct AppState {
    /// Configuration
    pub config: Arc<LmsConfig>,
    /// Sign-in, sign-up and logout flows
    pub auth: AuthService,
    /// Data the pages render
    pub catalog: Catalog,
}

impl AppState {
    /// State backed by the mock auth client with the configured latency
    pub fn new(config: LmsConfig) -> Self {
        let auth = AuthService::mock(&config.auth);
        info!(
            sign_in_delay_ms = config.auth.sign_in_delay_ms,
            sign_up_delay_ms = config.auth.sign_up_delay_ms,
            "Application state initialized"
        );
        Self {
            config: Arc::new(config),
            auth,
            catalog: Catalog,
        }
    }

    /// State with an injected auth client
    pub fn with_client(config: LmsConfig, client: Arc<dyn AuthClient>) -> Self {
        let auth = AuthService::new(client, &config.auth);
        Self {
            config: Arc::new(config),
            auth,
            catalog: Catalog,
        }
    }
}
