//! LMS Web Server
//!
//! Main web server implementation using Axum.

use crate::{create_app, AppState, WebError, WebResult};
use axum::serve;
use lms_core::LmsConfig;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Main LMS web server
pub struct LmsServer {
    config: LmsConfig,
    state: AppState,
}

impl LmsServer {
    /// Create a server backed by the mock auth client
    pub fn new(config: LmsConfig) -> WebResult<Self> {
        config.validate()?;
        let state = AppState::new(config.clone());

        Ok(Self { config, state })
    }

    /// Start the web server and run until ctrl-c
    pub async fn start(self) -> WebResult<()> {
        let address = self.config.server.address();

        info!("Starting LMS web server");
        info!("Server address: http://{}", address);

        let app = create_app(self.state.clone());

        let listener = TcpListener::bind(&address)
            .await
            .map_err(WebError::Server)?;

        info!("Server listening on http://{}", address);

        if let Err(e) = serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
        {
            error!("Server error: {}", e);
            return Err(WebError::Server(e));
        }

        info!("Server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &LmsConfig {
        &self.config
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

/// Builder for LmsServer
pub struct LmsServerBuilder {
    config: LmsConfig,
}

impl LmsServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self {
            config: LmsConfig::default(),
        }
    }

    /// Start from an already loaded configuration
    pub fn from_config(config: LmsConfig) -> Self {
        Self { config }
    }

    /// Set the server host
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.server.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    /// Simulated sign-in latency
    pub fn sign_in_delay_ms(mut self, ms: u64) -> Self {
        self.config.auth.sign_in_delay_ms = ms;
        self
    }

    /// Simulated sign-up latency
    pub fn sign_up_delay_ms(mut self, ms: u64) -> Self {
        self.config.auth.sign_up_delay_ms = ms;
        self
    }

    /// Build the server
    pub fn build(self) -> WebResult<LmsServer> {
        LmsServer::new(self.config)
    }
}

impl Default for LmsServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
