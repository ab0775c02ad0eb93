//! LMS Web Server
//!
//! Server-rendered pages for the learning-management front end. Every page
//! request passes the session gate in [`middleware::session_gate`] before a
//! handler runs.

pub mod auth;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod session;
pub mod state;
pub mod templates;

// Re-export main types
pub use server::LmsServer;
pub use state::AppState;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Router,
};
use lms_core::{LmsError, LoggingConfig};
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::page_routes())
        .nest("/api", routes::api_routes())
        .fallback(handlers::not_found)
        .layer(axum::middleware::from_fn(middleware::session_gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Error types for the web server
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] LmsError),
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        let page = templates::ErrorTemplate::new(500, "Something went wrong".to_string());
        let body = askama::Template::render(&page)
            .unwrap_or_else(|_| "Internal Server Error".to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
    }
}

/// Initialize logging for the web server
pub fn init_logging(config: &LoggingConfig) -> WebResult<()> {
    lms_core::init_logging(config)?;
    Ok(())
}
