//! Health and session status endpoints

use super::types::{ApiErrorResponse, HealthResponse, SessionQuery, SessionStatusResponse};
use crate::session::CookieSessionStore;
use axum::{
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use lms_core::{check_store, Route};

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Run the gate for `?route=` against the request cookies without
/// navigating anywhere.
pub async fn session_status(headers: HeaderMap, Query(query): Query<SessionQuery>) -> Response {
    let route = match query.route.as_deref() {
        None => Route::Dashboard,
        Some(path) => match path.parse::<Route>() {
            Ok(route) => route,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiErrorResponse {
                        error: e.to_string(),
                    }),
                )
                    .into_response();
            }
        },
    };

    let store = CookieSessionStore::from_headers(&headers);
    Json(SessionStatusResponse {
        route: route.path().to_string(),
        decision: check_store(&store, route),
    })
    .into_response()
}
