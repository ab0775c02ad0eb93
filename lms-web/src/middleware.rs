//! Session gate middleware
//!
//! Maps the request path onto the route table, runs the core gate against
//! the session cookies, and either redirects or hands the identity to the
//! handler through request extensions. Paths outside the route table
//! (`/api`, `/logout`, unknown pages) pass through untouched.

use crate::session::CookieSessionStore;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use lms_core::{check_store, GateDecision, Route};
use tracing::debug;

pub async fn session_gate(mut request: Request, next: Next) -> Response {
    let Ok(route) = request.uri().path().parse::<Route>() else {
        return next.run(request).await;
    };

    let store = CookieSessionStore::from_headers(request.headers());
    match check_store(&store, route) {
        GateDecision::Open => next.run(request).await,
        GateDecision::Granted(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        decision => {
            let target = decision.redirect_target().unwrap_or(Route::SignIn);
            debug!(%route, %target, "Redirecting visitor");
            Redirect::to(target.path()).into_response()
        }
    }
}
