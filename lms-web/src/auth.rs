//! Identity extraction for gated pages

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use lms_core::{Identity, Route};
use tracing::warn;

/// Identity resolved by the session gate for the current page
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

/// Rejection when a handler runs without a gate decision
#[derive(Debug)]
pub struct SignInRedirect;

impl IntoResponse for SignInRedirect {
    fn into_response(self) -> Response {
        Redirect::to(Route::SignIn.path()).into_response()
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = SignInRedirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Identity>() {
            Some(identity) => Ok(CurrentUser(identity.clone())),
            None => {
                warn!(path = %parts.uri.path(), "No gate identity on request");
                Err(SignInRedirect)
            }
        }
    }
}
