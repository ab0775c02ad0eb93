//! HTTP request handlers for the LMS web server
//!
//! Page handlers render askama templates. Gated pages take a
//! [`CurrentUser`](crate::auth::CurrentUser) that the session gate has
//! already resolved.

pub mod admin;
pub mod auth;
pub mod health;
pub mod learner;
pub mod types;

pub use admin::*;
pub use auth::*;
pub use health::*;
pub use learner::*;

pub use types::*;

use crate::{templates::ErrorTemplate, WebResult};
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Render a template into an HTML response body
pub(crate) fn render<T: Template>(template: &T) -> WebResult<Html<String>> {
    Ok(Html(template.render()?))
}

/// Fallback for paths outside the route table
pub async fn not_found() -> WebResult<Response> {
    let page = ErrorTemplate::new(404, "Page not found".to_string());
    Ok((StatusCode::NOT_FOUND, render(&page)?).into_response())
}
