//! Sign-in, sign-up, password reset and logout pages

use super::render;
use crate::{
    session::CookieSessionStore,
    templates::{ForgotPasswordTemplate, HomeTemplate, SignInTemplate, SignUpTemplate},
    AppState, WebResult,
};
use axum::{
    extract::{Form, State},
    http::{header::REFRESH, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use lms_core::{
    auth::{MSG_RESET_FAILED, MSG_SIGN_UP_FAILED},
    AuthError, ForgotPasswordForm, SignInForm, SignUpForm,
};

fn failure_status(error: &AuthError) -> StatusCode {
    match error {
        AuthError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::Backend(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Landing page
pub async fn home() -> WebResult<Html<String>> {
    render(&HomeTemplate::new())
}

pub async fn sign_in_page() -> WebResult<Html<String>> {
    render(&SignInTemplate::blank())
}

/// Check the credentials and, on a match, set the session cookies and go
/// to the role's landing page. Anything else re-renders the form.
pub async fn sign_in_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SignInForm>,
) -> WebResult<Response> {
    let mut store = CookieSessionStore::new(jar);
    match state.auth.sign_in(&mut store, &form).await {
        Ok(target) => Ok((store.into_jar(), Redirect::to(target.path())).into_response()),
        Err(e) => {
            let page = SignInTemplate::new(form.email, e.field_errors(), e.banner());
            Ok((failure_status(&e), render(&page)?).into_response())
        }
    }
}

pub async fn sign_up_page() -> WebResult<Html<String>> {
    render(&SignUpTemplate::blank())
}

/// Accepted sign-ups show a notice and move to sign-in after the configured
/// delay through a `Refresh` header.
pub async fn sign_up_submit(
    State(state): State<AppState>,
    Form(form): Form<SignUpForm>,
) -> WebResult<Response> {
    match state.auth.sign_up(&form).await {
        Ok(accepted) => {
            let secs = accepted.redirect_after.as_secs();
            let refresh = format!("{}; url={}", secs, accepted.redirect.path());
            let page = SignUpTemplate::succeeded(secs);
            Ok(([(REFRESH, refresh)], render(&page)?).into_response())
        }
        Err(e) => {
            let banner = matches!(e, AuthError::Backend(_)).then_some(MSG_SIGN_UP_FAILED);
            let page = SignUpTemplate::rejected(&form, e.field_errors(), banner);
            Ok((failure_status(&e), render(&page)?).into_response())
        }
    }
}

pub async fn forgot_password_page() -> WebResult<Html<String>> {
    render(&ForgotPasswordTemplate::new(String::new(), None, None, false))
}

pub async fn forgot_password_submit(
    State(state): State<AppState>,
    Form(form): Form<ForgotPasswordForm>,
) -> WebResult<Response> {
    match state.auth.forgot_password(&form).await {
        Ok(()) => {
            let page = ForgotPasswordTemplate::new(form.email, None, None, true);
            Ok(render(&page)?.into_response())
        }
        Err(e) => {
            let banner = matches!(e, AuthError::Backend(_)).then_some(MSG_RESET_FAILED);
            let page = ForgotPasswordTemplate::new(form.email, e.field_errors(), banner, false);
            Ok((failure_status(&e), render(&page)?).into_response())
        }
    }
}

/// Clear the session cookies and return to sign-in
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let mut store = CookieSessionStore::new(jar);
    let target = state.auth.logout(&mut store);
    (store.into_jar(), Redirect::to(target.path())).into_response()
}
