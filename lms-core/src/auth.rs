//! Sign-in, sign-up, logout and password reset flows
//!
//! The only writer of the session record is [`AuthService::sign_in`]; the
//! only eraser is [`AuthService::logout`].

use crate::client::{AuthClient, MockAuthClient, SignInOutcome};
use crate::config::AuthConfig;
use crate::error::LmsError;
use crate::gate::Route;
use crate::session::{SessionRecord, SessionStore};
use crate::validation::{FieldErrors, ForgotPasswordForm, SignInForm, SignUpForm};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Banner shown when no credential pair matches
pub const MSG_INVALID_CREDENTIALS: &str =
    "Invalid email or password. Try the demo credentials below.";
/// Banner shown when the backend call itself fails
pub const MSG_SIGN_IN_FAILED: &str = "An error occurred during sign in";
pub const MSG_SIGN_UP_FAILED: &str = "An error occurred during sign up";
pub const MSG_RESET_FAILED: &str = "An error occurred while requesting a password reset";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid form input: {0}")]
    Validation(FieldErrors),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("auth backend failed: {0}")]
    Backend(#[from] LmsError),
}

impl AuthError {
    /// Sign-in banner text; `None` when the errors belong inline
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            AuthError::Validation(_) => None,
            AuthError::InvalidCredentials => Some(MSG_INVALID_CREDENTIALS),
            AuthError::Backend(_) => Some(MSG_SIGN_IN_FAILED),
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AuthError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Accepted sign-up; the page moves to sign-in after `redirect_after`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpAccepted {
    pub redirect: Route,
    pub redirect_after: Duration,
}

#[derive(Clone)]
pub struct AuthService {
    client: Arc<dyn AuthClient>,
    sign_up_redirect_after: Duration,
}

impl AuthService {
    pub fn new(client: Arc<dyn AuthClient>, config: &AuthConfig) -> Self {
        Self {
            client,
            sign_up_redirect_after: Duration::from_secs(config.sign_up_redirect_secs),
        }
    }

    /// Service backed by [`MockAuthClient`] with the configured latency
    pub fn mock(config: &AuthConfig) -> Self {
        Self::new(Arc::new(MockAuthClient::new(config)), config)
    }

    /// Validate, ask the backend, and on a match write the session.
    ///
    /// Returns the landing route for the signed-in role. The store is not
    /// touched unless the credentials match.
    pub async fn sign_in<S: SessionStore + ?Sized>(
        &self,
        store: &mut S,
        form: &SignInForm,
    ) -> Result<Route, AuthError> {
        form.validate().map_err(AuthError::Validation)?;

        match self.client.sign_in(form).await {
            Ok(SignInOutcome::Accepted { email, role }) => {
                SessionRecord::signed_in(&email, role).persist(store);
                info!(%email, %role, "User signed in");
                Ok(Route::home_for(role))
            }
            Ok(SignInOutcome::Rejected) => {
                warn!(email = %form.email, "Sign-in rejected");
                Err(AuthError::InvalidCredentials)
            }
            Err(e) => {
                e.log();
                Err(AuthError::Backend(e))
            }
        }
    }

    pub async fn sign_up(&self, form: &SignUpForm) -> Result<SignUpAccepted, AuthError> {
        form.validate().map_err(AuthError::Validation)?;
        self.client.sign_up(form).await?;

        info!(email = %form.email, "Sign-up accepted");
        Ok(SignUpAccepted {
            redirect: Route::SignIn,
            redirect_after: self.sign_up_redirect_after,
        })
    }

    pub async fn forgot_password(&self, form: &ForgotPasswordForm) -> Result<(), AuthError> {
        form.validate().map_err(AuthError::Validation)?;
        self.client.request_password_reset(&form.email).await?;
        Ok(())
    }

    /// Remove the session keys and send the visitor to sign-in
    pub fn logout<S: SessionStore + ?Sized>(&self, store: &mut S) -> Route {
        let email = store.get(crate::session::KEY_USER_EMAIL);
        SessionRecord::clear(store);
        info!(email = ?email, "User signed out");
        Route::SignIn
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("sign_up_redirect_after", &self.sign_up_redirect_after)
            .finish_non_exhaustive()
    }
}
