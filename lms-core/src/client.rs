//! Auth backend abstraction
//!
//! The front end has no real backend. [`MockAuthClient`] answers from two
//! literal credential pairs after a configurable delay; tests build it with
//! [`AuthConfig::instant`] or swap in [`FailingAuthClient`].

use crate::config::AuthConfig;
use crate::error::LmsResult;
use crate::session::Role;
use crate::validation::{SignInForm, SignUpForm};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Literal credentials accepted by the mock backend
pub const DEMO_CREDENTIALS: [DemoAccount; 2] = [
    DemoAccount {
        email: "user@example.com",
        password: "password",
        role: Role::User,
    },
    DemoAccount {
        email: "admin@example.com",
        password: "admin123",
        role: Role::Admin,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// Backend answer to a sign-in attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    Accepted { email: String, role: Role },
    Rejected,
}

#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn sign_in(&self, form: &SignInForm) -> LmsResult<SignInOutcome>;

    /// Register an account. Nothing is stored by the mock.
    async fn sign_up(&self, form: &SignUpForm) -> LmsResult<()>;

    async fn request_password_reset(&self, email: &str) -> LmsResult<()>;
}

/// Simulated backend with fixed latency
#[derive(Debug, Clone)]
pub struct MockAuthClient {
    sign_in_delay: Duration,
    sign_up_delay: Duration,
    reset_delay: Duration,
}

impl MockAuthClient {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            sign_in_delay: config.sign_in_delay(),
            sign_up_delay: config.sign_up_delay(),
            reset_delay: config.reset_delay(),
        }
    }

    pub fn instant() -> Self {
        Self::new(&AuthConfig::instant())
    }

    async fn wait(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for MockAuthClient {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}

#[async_trait]
impl AuthClient for MockAuthClient {
    #[instrument(skip_all, fields(email = %form.email))]
    async fn sign_in(&self, form: &SignInForm) -> LmsResult<SignInOutcome> {
        Self::wait(self.sign_in_delay).await;

        let matched = DEMO_CREDENTIALS
            .iter()
            .find(|account| account.email == form.email && account.password == form.password);

        Ok(match matched {
            Some(account) => {
                debug!(role = %account.role, "Credentials matched");
                SignInOutcome::Accepted {
                    email: form.email.clone(),
                    role: account.role,
                }
            }
            None => SignInOutcome::Rejected,
        })
    }

    #[instrument(skip_all, fields(email = %form.email))]
    async fn sign_up(&self, form: &SignUpForm) -> LmsResult<()> {
        Self::wait(self.sign_up_delay).await;
        debug!("Sign-up accepted without storing an account");
        Ok(())
    }

    async fn request_password_reset(&self, email: &str) -> LmsResult<()> {
        Self::wait(self.reset_delay).await;
        debug!(email, "Password reset requested");
        Ok(())
    }
}

/// Backend that is always unreachable
#[derive(Debug, Clone, Default)]
pub struct FailingAuthClient;

#[async_trait]
impl AuthClient for FailingAuthClient {
    async fn sign_in(&self, _form: &SignInForm) -> LmsResult<SignInOutcome> {
        Err(crate::network_error!("auth backend unreachable", "auth_client"))
    }

    async fn sign_up(&self, _form: &SignUpForm) -> LmsResult<()> {
        Err(crate::network_error!("auth backend unreachable", "auth_client"))
    }

    async fn request_password_reset(&self, _email: &str) -> LmsResult<()> {
        Err(crate::network_error!("auth backend unreachable", "auth_client"))
    }
}
