//! LMS Core - session gate, mock authentication and catalog
//!
//! Everything the front end decides lives here: who may see which page,
//! how a sign-in becomes a session record, and the data the pages render.
//! The web crate only maps these decisions onto HTTP.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod logging;
pub mod session;
pub mod validation;

pub use auth::{AuthError, AuthService, SignUpAccepted};
pub use catalog::Catalog;
pub use client::{AuthClient, FailingAuthClient, MockAuthClient, SignInOutcome};
pub use config::{AuthConfig, LmsConfig, ServerConfig};
pub use error::{ErrorContext, LmsError, LmsResult};
pub use gate::{
    check_session, check_store, AccessPolicy, DenialReason, GateDecision, Identity, Route,
};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use session::{MemorySessionStore, Role, SessionRecord, SessionStore};
pub use validation::{FieldErrors, ForgotPasswordForm, SignInForm, SignUpForm};

// Re-export commonly used external types
pub use async_trait::async_trait;
pub use tracing;
