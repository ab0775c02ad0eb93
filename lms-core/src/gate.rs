//! Route table and the session gate
//!
//! Every page declares an [`AccessPolicy`] in [`Route::policy`], and every
//! visit goes through [`check_session`]. Pages never inspect the session
//! record themselves.

use crate::session::{Role, SessionRecord, SessionStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Every navigation target of the front end.
///
/// Serializes as its path, e.g. `"/admin/users"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    SignIn,
    SignUp,
    ForgotPassword,
    Dashboard,
    Courses,
    Progress,
    Admin,
    AdminUsers,
    AdminCourses,
    AdminProgress,
    AdminReports,
}

/// Who may render a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessPolicy {
    Public,
    /// Any signed-in visitor, whatever the role
    Authenticated,
    /// Signed in with exactly this role
    Role(Role),
}

impl Route {
    pub const ALL: [Route; 12] = [
        Route::Home,
        Route::SignIn,
        Route::SignUp,
        Route::ForgotPassword,
        Route::Dashboard,
        Route::Courses,
        Route::Progress,
        Route::Admin,
        Route::AdminUsers,
        Route::AdminCourses,
        Route::AdminProgress,
        Route::AdminReports,
    ];

    pub const fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
            Route::ForgotPassword => "/forgot-password",
            Route::Dashboard => "/dashboard",
            Route::Courses => "/courses",
            Route::Progress => "/progress",
            Route::Admin => "/admin",
            Route::AdminUsers => "/admin/users",
            Route::AdminCourses => "/admin/courses",
            Route::AdminProgress => "/admin/progress",
            Route::AdminReports => "/admin/reports",
        }
    }

    pub fn policy(&self) -> AccessPolicy {
        match self {
            Route::Home | Route::SignIn | Route::SignUp | Route::ForgotPassword => {
                AccessPolicy::Public
            }
            Route::Dashboard => AccessPolicy::Role(Role::User),
            Route::Courses | Route::Progress => AccessPolicy::Authenticated,
            Route::Admin | Route::AdminUsers | Route::AdminCourses | Route::AdminProgress => {
                AccessPolicy::Role(Role::Admin)
            }
            // Reports has never checked the role. Kept open to any signed-in
            // visitor until product decides whether it is a shared view.
            Route::AdminReports => AccessPolicy::Authenticated,
        }
    }

    pub fn is_protected(&self) -> bool {
        self.policy() != AccessPolicy::Public
    }

    /// Landing page for a signed-in role
    pub fn home_for(role: Role) -> Route {
        match role {
            Role::User => Route::Dashboard,
            Role::Admin => Route::Admin,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no route for path: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = if s.len() > 1 { s.trim_end_matches('/') } else { s };
        Route::ALL
            .into_iter()
            .find(|route| route.path() == trimmed)
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

impl Serialize for Route {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let path = String::deserialize(deserializer)?;
        path.parse().map_err(serde::de::Error::custom)
    }
}

/// Identity exposed to a granted page body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub role: Role,
}

/// Why a visitor was sent to the sign-in page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    NotAuthenticated,
    MissingEmail,
    UnknownRole,
}

/// Outcome of one gate check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GateDecision {
    /// Public page, no identity needed
    Open,
    Granted(Identity),
    /// Not signed in, or the record is unreadable
    Denied { redirect: Route, reason: DenialReason },
    /// Signed in with the wrong role for this page
    RoleRedirect { redirect: Route, identity: Identity },
}

impl GateDecision {
    /// Where to send the visitor, if anywhere
    pub fn redirect_target(&self) -> Option<Route> {
        match self {
            GateDecision::Denied { redirect, .. } | GateDecision::RoleRedirect { redirect, .. } => {
                Some(*redirect)
            }
            GateDecision::Open | GateDecision::Granted(_) => None,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            GateDecision::Granted(identity) | GateDecision::RoleRedirect { identity, .. } => {
                Some(identity)
            }
            GateDecision::Open | GateDecision::Denied { .. } => None,
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, GateDecision::Open | GateDecision::Granted(_))
    }
}

/// Resolve a session record into an identity, failing closed
pub fn resolve_identity(record: &SessionRecord) -> Result<Identity, DenialReason> {
    if record.is_authenticated.as_deref() != Some("true") {
        return Err(DenialReason::NotAuthenticated);
    }

    let email = match record.user_email.as_deref() {
        Some(email) if !email.is_empty() => email.to_string(),
        _ => return Err(DenialReason::MissingEmail),
    };

    let role = match record.user_type.as_deref() {
        None => Role::User,
        Some(raw) => raw.parse().map_err(|_| DenialReason::UnknownRole)?,
    };

    Ok(Identity { email, role })
}

/// Decide whether `record` may render `route`
pub fn check_session(record: &SessionRecord, route: Route) -> GateDecision {
    let policy = route.policy();
    if policy == AccessPolicy::Public {
        return GateDecision::Open;
    }

    let identity = match resolve_identity(record) {
        Ok(identity) => identity,
        Err(reason) => {
            debug!(%route, ?reason, "Session denied");
            return GateDecision::Denied {
                redirect: Route::SignIn,
                reason,
            };
        }
    };

    match policy {
        AccessPolicy::Role(required) if identity.role != required => {
            let redirect = Route::home_for(identity.role);
            debug!(%route, role = %identity.role, %redirect, "Role mismatch");
            GateDecision::RoleRedirect { redirect, identity }
        }
        _ => GateDecision::Granted(identity),
    }
}

/// Read the store and run the gate in one step
pub fn check_store<S: SessionStore + ?Sized>(store: &S, route: Route) -> GateDecision {
    check_session(&SessionRecord::load(store), route)
}
