//! Client-held session record and the stores it lives in
//!
//! The record is three independent string keys. Nothing signs them, nothing
//! expires them; whatever the store holds is the truth.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Store key holding `"true"` while signed in
pub const KEY_IS_AUTHENTICATED: &str = "isAuthenticated";
/// Store key holding the signed-in email
pub const KEY_USER_EMAIL: &str = "userEmail";
/// Store key holding `"user"` or `"admin"`
pub const KEY_USER_TYPE: &str = "userType";

pub const SESSION_KEYS: [&str; 3] = [KEY_IS_AUTHENTICATED, KEY_USER_EMAIL, KEY_USER_TYPE];

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Key-value store the session record is persisted in.
///
/// Each call is atomic for its own key only.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Shared in-process store
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from literal pairs
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.entries.write() {
            for (key, value) in entries {
                map.insert(key.to_string(), value.to_string());
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Ok(mut map) = self.entries.write() {
            map.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&mut self, key: &str) {
        if let Ok(mut map) = self.entries.write() {
            map.remove(key);
        }
    }
}

/// Raw snapshot of the three session keys, exactly as stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub is_authenticated: Option<String>,
    pub user_email: Option<String>,
    pub user_type: Option<String>,
}

impl SessionRecord {
    /// Record written by a successful sign-in
    pub fn signed_in(email: &str, role: Role) -> Self {
        Self {
            is_authenticated: Some("true".to_string()),
            user_email: Some(email.to_string()),
            user_type: Some(role.as_str().to_string()),
        }
    }

    pub fn load<S: SessionStore + ?Sized>(store: &S) -> Self {
        Self {
            is_authenticated: store.get(KEY_IS_AUTHENTICATED),
            user_email: store.get(KEY_USER_EMAIL),
            user_type: store.get(KEY_USER_TYPE),
        }
    }

    /// Write every present key. Keys are written one at a time.
    pub fn persist<S: SessionStore + ?Sized>(&self, store: &mut S) {
        let pairs = [
            (KEY_IS_AUTHENTICATED, &self.is_authenticated),
            (KEY_USER_EMAIL, &self.user_email),
            (KEY_USER_TYPE, &self.user_type),
        ];
        for (key, value) in pairs {
            if let Some(value) = value {
                store.set(key, value);
            }
        }
        debug!(email = ?self.user_email, role = ?self.user_type, "Session persisted");
    }

    /// Remove all three keys
    pub fn clear<S: SessionStore + ?Sized>(store: &mut S) {
        for key in SESSION_KEYS {
            store.remove(key);
        }
        debug!("Session cleared");
    }

    pub fn is_empty(&self) -> bool {
        self.is_authenticated.is_none() && self.user_email.is_none() && self.user_type.is_none()
    }
}
