//! Cookie-backed session store
//!
//! The browser keeps the three session keys as plain cookies, one per key,
//! unsigned, like the local-storage record they replace.
//!
//! Values are percent-encoded on the wire (`userEmail=user%40example.com`)
//! and decoded on read, so the store always hands back the raw value.

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use lms_core::SessionStore;

/// [`SessionStore`] over the request's cookies.
///
/// Writes become `Set-Cookie` headers once the jar is returned from the
/// handler via [`CookieSessionStore::into_jar`].
#[derive(Debug, Clone, Default)]
pub struct CookieSessionStore {
    jar: CookieJar,
}

impl CookieSessionStore {
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self::new(CookieJar::from_headers(headers))
    }

    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl SessionStore for CookieSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|cookie| cookie.value().to_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        let cookie = Cookie::build((key.to_string(), value.to_string())).path("/");
        self.jar = std::mem::take(&mut self.jar).add(cookie);
    }

    fn remove(&mut self, key: &str) {
        let cookie = Cookie::build((key.to_string(), String::new())).path("/");
        self.jar = std::mem::take(&mut self.jar).remove(cookie);
    }
}
