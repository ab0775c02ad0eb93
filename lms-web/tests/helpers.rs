//! Integration test helpers
//!
//! Drives the full router in-process with `oneshot`, with the auth
//! backend latency switched off.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use axum_extra::extract::cookie::Cookie;
use http_body_util::BodyExt;
use lms_core::{AuthClient, AuthConfig, LmsConfig};
use lms_web::{create_app, AppState};
use std::sync::{Arc, LazyLock};
use tower::ServiceExt;

pub const LEARNER_COOKIE: &str = "isAuthenticated=true; userEmail=user@example.com; userType=user";
pub const ADMIN_COOKIE: &str = "isAuthenticated=true; userEmail=admin@example.com; userType=admin";

// Initialise tracing once per test binary
static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
});

fn test_config() -> LmsConfig {
    let mut config = LmsConfig::default();
    config.auth = AuthConfig::instant();
    config
}

/// Test application instance
pub struct TestApp {
    router: Router,
}

/// Buffered response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    fn raw_set_cookies(&self) -> impl Iterator<Item = &str> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
    }

    /// Encoded `name=value` pairs exactly as sent
    pub fn set_cookie_pairs(&self) -> Vec<String> {
        self.raw_set_cookies()
            .filter_map(|raw| raw.split(';').next())
            .map(|pair| pair.trim().to_string())
            .collect()
    }

    /// Decoded `(name, value)` from every `Set-Cookie` header
    pub fn set_cookies(&self) -> Vec<(String, String)> {
        self.raw_set_cookies()
            .filter_map(|raw| Cookie::parse_encoded(raw).ok())
            .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
            .collect()
    }

    /// A `Cookie` header carrying the non-empty cookies this response set,
    /// still encoded, the way a browser echoes them
    pub fn cookie_header(&self) -> String {
        self.set_cookie_pairs()
            .into_iter()
            .filter(|pair| !pair.ends_with('='))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request.");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body.")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, uri: &str, form: &str, cookie: Option<&str>) -> TestResponse {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(form.to_string())).unwrap())
            .await
    }
}

/// App backed by the zero-latency mock client
pub fn spawn_app() -> TestApp {
    LazyLock::force(&TRACING);
    TestApp {
        router: create_app(AppState::new(test_config())),
    }
}

/// App backed by a caller-chosen client
pub fn spawn_app_with_client(client: Arc<dyn AuthClient>) -> TestApp {
    LazyLock::force(&TRACING);
    TestApp {
        router: create_app(AppState::with_client(test_config(), client)),
    }
}
