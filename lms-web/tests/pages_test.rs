//! Page access and auth flows over HTTP

mod helpers;

use axum::http::{header, StatusCode};
use helpers::{spawn_app, spawn_app_with_client, ADMIN_COOKIE, LEARNER_COOKIE};
use lms_core::{FailingAuthClient, Route};
use std::sync::Arc;

#[tokio::test]
async fn test_public_pages_render_without_session() {
    let app = spawn_app();
    for path in ["/", "/signin", "/signup", "/forgot-password"] {
        let response = app.get(path, None).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.body.contains("<nav>"), "{path}");
    }
}

#[tokio::test]
async fn test_every_protected_page_redirects_anonymous_visitor() {
    let app = spawn_app();
    for route in Route::ALL.into_iter().filter(Route::is_protected) {
        let response = app.get(route.path(), None).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{route}");
        assert_eq!(response.location(), Some("/signin"), "{route}");
        assert!(response.body.is_empty(), "{route} leaked content");
    }
}

#[tokio::test]
async fn test_admin_session_renders_console_and_leaves_dashboard() {
    let app = spawn_app();

    let console = app.get("/admin", Some(ADMIN_COOKIE)).await;
    assert_eq!(console.status, StatusCode::OK);
    assert!(console.body.contains("Admin Dashboard"));
    assert!(console.body.contains("admin@example.com"));

    let dashboard = app.get("/dashboard", Some(ADMIN_COOKIE)).await;
    assert_eq!(dashboard.status, StatusCode::SEE_OTHER);
    assert_eq!(dashboard.location(), Some("/admin"));
}

#[tokio::test]
async fn test_learner_kept_out_of_admin_pages() {
    let app = spawn_app();
    for path in ["/admin", "/admin/users", "/admin/courses", "/admin/progress"] {
        let response = app.get(path, Some(LEARNER_COOKIE)).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{path}");
        assert_eq!(response.location(), Some("/dashboard"), "{path}");
    }
}

/// Reports has no role check today. When product decides it is admin-only,
/// this test flips to expect a redirect to /dashboard.
#[tokio::test]
async fn test_reports_page_admits_learner_pending_product_decision() {
    let app = spawn_app();
    let response = app.get("/admin/reports", Some(LEARNER_COOKIE)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Reports &amp; Analytics"));
}

#[tokio::test]
async fn test_learner_pages_render() {
    let app = spawn_app();
    for (path, heading) in [
        ("/dashboard", "Welcome back!"),
        ("/courses", "My Courses"),
        ("/progress", "Learning Progress"),
    ] {
        let response = app.get(path, Some(LEARNER_COOKIE)).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.body.contains(heading), "{path}");
    }
}

#[tokio::test]
async fn test_garbled_role_is_sent_to_sign_in() {
    let app = spawn_app();
    let cookie = "isAuthenticated=true; userEmail=x@example.com; userType=root";
    let response = app.get("/courses", Some(cookie)).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/signin"));
}

#[tokio::test]
async fn test_learner_sign_in_sets_three_cookies() {
    let app = spawn_app();
    let response = app
        .post_form("/signin", "email=user%40example.com&password=password", None)
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/dashboard"));

    let mut cookies = response.set_cookies();
    cookies.sort();
    assert_eq!(
        cookies,
        vec![
            ("isAuthenticated".to_string(), "true".to_string()),
            ("userEmail".to_string(), "user@example.com".to_string()),
            ("userType".to_string(), "user".to_string()),
        ]
    );
    // The email travels percent-encoded and decodes back for the gate
    assert!(response
        .set_cookie_pairs()
        .contains(&"userEmail=user%40example.com".to_string()));

    let dashboard = app.get("/dashboard", Some(&response.cookie_header())).await;
    assert_eq!(dashboard.status, StatusCode::OK);
    assert!(dashboard.body.contains("user@example.com"));
}

#[tokio::test]
async fn test_admin_sign_in_lands_on_console() {
    let app = spawn_app();
    let response = app
        .post_form("/signin", "email=admin%40example.com&password=admin123", None)
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/admin"));
    assert!(response
        .set_cookies()
        .contains(&("userType".to_string(), "admin".to_string())));
}

#[tokio::test]
async fn test_wrong_pair_sets_nothing_and_shows_banner() {
    let app = spawn_app();
    let response = app
        .post_form("/signin", "email=user%40example.com&password=wrongpass", None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.set_cookies().is_empty());
    assert!(response
        .body
        .contains("Invalid email or password. Try the demo credentials below."));
}

#[tokio::test]
async fn test_malformed_sign_in_shows_field_errors() {
    let app = spawn_app();
    let response = app.post_form("/signin", "email=nope&password=123", None).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.set_cookies().is_empty());
    assert!(response.body.contains("Invalid email address"));
    assert!(response.body.contains("Password must be at least 6 characters"));
}

#[tokio::test]
async fn test_backend_failure_shows_generic_error() {
    let app = spawn_app_with_client(Arc::new(FailingAuthClient));
    let response = app
        .post_form("/signin", "email=user%40example.com&password=password", None)
        .await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.set_cookies().is_empty());
    assert!(response.body.contains("An error occurred during sign in"));
}

#[tokio::test]
async fn test_logout_clears_cookies_and_gate_closes_again() {
    let app = spawn_app();
    let response = app.post_form("/logout", "", Some(LEARNER_COOKIE)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/signin"));

    let cleared = response.set_cookies();
    for key in ["isAuthenticated", "userEmail", "userType"] {
        assert!(
            cleared.iter().any(|(name, value)| name == key && value.is_empty()),
            "{key} not cleared"
        );
    }

    // The browser drops every cookie, so the next visit carries none
    assert!(response.cookie_header().is_empty());
    let again = app.get("/progress", None).await;
    assert_eq!(again.location(), Some("/signin"));
}

#[tokio::test]
async fn test_logout_link_works_over_get() {
    let app = spawn_app();
    let response = app.get("/logout", Some(ADMIN_COOKIE)).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/signin"));
}

#[tokio::test]
async fn test_sign_up_with_empty_first_name_stays_put() {
    let app = spawn_app();
    let response = app
        .post_form(
            "/signup",
            "firstName=&lastName=Doe&email=john%40example.com&password=secret1",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.headers.get(header::REFRESH).is_none());
    assert!(response.location().is_none());
    assert!(response.body.contains("First name is required"));
    // Entered values survive the re-render
    assert!(response.body.contains("john@example.com"));
}

#[tokio::test]
async fn test_sign_up_success_schedules_sign_in() {
    let app = spawn_app();
    let response = app
        .post_form(
            "/signup",
            "firstName=John&lastName=Doe&email=john%40example.com&password=secret1",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .headers
            .get(header::REFRESH)
            .and_then(|v| v.to_str().ok()),
        Some("0; url=/signin")
    );
    assert!(response.body.contains("Account created"));
    assert!(response.set_cookies().is_empty());
}

#[tokio::test]
async fn test_forgot_password_flow() {
    let app = spawn_app();

    let bad = app.post_form("/forgot-password", "email=nope", None).await;
    assert_eq!(bad.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(bad.body.contains("Invalid email address"));

    let ok = app
        .post_form("/forgot-password", "email=user%40example.com", None)
        .await;
    assert_eq!(ok.status, StatusCode::OK);
    assert!(ok.body.contains("a reset link is on its way"));
}

#[tokio::test]
async fn test_admin_user_filters() {
    let app = spawn_app();

    let inactive = app.get("/admin/users?status=inactive", Some(ADMIN_COOKIE)).await;
    assert_eq!(inactive.status, StatusCode::OK);
    assert!(inactive.body.contains("Mike Wilson"));
    assert!(!inactive.body.contains("Sarah Johnson"));

    let unknown = app.get("/admin/users?role=janitor", Some(ADMIN_COOKIE)).await;
    assert!(unknown.body.contains("Mike Wilson"));
    assert!(unknown.body.contains("Sarah Johnson"));
}

#[tokio::test]
async fn test_admin_course_filter() {
    let app = spawn_app();
    let response = app
        .get("/admin/courses?category=programming", Some(ADMIN_COOKIE))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Python Basics"));
    assert!(!response.body.contains("React Fundamentals"));
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let app = spawn_app();
    let response = app.get("/nowhere", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Page not found"));
}
