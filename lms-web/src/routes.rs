//! Route definitions for the LMS web server
//!
//! Page paths come from the core route table, so the gate and the router
//! cannot disagree about where a page lives.

use crate::{handlers, AppState};
use axum::{routing::get, Router};
use lms_core::Route;

/// Create page routes, public and gated
pub fn page_routes() -> Router<AppState> {
    Router::new()
        // Public pages
        .route(Route::Home.path(), get(handlers::home))
        .route(
            Route::SignIn.path(),
            get(handlers::sign_in_page).post(handlers::sign_in_submit),
        )
        .route(
            Route::SignUp.path(),
            get(handlers::sign_up_page).post(handlers::sign_up_submit),
        )
        .route(
            Route::ForgotPassword.path(),
            get(handlers::forgot_password_page).post(handlers::forgot_password_submit),
        )
        .route("/logout", get(handlers::logout).post(handlers::logout))
        // Learner pages
        .route(Route::Dashboard.path(), get(handlers::dashboard))
        .route(Route::Courses.path(), get(handlers::courses))
        .route(Route::Progress.path(), get(handlers::progress))
        // Admin console
        .route(Route::Admin.path(), get(handlers::admin_dashboard))
        .route(Route::AdminUsers.path(), get(handlers::admin_users))
        .route(Route::AdminCourses.path(), get(handlers::admin_courses))
        .route(Route::AdminProgress.path(), get(handlers::admin_progress))
        .route(Route::AdminReports.path(), get(handlers::admin_reports))
}

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/session", get(handlers::session_status))
}
