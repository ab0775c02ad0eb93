//! Admin console pages

use super::{render, CourseFilter, UserFilter};
use crate::{
    auth::CurrentUser,
    templates::{
        AdminCoursesTemplate, AdminDashboardTemplate, AdminProgressTemplate,
        AdminReportsTemplate, AdminUsersTemplate,
    },
    AppState, WebResult,
};
use axum::{
    extract::{Query, State},
    response::Html,
};
use lms_core::catalog::{AccountRole, AccountStatus};
use tracing::debug;

pub async fn admin_dashboard(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> WebResult<Html<String>> {
    render(&AdminDashboardTemplate::new(&identity, &state.catalog))
}

/// User list, optionally narrowed by `?status=` or `?role=`.
///
/// An unrecognised filter value is ignored and the full list is shown.
pub async fn admin_users(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Query(filter): Query<UserFilter>,
) -> WebResult<Html<String>> {
    let catalog = &state.catalog;
    let status = filter.status.as_deref().and_then(AccountStatus::from_label);
    let role = filter.role.as_deref().and_then(AccountRole::from_label);

    let (users, applied) = match (status, role) {
        (Some(status), _) => (catalog.users_with_status(status), Some(status.to_string())),
        (None, Some(role)) => (catalog.users_with_role(role), Some(role.to_string())),
        (None, None) => (catalog.users().iter().collect(), None),
    };
    debug!(filter = ?applied, count = users.len(), "Listing users");

    render(&AdminUsersTemplate::new(&identity, users, applied))
}

/// Course list, optionally narrowed by `?category=`
pub async fn admin_courses(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Query(filter): Query<CourseFilter>,
) -> WebResult<Html<String>> {
    let catalog = &state.catalog;
    let category = filter.category.filter(|c| !c.trim().is_empty());
    let courses = match category.as_deref() {
        Some(category) => catalog.courses_in_category(category),
        None => catalog.managed_courses().iter().collect(),
    };

    render(&AdminCoursesTemplate::new(&identity, courses, category))
}

pub async fn admin_progress(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> WebResult<Html<String>> {
    render(&AdminProgressTemplate::new(&identity, &state.catalog))
}

pub async fn admin_reports(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> WebResult<Html<String>> {
    render(&AdminReportsTemplate::new(&identity, &state.catalog))
}
