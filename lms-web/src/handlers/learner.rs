//! Learner pages

use super::render;
use crate::{
    auth::CurrentUser,
    templates::{CoursesTemplate, DashboardTemplate, ProgressTemplate},
    AppState, WebResult,
};
use axum::{extract::State, response::Html};

pub async fn dashboard(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> WebResult<Html<String>> {
    render(&DashboardTemplate::new(&identity, &state.catalog))
}

pub async fn courses(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> WebResult<Html<String>> {
    render(&CoursesTemplate::new(&identity, &state.catalog))
}

pub async fn progress(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> WebResult<Html<String>> {
    render(&ProgressTemplate::new(&identity, &state.catalog))
}
