//! Request and response types for the JSON endpoints and page queries

use lms_core::GateDecision;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

/// Query for `/api/session`
#[derive(Debug, Default, Deserialize)]
pub struct SessionQuery {
    /// Page to evaluate, `/dashboard` when absent
    pub route: Option<String>,
}

/// Gate decision for one page and the current cookies
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub route: String,
    pub decision: GateDecision,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// Filters for the admin user list
#[derive(Debug, Default, Deserialize)]
pub struct UserFilter {
    pub status: Option<String>,
    pub role: Option<String>,
}

/// Filter for the admin course list
#[derive(Debug, Default, Deserialize)]
pub struct CourseFilter {
    pub category: Option<String>,
}
