//! Role dashboards. Each route is mounted behind a guard admitting only its role.

use axum::Json;
use campus::domain::constants::DASHBOARD_TAG;
use campus::domain::role::Role;
use serde::Serialize;
use utoipa::ToSchema;

/// What a dashboard offers its role.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    role: &'static str,
    sections: Vec<&'static str>,
}

impl DashboardResponse {
    fn new(role: Role, sections: &[&'static str]) -> Self {
        Self { role: role.as_str(), sections: sections.to_vec() }
    }
}

#[utoipa::path(
    get,
    path = "/dashboard/student",
    responses(
        (status = OK, body = DashboardResponse),
        (status = SEE_OTHER, description = "Not signed in or not a student"),
        (status = SERVICE_UNAVAILABLE, description = "Session still resolving"),
    ),
    tag = DASHBOARD_TAG,
)]
pub(crate) async fn student() -> Json<DashboardResponse> {
    Json(DashboardResponse::new(
        Role::Student,
        &["class-routine", "exam-results", "payment-status", "notices"],
    ))
}

#[utoipa::path(
    get,
    path = "/dashboard/faculty",
    responses(
        (status = OK, body = DashboardResponse),
        (status = SEE_OTHER, description = "Not signed in or not faculty"),
        (status = SERVICE_UNAVAILABLE, description = "Session still resolving"),
    ),
    tag = DASHBOARD_TAG,
)]
pub(crate) async fn faculty() -> Json<DashboardResponse> {
    Json(DashboardResponse::new(
        Role::Faculty,
        &["grade-entry", "routine-scheduling", "equipment-booking", "notices"],
    ))
}

#[utoipa::path(
    get,
    path = "/dashboard/admin",
    responses(
        (status = OK, body = DashboardResponse),
        (status = SEE_OTHER, description = "Not signed in or not an admin"),
        (status = SERVICE_UNAVAILABLE, description = "Session still resolving"),
    ),
    tag = DASHBOARD_TAG,
)]
pub(crate) async fn admin() -> Json<DashboardResponse> {
    Json(DashboardResponse::new(
        Role::Admin,
        &["user-management", "notice-publishing", "routine-scheduling", "payment-status"],
    ))
}

#[utoipa::path(
    get,
    path = "/dashboard/alumni",
    responses(
        (status = OK, body = DashboardResponse),
        (status = SEE_OTHER, description = "Not signed in or not an alumnus"),
        (status = SERVICE_UNAVAILABLE, description = "Session still resolving"),
    ),
    tag = DASHBOARD_TAG,
)]
pub(crate) async fn alumni() -> Json<DashboardResponse> {
    Json(DashboardResponse::new(Role::Alumni, &["alumni-updates", "events", "notices"]))
}
