use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use serde_json::{json, Value};

use super::admin::AdminAccess;
use super::domain::{ApplicantId, ApplicantSubmission};
use super::repository::{ApplicantRepository, RepositoryError};
use super::service::{ApplicantService, ApplicantServiceError};
use crate::statistics::{BucketCounts, StatsDashboard};

/// Shared state handed to every applicant route.
pub struct ApplicantRouteState<R> {
    pub(crate) service: Arc<ApplicantService<R>>,
    pub(crate) admin: AdminAccess,
}

impl<R> Clone for ApplicantRouteState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            admin: self.admin.clone(),
        }
    }
}

/// Router exposing intake, statistics, and admin endpoints.
pub fn applicant_router<R>(service: Arc<ApplicantService<R>>, admin: AdminAccess) -> Router
where
    R: ApplicantRepository + 'static,
{
    Router::new()
        .route("/api/v1/applicants", post(submit_handler::<R>))
        .route("/api/v1/stats", get(stats_handler::<R>))
        .route("/api/v1/stats/recompute", post(recompute_handler::<R>))
        .route("/api/v1/admin/applicants", get(admin_list_handler::<R>))
        .route(
            "/api/v1/admin/applicants/export",
            get(admin_export_handler::<R>),
        )
        .route(
            "/api/v1/admin/applicants/:applicant_id",
            delete(admin_delete_handler::<R>),
        )
        .with_state(ApplicantRouteState { service, admin })
}

pub(crate) async fn submit_handler<R>(
    State(state): State<ApplicantRouteState<R>>,
    axum::Json(submission): axum::Json<ApplicantSubmission>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    match state.service.submit(submission) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn stats_handler<R>(State(state): State<ApplicantRouteState<R>>) -> Response
where
    R: ApplicantRepository + 'static,
{
    match state.service.dashboard() {
        Ok(dashboard) => (StatusCode::OK, axum::Json(dashboard)).into_response(),
        Err(error) => error_response(error),
    }
}

/// Derived statistics for caller-supplied counts; malformed counts read as zero.
pub(crate) async fn recompute_handler<R>(
    State(state): State<ApplicantRouteState<R>>,
    axum::Json(payload): axum::Json<Value>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    let counts_value = payload.get("counts").unwrap_or(&payload);
    let counts = BucketCounts::from_loose_json(counts_value);
    let dashboard = StatsDashboard::build(state.service.adjuster(), counts, 0);
    (StatusCode::OK, axum::Json(dashboard)).into_response()
}

pub(crate) async fn admin_list_handler<R>(
    State(state): State<ApplicantRouteState<R>>,
    headers: HeaderMap,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    if !state.admin.authorize(&headers) {
        return unauthorized();
    }

    match state.service.list() {
        Ok(records) => {
            let payload = json!({
                "total": records.len(),
                "applicants": records,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn admin_export_handler<R>(
    State(state): State<ApplicantRouteState<R>>,
    headers: HeaderMap,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    if !state.admin.authorize(&headers) {
        return unauthorized();
    }

    let content_type = mime::TEXT_CSV_UTF_8.to_string();
    let mut buffer = Vec::new();
    match state.service.export_csv(&mut buffer) {
        Ok(_) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type.as_str()),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"applicants.csv\"",
                ),
            ],
            buffer,
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn admin_delete_handler<R>(
    State(state): State<ApplicantRouteState<R>>,
    headers: HeaderMap,
    Path(applicant_id): Path<String>,
) -> Response
where
    R: ApplicantRepository + 'static,
{
    if !state.admin.authorize(&headers) {
        return unauthorized();
    }

    let id = ApplicantId(applicant_id);
    match state.service.delete(&id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(ApplicantServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "applicant not found",
                "applicant_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn unauthorized() -> Response {
    let payload = json!({ "error": "admin password required" });
    (StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response()
}

fn error_response(error: ApplicantServiceError) -> Response {
    let status = match &error {
        ApplicantServiceError::Intake(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicantServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ApplicantServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ApplicantServiceError::Transfer(_) => StatusCode::BAD_REQUEST,
        ApplicantServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
