use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::{JobCatalog, JobListing};
use super::recommend::{JobRecommendation, DEFAULT_RECOMMENDATION_LIMIT};

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationQuery {
    #[serde(default)]
    pub(crate) interest: Option<String>,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendationResponse {
    pub(crate) interest: String,
    pub(crate) recommendations: Vec<JobRecommendation>,
}

/// Router exposing the static job board.
pub fn job_router(catalog: Arc<JobCatalog>) -> Router {
    Router::new()
        .route("/api/v1/jobs", get(list_handler))
        .route("/api/v1/jobs/recommendations", get(recommend_handler))
        .route("/api/v1/jobs/listings/:job_key", get(listing_handler))
        .with_state(catalog)
}

pub(crate) async fn list_handler(State(catalog): State<Arc<JobCatalog>>) -> Json<Vec<JobListing>> {
    Json(catalog.listings().to_vec())
}

pub(crate) async fn listing_handler(
    State(catalog): State<Arc<JobCatalog>>,
    Path(job_key): Path<String>,
) -> Response {
    match catalog.find(&job_key) {
        Some(listing) => Json(listing.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("no job listing '{job_key}'") })),
        )
            .into_response(),
    }
}

pub(crate) async fn recommend_handler(
    State(catalog): State<Arc<JobCatalog>>,
    Query(query): Query<RecommendationQuery>,
) -> Json<RecommendationResponse> {
    let interest = query.interest.unwrap_or_default();
    let limit = query.limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT);
    let recommendations = catalog.recommend(&interest, limit);

    Json(RecommendationResponse {
        interest,
        recommendations,
    })
}
