use std::sync::Arc;

use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

use crate::applicants::domain::{ApplicantId, ApplicantRecord, ApplicantSubmission, Region};
use crate::applicants::repository::{ApplicantRepository, RepositoryError};
use crate::applicants::{
    applicant_router, AdminAccess, ApplicantService, InMemoryApplicantRepository,
    ADMIN_PASSWORD_HEADER,
};
use crate::statistics::StatAdjuster;

pub(super) const ADMIN_PASSWORD: &str = "letmein";

pub(super) fn submission(name: &str, age: &str) -> ApplicantSubmission {
    ApplicantSubmission {
        name: name.to_string(),
        age: Some(age.to_string()),
        region: Some(Region::WesternVisayas),
        job_interest: Some("customer service".to_string()),
        email: Some(format!("{}@example.ph", name.to_lowercase().replace(' ', "."))),
    }
}

pub(super) fn build_service() -> (
    ApplicantService<InMemoryApplicantRepository>,
    Arc<InMemoryApplicantRepository>,
) {
    let repository = Arc::new(InMemoryApplicantRepository::default());
    let service = ApplicantService::new(repository.clone(), Arc::new(StatAdjuster::default()));
    (service, repository)
}

pub(super) fn router_with_service(
    service: ApplicantService<InMemoryApplicantRepository>,
) -> axum::Router {
    applicant_router(Arc::new(service), AdminAccess::new(ADMIN_PASSWORD))
}

pub(super) fn admin_get(uri: &str) -> Request<axum::body::Body> {
    Request::get(uri)
        .header(ADMIN_PASSWORD_HEADER, ADMIN_PASSWORD)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status");
}

pub(super) struct UnavailableRepository;

impl ApplicantRepository for UnavailableRepository {
    fn allocate_id(&self) -> Result<ApplicantId, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert(&self, _record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert_batch(
        &self,
        _records: Vec<ApplicantRecord>,
    ) -> Result<Vec<ApplicantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicantId) -> Result<Option<ApplicantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ApplicantRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _id: &ApplicantId) -> Result<ApplicantRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn clear(&self) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
