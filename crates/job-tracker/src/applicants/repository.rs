use super::domain::{ApplicantId, ApplicantRecord};

/// Storage abstraction so the service can be exercised against any backing table.
pub trait ApplicantRepository: Send + Sync {
    /// Reserves the next synthetic identifier.
    fn allocate_id(&self) -> Result<ApplicantId, RepositoryError>;
    fn insert(&self, record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError>;
    /// Inserts every record or none of them.
    fn insert_batch(
        &self,
        records: Vec<ApplicantRecord>,
    ) -> Result<Vec<ApplicantRecord>, RepositoryError>;
    fn fetch(&self, id: &ApplicantId) -> Result<Option<ApplicantRecord>, RepositoryError>;
    /// All records in submission order.
    fn list(&self) -> Result<Vec<ApplicantRecord>, RepositoryError>;
    fn delete(&self, id: &ApplicantId) -> Result<ApplicantRecord, RepositoryError>;
    /// Removes every record, returning how many were dropped.
    fn clear(&self) -> Result<usize, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("applicant already exists")]
    Conflict,
    #[error("applicant not found")]
    NotFound,
    #[error("applicant store unavailable: {0}")]
    Unavailable(String),
}
