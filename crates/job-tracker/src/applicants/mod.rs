//! Applicant intake, storage, CSV snapshots, and the admin views over them.

pub mod admin;
pub mod domain;
pub(crate) mod intake;
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;
pub(crate) mod transfer;

#[cfg(test)]
mod tests;

pub use admin::{AdminAccess, ADMIN_PASSWORD_HEADER};
pub use domain::{ApplicantId, ApplicantRecord, ApplicantSubmission, Region, UnknownRegion};
pub use intake::IntakeViolation;
pub use memory::InMemoryApplicantRepository;
pub use repository::{ApplicantRepository, RepositoryError};
pub use router::applicant_router;
pub use service::{AgeTally, ApplicantService, ApplicantServiceError, ImportSummary};
pub use transfer::CsvTransferError;
