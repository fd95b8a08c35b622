use chrono::{DateTime, Utc};

use super::domain::{parse_age, ApplicantId, ApplicantRecord, ApplicantSubmission, Region};
use crate::statistics::AgeBucket;

pub(crate) const MAX_NAME_LENGTH: usize = 120;

/// Validation errors raised while turning a form submission into a record.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("applicant name is required")]
    MissingName,
    #[error("applicant name exceeds {max} characters (found {found})")]
    NameTooLong { max: usize, found: usize },
    #[error("email address '{0}' is not valid")]
    InvalidEmail(String),
}

/// Submission that passed intake checks and is ready for an identifier.
#[derive(Debug)]
pub(crate) struct ValidatedSubmission {
    name: String,
    raw_age: Option<String>,
    region: Option<Region>,
    job_interest: Option<String>,
    email: Option<String>,
}

/// Normalizes free-text fields. Age problems never reject a submission.
pub(crate) fn validate_submission(
    submission: ApplicantSubmission,
) -> Result<ValidatedSubmission, IntakeViolation> {
    let name = submission.name.trim().to_string();
    if name.is_empty() {
        return Err(IntakeViolation::MissingName);
    }

    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(IntakeViolation::NameTooLong {
            max: MAX_NAME_LENGTH,
            found: length,
        });
    }

    let email = non_blank(submission.email);
    if let Some(address) = &email {
        if !looks_like_email(address) {
            return Err(IntakeViolation::InvalidEmail(address.clone()));
        }
    }

    Ok(ValidatedSubmission {
        name,
        raw_age: submission.age,
        region: submission.region,
        job_interest: non_blank(submission.job_interest),
        email,
    })
}

impl ValidatedSubmission {
    pub(crate) fn into_record(self, id: ApplicantId, submitted_at: DateTime<Utc>) -> ApplicantRecord {
        let raw_age = self.raw_age.as_deref();

        ApplicantRecord {
            id,
            name: self.name,
            age: parse_age(raw_age),
            age_bucket: AgeBucket::classify_raw(raw_age),
            region: self.region,
            job_interest: self.job_interest,
            email: self.email,
            submitted_at,
        }
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn looks_like_email(address: &str) -> bool {
    match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !address.contains(char::is_whitespace)
        }
        None => false,
    }
}
