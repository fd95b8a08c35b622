use std::collections::BTreeSet;
use std::io::{Read, Write};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{ApplicantId, ApplicantRecord, ApplicantSubmission};
use super::intake::{validate_submission, IntakeViolation};
use super::repository::{ApplicantRepository, RepositoryError};
use super::transfer::{read_rows, write_records, CsvTransferError, ImportRow};
use crate::statistics::{BucketCounts, StatAdjuster, StatsDashboard};

/// Classified tally of the stored applicants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeTally {
    pub counts: BucketCounts,
    pub unclassified: usize,
}

/// Summary of a CSV snapshot import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Service composing intake validation, the applicant store, and the statistics adjuster.
pub struct ApplicantService<R> {
    repository: Arc<R>,
    adjuster: Arc<StatAdjuster>,
}

impl<R> ApplicantService<R>
where
    R: ApplicantRepository + 'static,
{
    pub fn new(repository: Arc<R>, adjuster: Arc<StatAdjuster>) -> Self {
        Self {
            repository,
            adjuster,
        }
    }

    pub fn adjuster(&self) -> &StatAdjuster {
        &self.adjuster
    }

    /// Validate and store a form submission.
    pub fn submit(
        &self,
        submission: ApplicantSubmission,
    ) -> Result<ApplicantRecord, ApplicantServiceError> {
        let validated = validate_submission(submission)?;
        let id = self.repository.allocate_id()?;
        let record = validated.into_record(id, Utc::now());
        let stored = self.repository.insert(record)?;

        info!(
            applicant_id = %stored.id,
            age_group = stored.age_group_label(),
            "applicant submitted"
        );
        Ok(stored)
    }

    pub fn list(&self) -> Result<Vec<ApplicantRecord>, ApplicantServiceError> {
        Ok(self.repository.list()?)
    }

    pub fn get(&self, id: &ApplicantId) -> Result<ApplicantRecord, ApplicantServiceError> {
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn delete(&self, id: &ApplicantId) -> Result<ApplicantRecord, ApplicantServiceError> {
        let removed = self.repository.delete(id)?;
        info!(applicant_id = %removed.id, "applicant deleted");
        Ok(removed)
    }

    pub fn clear(&self) -> Result<usize, ApplicantServiceError> {
        let removed = self.repository.clear()?;
        warn!(removed, "applicant store cleared");
        Ok(removed)
    }

    /// Counts stored applicants per age bucket. Unclassified ages are tallied separately.
    pub fn tally(&self) -> Result<AgeTally, ApplicantServiceError> {
        let records = self.repository.list()?;
        let counts: BucketCounts = records.iter().filter_map(|record| record.age_bucket).collect();
        let unclassified = records
            .iter()
            .filter(|record| record.age_bucket.is_none())
            .count();

        Ok(AgeTally {
            counts,
            unclassified,
        })
    }

    /// Current derived statistics. Recomputed on every call.
    pub fn dashboard(&self) -> Result<StatsDashboard, ApplicantServiceError> {
        let tally = self.tally()?;
        debug!(
            classified = tally.counts.total(),
            unclassified = tally.unclassified,
            "recomputing labour statistics"
        );
        Ok(StatsDashboard::build(
            &self.adjuster,
            tally.counts,
            tally.unclassified,
        ))
    }

    /// Write every stored applicant as CSV, returning the row count.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, ApplicantServiceError> {
        let records = self.repository.list()?;
        write_records(writer, &records)?;
        Ok(records.len())
    }

    /// Load a CSV snapshot. Rows without a name are skipped; missing ids are allocated.
    /// A conflicting snapshot leaves the store untouched.
    pub fn import_csv<Rd: Read>(&self, reader: Rd) -> Result<ImportSummary, ApplicantServiceError> {
        let rows = read_rows(reader)?;

        let mut declared = BTreeSet::new();
        for id in rows.iter().filter_map(ImportRow::declared_id) {
            if declared.contains(&id) || self.repository.fetch(&id)?.is_some() {
                warn!(applicant_id = %id, "snapshot id conflicts; nothing imported");
                return Err(RepositoryError::Conflict.into());
            }
            declared.insert(id);
        }

        let now = Utc::now();
        let mut records = Vec::with_capacity(rows.len());
        let mut skipped = 0;
        for row in rows {
            match row.into_record(|| self.allocate_outside(&declared), now)? {
                Some(record) => records.push(record),
                None => skipped += 1,
            }
        }

        let summary = ImportSummary {
            imported: self.repository.insert_batch(records)?.len(),
            skipped,
        };
        info!(
            imported = summary.imported,
            skipped = summary.skipped,
            "applicant snapshot imported"
        );
        Ok(summary)
    }

    fn allocate_outside(
        &self,
        reserved: &BTreeSet<ApplicantId>,
    ) -> Result<ApplicantId, RepositoryError> {
        loop {
            let id = self.repository.allocate_id()?;
            if !reserved.contains(&id) {
                return Ok(id);
            }
        }
    }
}

/// Error raised by the applicant service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicantServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Transfer(#[from] CsvTransferError),
}
