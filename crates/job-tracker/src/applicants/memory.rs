use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::domain::{ApplicantId, ApplicantRecord};
use super::repository::{ApplicantRepository, RepositoryError};

/// Mutex-guarded table with its own identifier sequence.
#[derive(Debug)]
pub struct InMemoryApplicantRepository {
    records: Mutex<BTreeMap<ApplicantId, ApplicantRecord>>,
    sequence: AtomicU64,
}

impl Default for InMemoryApplicantRepository {
    fn default() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            sequence: AtomicU64::new(1),
        }
    }
}

impl InMemoryApplicantRepository {
    fn table(&self) -> Result<MutexGuard<'_, BTreeMap<ApplicantId, ApplicantRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("applicant table lock poisoned".to_string()))
    }

    /// Imported identifiers must never be handed out again.
    fn advance_past(&self, id: &ApplicantId) {
        if let Some(sequence) = id.sequence() {
            self.sequence
                .fetch_max(sequence.saturating_add(1), Ordering::Relaxed);
        }
    }
}

impl ApplicantRepository for InMemoryApplicantRepository {
    fn allocate_id(&self) -> Result<ApplicantId, RepositoryError> {
        let table = self.table()?;
        loop {
            let id = ApplicantId::from_sequence(self.sequence.fetch_add(1, Ordering::Relaxed));
            if !table.contains_key(&id) {
                return Ok(id);
            }
        }
    }

    fn insert(&self, record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError> {
        let mut table = self.table()?;
        if table.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }

        self.advance_past(&record.id);
        table.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn insert_batch(
        &self,
        records: Vec<ApplicantRecord>,
    ) -> Result<Vec<ApplicantRecord>, RepositoryError> {
        let mut table = self.table()?;
        let mut incoming = BTreeSet::new();
        for record in &records {
            if table.contains_key(&record.id) || !incoming.insert(&record.id) {
                return Err(RepositoryError::Conflict);
            }
        }

        for record in &records {
            self.advance_past(&record.id);
            table.insert(record.id.clone(), record.clone());
        }
        Ok(records)
    }

    fn fetch(&self, id: &ApplicantId) -> Result<Option<ApplicantRecord>, RepositoryError> {
        Ok(self.table()?.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<ApplicantRecord>, RepositoryError> {
        let mut records: Vec<_> = self.table()?.values().cloned().collect();
        records.sort_by(|left, right| {
            left.submitted_at
                .cmp(&right.submitted_at)
                .then_with(|| left.id.cmp(&right.id))
        });
        Ok(records)
    }

    fn delete(&self, id: &ApplicantId) -> Result<ApplicantRecord, RepositoryError> {
        self.table()?.remove(id).ok_or(RepositoryError::NotFound)
    }

    fn clear(&self) -> Result<usize, RepositoryError> {
        let mut table = self.table()?;
        let removed = table.len();
        table.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: ApplicantId, minute: u32) -> ApplicantRecord {
        ApplicantRecord {
            id,
            name: "Ana Reyes".to_string(),
            age: Some(20),
            age_bucket: crate::statistics::AgeBucket::classify(20),
            region: None,
            job_interest: None,
            email: None,
            submitted_at: Utc
                .with_ymd_and_hms(2025, 3, 1, 9, minute, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    #[test]
    fn allocated_ids_are_sequential() {
        let repository = InMemoryApplicantRepository::default();
        let first = repository.allocate_id().expect("first id");
        let second = repository.allocate_id().expect("second id");
        assert_eq!(first.0, "app-000001");
        assert_eq!(second.0, "app-000002");
    }

    #[test]
    fn inserted_ids_advance_the_sequence() {
        let repository = InMemoryApplicantRepository::default();
        repository
            .insert(record(ApplicantId::from_sequence(41), 0))
            .expect("insert imported record");
        let next = repository.allocate_id().expect("next id");
        assert_eq!(next.sequence(), Some(42));
    }

    #[test]
    fn duplicate_insert_conflicts() {
        let repository = InMemoryApplicantRepository::default();
        let id = repository.allocate_id().expect("id");
        repository.insert(record(id.clone(), 0)).expect("first insert");
        assert!(matches!(
            repository.insert(record(id, 1)),
            Err(RepositoryError::Conflict)
        ));
    }

    #[test]
    fn batch_with_conflict_inserts_nothing() {
        let repository = InMemoryApplicantRepository::default();
        repository
            .insert(record(ApplicantId::from_sequence(3), 0))
            .expect("existing record");

        let batch = vec![
            record(ApplicantId::from_sequence(50), 1),
            record(ApplicantId::from_sequence(3), 2),
        ];
        assert!(matches!(
            repository.insert_batch(batch),
            Err(RepositoryError::Conflict)
        ));
        assert_eq!(repository.list().expect("list").len(), 1);
        assert_eq!(repository.allocate_id().expect("next id").sequence(), Some(4));

        let repeated = vec![
            record(ApplicantId::from_sequence(60), 1),
            record(ApplicantId::from_sequence(60), 2),
        ];
        assert!(matches!(
            repository.insert_batch(repeated),
            Err(RepositoryError::Conflict)
        ));
        assert_eq!(repository.list().expect("list").len(), 1);
    }

    #[test]
    fn batch_inserts_all_records() {
        let repository = InMemoryApplicantRepository::default();
        let batch = vec![
            record(ApplicantId::from_sequence(7), 0),
            record(ApplicantId::from_sequence(8), 1),
        ];
        assert_eq!(repository.insert_batch(batch).expect("batch").len(), 2);
        assert_eq!(repository.allocate_id().expect("next id").sequence(), Some(9));
    }

    #[test]
    fn list_orders_by_submission_time() {
        let repository = InMemoryApplicantRepository::default();
        repository
            .insert(record(ApplicantId::from_sequence(2), 5))
            .expect("later");
        repository
            .insert(record(ApplicantId::from_sequence(9), 1))
            .expect("earlier");
        let ids: Vec<_> = repository
            .list()
            .expect("list")
            .into_iter()
            .map(|record| record.id.0)
            .collect();
        assert_eq!(ids, vec!["app-000009", "app-000002"]);
    }

    #[test]
    fn delete_and_clear_remove_records() {
        let repository = InMemoryApplicantRepository::default();
        for minute in 0..3 {
            let id = repository.allocate_id().expect("id");
            repository.insert(record(id, minute)).expect("insert");
        }
        let removed = repository
            .delete(&ApplicantId::from_sequence(1))
            .expect("delete existing");
        assert_eq!(removed.id.0, "app-000001");
        assert!(matches!(
            repository.delete(&ApplicantId::from_sequence(1)),
            Err(RepositoryError::NotFound)
        ));
        assert_eq!(repository.clear().expect("clear"), 2);
        assert!(repository.list().expect("list").is_empty());
    }
}
