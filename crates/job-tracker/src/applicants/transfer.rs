use std::io::{Read, Write};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{parse_age, ApplicantId, ApplicantRecord, Region};
use super::intake::non_blank;
use super::repository::RepositoryError;
use crate::statistics::AgeBucket;

pub(crate) const CSV_HEADERS: [&str; 8] = [
    "id",
    "name",
    "age",
    "age_group",
    "region",
    "job_interest",
    "email",
    "submitted_at",
];

#[derive(Debug, thiserror::Error)]
pub enum CsvTransferError {
    #[error("failed to read or write applicant CSV: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant CSV data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: &'a str,
    name: &'a str,
    age: Option<u8>,
    age_group: &'static str,
    region: Option<&'static str>,
    job_interest: Option<&'a str>,
    email: Option<&'a str>,
    submitted_at: String,
}

impl<'a> From<&'a ApplicantRecord> for ExportRow<'a> {
    fn from(record: &'a ApplicantRecord) -> Self {
        Self {
            id: &record.id.0,
            name: &record.name,
            age: record.age,
            age_group: record.age_group_label(),
            region: record.region.map(Region::label),
            job_interest: record.job_interest.as_deref(),
            email: record.email.as_deref(),
            submitted_at: record.submitted_at.to_rfc3339(),
        }
    }
}

pub(crate) fn write_records<W: Write>(
    writer: W,
    records: &[ApplicantRecord],
) -> Result<(), CsvTransferError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;

    for record in records {
        csv_writer.serialize(ExportRow::from(record))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Row as read back from a snapshot. `age_group` is informational and re-derived from `age`.
#[derive(Debug, Deserialize)]
pub(crate) struct ImportRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) id: Option<String>,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) age: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) region: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) job_interest: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) submitted_at: Option<String>,
}

impl ImportRow {
    /// Identifier carried by a row that will be imported.
    pub(crate) fn declared_id(&self) -> Option<ApplicantId> {
        if self.name.trim().is_empty() {
            return None;
        }
        self.id.clone().map(ApplicantId)
    }

    /// `Ok(None)` for rows without a name. Rows without an id get one from `allocate`.
    pub(crate) fn into_record<F>(
        self,
        allocate: F,
        now: DateTime<Utc>,
    ) -> Result<Option<ApplicantRecord>, RepositoryError>
    where
        F: FnOnce() -> Result<ApplicantId, RepositoryError>,
    {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Ok(None);
        }

        let id = match self.id {
            Some(raw) => ApplicantId(raw),
            None => allocate()?,
        };

        let raw_age = self.age.as_deref();
        let submitted_at = self
            .submitted_at
            .as_deref()
            .and_then(parse_timestamp)
            .unwrap_or(now);

        Ok(Some(ApplicantRecord {
            id,
            name,
            age: parse_age(raw_age),
            age_bucket: AgeBucket::classify_raw(raw_age),
            region: self.region.as_deref().and_then(|value| value.parse().ok()),
            job_interest: non_blank(self.job_interest),
            email: non_blank(self.email),
            submitted_at,
        }))
    }
}

pub(crate) fn read_rows<R: Read>(reader: R) -> Result<Vec<ImportRow>, CsvTransferError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in csv_reader.deserialize::<ImportRow>() {
        rows.push(row?);
    }

    Ok(rows)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sqlite_and_rfc3339_timestamps() {
        let sqlite = parse_timestamp("2025-03-01 08:30:00").expect("sqlite default format");
        let rfc = parse_timestamp("2025-03-01T08:30:00Z").expect("rfc3339");
        assert_eq!(sqlite, rfc);
        assert!(parse_timestamp("2025-03-01").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
