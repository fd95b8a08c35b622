use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::statistics::AgeBucket;

/// Synthetic identifier issued by the applicant store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

impl ApplicantId {
    pub fn from_sequence(sequence: u64) -> Self {
        Self(format!("app-{sequence:06}"))
    }

    /// Numeric suffix of store-issued identifiers.
    pub fn sequence(&self) -> Option<u64> {
        self.0.strip_prefix("app-").and_then(|raw| raw.parse().ok())
    }
}

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Western Visayas")]
    WesternVisayas,
    #[serde(rename = "National")]
    National,
}

impl Region {
    pub const fn label(self) -> &'static str {
        match self {
            Self::WesternVisayas => "Western Visayas",
            Self::National => "National",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region '{0}'")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "western visayas" | "western_visayas" | "region vi" => Ok(Self::WesternVisayas),
            "national" => Ok(Self::National),
            _ => Err(UnknownRegion(value.trim().to_string())),
        }
    }
}

/// Form payload posted by an applicant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantSubmission {
    pub name: String,
    /// Kept as text so malformed entries can be stored as unclassified.
    #[serde(default, deserialize_with = "age_as_text")]
    pub age: Option<String>,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub job_interest: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

fn age_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

/// Stored applicant with a fixed set of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub id: ApplicantId,
    pub name: String,
    pub age: Option<u8>,
    pub age_bucket: Option<AgeBucket>,
    pub region: Option<Region>,
    pub job_interest: Option<String>,
    pub email: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl ApplicantRecord {
    pub fn age_group_label(&self) -> &'static str {
        self.age_bucket.map(AgeBucket::label).unwrap_or("unclassified")
    }
}

/// Whole years only; anything else is treated as unknown.
pub(crate) fn parse_age(raw: Option<&str>) -> Option<u8> {
    raw.map(str::trim)
        .and_then(|value| value.parse::<i64>().ok())
        .and_then(|value| u8::try_from(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_parses_form_values() {
        assert_eq!(
            " Western Visayas ".parse::<Region>(),
            Ok(Region::WesternVisayas)
        );
        assert_eq!("region vi".parse::<Region>(), Ok(Region::WesternVisayas));
        assert_eq!("NATIONAL".parse::<Region>(), Ok(Region::National));
    }

    #[test]
    fn unknown_region_reports_input() {
        let error = " Mars ".parse::<Region>().expect_err("unknown region");
        assert_eq!(error, UnknownRegion("Mars".to_string()));
        assert_eq!(error.to_string(), "unknown region 'Mars'");
    }
}
