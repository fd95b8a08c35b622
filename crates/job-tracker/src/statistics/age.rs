use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed, non-overlapping age ranges used to segment applicants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeBucket {
    #[serde(rename = "18-21")]
    EarlyYouth,
    #[serde(rename = "22-25")]
    MidYouth,
    #[serde(rename = "26-30")]
    LateYouth,
}

impl AgeBucket {
    pub const COUNT: usize = 3;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [Self::EarlyYouth, Self::MidYouth, Self::LateYouth]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EarlyYouth => "18-21",
            Self::MidYouth => "22-25",
            Self::LateYouth => "26-30",
        }
    }

    /// Inclusive lower and upper age.
    pub const fn bounds(self) -> (u8, u8) {
        match self {
            Self::EarlyYouth => (18, 21),
            Self::MidYouth => (22, 25),
            Self::LateYouth => (26, 30),
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::EarlyYouth => 0,
            Self::MidYouth => 1,
            Self::LateYouth => 2,
        }
    }

    /// Returns `None` for ages outside every bucket.
    pub fn classify(age: i64) -> Option<Self> {
        Self::ordered().into_iter().find(|bucket| {
            let (low, high) = bucket.bounds();
            (i64::from(low)..=i64::from(high)).contains(&age)
        })
    }

    /// Classifies raw form input. Missing, blank, and non-integer text is unclassified.
    pub fn classify_raw(raw: Option<&str>) -> Option<Self> {
        raw.map(str::trim)
            .filter(|value| !value.is_empty())
            .and_then(|value| value.parse::<i64>().ok())
            .and_then(Self::classify)
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown age group '{0}'")]
pub struct UnknownAgeBucket(pub String);

impl FromStr for AgeBucket {
    type Err = UnknownAgeBucket;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|bucket| bucket.label() == trimmed)
            .ok_or_else(|| UnknownAgeBucket(trimmed.to_string()))
    }
}
