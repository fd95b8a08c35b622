use super::age::AgeBucket;
use super::baseline::{BaselineStat, StatBaselines};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// NEET moves at this fraction of the unemployment reduction.
pub const NEET_REDUCTION_WEIGHT: f64 = 0.8;

/// Applicants tallied per bucket. Missing buckets read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketCounts {
    counts: [u64; AgeBucket::COUNT],
}

impl BucketCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Negative counts are clamped to zero.
    pub fn with(mut self, bucket: AgeBucket, count: i64) -> Self {
        self.set(bucket, count);
        self
    }

    pub fn set(&mut self, bucket: AgeBucket, count: i64) {
        self.counts[bucket.index()] = u64::try_from(count).unwrap_or(0);
    }

    pub fn increment(&mut self, bucket: AgeBucket) {
        let slot = &mut self.counts[bucket.index()];
        *slot = slot.saturating_add(1);
    }

    pub fn get(&self, bucket: AgeBucket) -> u64 {
        self.counts[bucket.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0u64, |acc, count| acc.saturating_add(*count))
    }

    /// Reads an object keyed by bucket label. Unknown keys are ignored and any
    /// value that is not a non-negative number (or numeric string) counts as zero.
    pub fn from_loose_json(value: &Value) -> Self {
        let mut counts = Self::new();
        let Some(object) = value.as_object() else {
            return counts;
        };

        for (key, raw) in object {
            if let Ok(bucket) = key.parse::<AgeBucket>() {
                counts.set(bucket, coerce_count(raw));
            }
        }

        counts
    }
}

fn coerce_count(raw: &Value) -> i64 {
    match raw {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|value| i64::try_from(value).unwrap_or(i64::MAX)))
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|value| value.is_finite())
                    .map(|value| value.trunc() as i64)
            })
            .unwrap_or(0),
        Value::String(text) => text.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

impl FromIterator<AgeBucket> for BucketCounts {
    fn from_iter<I: IntoIterator<Item = AgeBucket>>(iter: I) -> Self {
        let mut counts = Self::new();
        for bucket in iter {
            counts.increment(bucket);
        }
        counts
    }
}

impl Serialize for BucketCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(AgeBucket::COUNT))?;
        for bucket in AgeBucket::ordered() {
            map.serialize_entry(bucket.label(), &self.get(bucket))?;
        }
        map.end()
    }
}

/// Figures shown to users after the applicant adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedStat {
    pub unemployment_pct: f64,
    pub underemployment_pct: f64,
    pub neet_pct: f64,
    pub avg_wage_php: f64,
}

impl From<BaselineStat> for DerivedStat {
    fn from(baseline: BaselineStat) -> Self {
        Self {
            unemployment_pct: baseline.unemployment_pct,
            underemployment_pct: baseline.underemployment_pct,
            neet_pct: baseline.neet_pct,
            avg_wage_php: baseline.avg_wage_php,
        }
    }
}

/// Derived figures for every bucket, always the full domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    stats: [DerivedStat; AgeBucket::COUNT],
}

impl DerivedStats {
    pub fn get(&self, bucket: AgeBucket) -> &DerivedStat {
        &self.stats[bucket.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (AgeBucket, &DerivedStat)> + '_ {
        AgeBucket::ordered()
            .into_iter()
            .map(move |bucket| (bucket, self.get(bucket)))
    }
}

impl Serialize for DerivedStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(AgeBucket::COUNT))?;
        for (bucket, stat) in self.iter() {
            map.serialize_entry(bucket.label(), stat)?;
        }
        map.end()
    }
}

/// Stateless recomputation of the displayed statistics from applicant counts.
#[derive(Debug, Clone, Default)]
pub struct StatAdjuster {
    baselines: StatBaselines,
}

impl StatAdjuster {
    pub fn new(baselines: StatBaselines) -> Self {
        Self { baselines }
    }

    pub fn baselines(&self) -> &StatBaselines {
        &self.baselines
    }

    pub fn recompute(&self, counts: &BucketCounts) -> DerivedStats {
        let stats = AgeBucket::ordered().map(|bucket| self.adjust(bucket, counts.get(bucket)));
        DerivedStats { stats }
    }

    fn adjust(&self, bucket: AgeBucket, count: u64) -> DerivedStat {
        let entry = self.baselines.entry(bucket);
        let reduction = count as f64 * entry.reduction_factor;

        DerivedStat {
            unemployment_pct: floor_at_zero(entry.stat.unemployment_pct - reduction),
            underemployment_pct: entry.stat.underemployment_pct,
            neet_pct: floor_at_zero(entry.stat.neet_pct - reduction * NEET_REDUCTION_WEIGHT),
            avg_wage_php: entry.stat.avg_wage_php,
        }
    }
}

fn floor_at_zero(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}
