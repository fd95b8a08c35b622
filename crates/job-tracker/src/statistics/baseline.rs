use super::age::AgeBucket;
use serde::{Deserialize, Serialize};

/// Published labour-market figures for one bucket before any applicant adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineStat {
    pub unemployment_pct: f64,
    pub underemployment_pct: f64,
    pub neet_pct: f64,
    pub avg_wage_php: f64,
}

/// Baseline plus the per-applicant reduction factor for a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketBaseline {
    pub bucket: AgeBucket,
    pub stat: BaselineStat,
    pub reduction_factor: f64,
}

/// Process-wide constants the adjuster works from. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct StatBaselines {
    entries: [BucketBaseline; AgeBucket::COUNT],
}

impl StatBaselines {
    pub fn standard() -> Self {
        Self {
            entries: [
                BucketBaseline {
                    bucket: AgeBucket::EarlyYouth,
                    stat: BaselineStat {
                        unemployment_pct: 14.5,
                        underemployment_pct: 17.8,
                        neet_pct: 19.0,
                        avg_wage_php: 410.0,
                    },
                    reduction_factor: 0.35,
                },
                BucketBaseline {
                    bucket: AgeBucket::MidYouth,
                    stat: BaselineStat {
                        unemployment_pct: 9.8,
                        underemployment_pct: 15.2,
                        neet_pct: 13.6,
                        avg_wage_php: 520.0,
                    },
                    reduction_factor: 0.25,
                },
                BucketBaseline {
                    bucket: AgeBucket::LateYouth,
                    stat: BaselineStat {
                        unemployment_pct: 6.7,
                        underemployment_pct: 12.4,
                        neet_pct: 9.1,
                        avg_wage_php: 640.0,
                    },
                    reduction_factor: 0.15,
                },
            ],
        }
    }

    /// Replaces the entry for one bucket. Negative or non-finite factors become zero.
    pub fn with_entry(mut self, bucket: AgeBucket, stat: BaselineStat, reduction_factor: f64) -> Self {
        let reduction_factor = if reduction_factor.is_finite() && reduction_factor > 0.0 {
            reduction_factor
        } else {
            0.0
        };
        self.entries[bucket.index()] = BucketBaseline {
            bucket,
            stat,
            reduction_factor,
        };
        self
    }

    pub fn entry(&self, bucket: AgeBucket) -> &BucketBaseline {
        &self.entries[bucket.index()]
    }

    pub fn baseline(&self, bucket: AgeBucket) -> BaselineStat {
        self.entry(bucket).stat
    }

    pub fn reduction_factor(&self, bucket: AgeBucket) -> f64 {
        self.entry(bucket).reduction_factor
    }

    pub fn entries(&self) -> &[BucketBaseline] {
        &self.entries
    }
}

impl Default for StatBaselines {
    fn default() -> Self {
        Self::standard()
    }
}
