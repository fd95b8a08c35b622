use super::super::age::AgeBucket;
use super::super::adjuster::{BucketCounts, DerivedStat};
use super::super::baseline::BaselineStat;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatMetric {
    Unemployment,
    Underemployment,
    Neet,
    AverageWage,
}

impl StatMetric {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Unemployment,
            Self::Underemployment,
            Self::Neet,
            Self::AverageWage,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unemployment => "Unemployment Rate (%)",
            Self::Underemployment => "Underemployment Rate (%)",
            Self::Neet => "NEET Rate (%)",
            Self::AverageWage => "Average Daily Wage (PHP)",
        }
    }

    pub fn value_of(self, stat: &DerivedStat) -> f64 {
        match self {
            Self::Unemployment => stat.unemployment_pct,
            Self::Underemployment => stat.underemployment_pct,
            Self::Neet => stat.neet_pct,
            Self::AverageWage => stat.avg_wage_php,
        }
    }
}

/// One table row per bucket.
#[derive(Debug, Clone, Serialize)]
pub struct BucketStatRow {
    pub bucket: AgeBucket,
    pub bucket_label: &'static str,
    pub applicants: u64,
    pub reduction_factor: f64,
    pub baseline: BaselineStat,
    pub derived: DerivedStat,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesPoint {
    pub bucket_label: &'static str,
    pub value: f64,
}

/// Chart series for one metric across the three buckets.
#[derive(Debug, Clone, Serialize)]
pub struct MetricSeries {
    pub metric: StatMetric,
    pub metric_label: &'static str,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsDashboard {
    pub total_applicants: usize,
    pub unclassified_applicants: usize,
    pub counts: BucketCounts,
    pub rows: Vec<BucketStatRow>,
    pub series: Vec<MetricSeries>,
}
