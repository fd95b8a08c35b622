//! Age-group classification and the applicant-driven adjustment of the
//! displayed youth labour statistics.
//!
//! Unemployment and NEET figures are lowered by a fixed amount per applicant
//! counted in a bucket and floored at zero. Underemployment and wage pass
//! through unchanged. The rule is a display heuristic, not a statistical model.

mod adjuster;
mod age;
mod baseline;
pub mod report;

pub use adjuster::{BucketCounts, DerivedStat, DerivedStats, StatAdjuster, NEET_REDUCTION_WEIGHT};
pub use age::{AgeBucket, UnknownAgeBucket};
pub use baseline::{BaselineStat, BucketBaseline, StatBaselines};
pub use report::StatsDashboard;
