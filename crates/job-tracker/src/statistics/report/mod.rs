mod summary;
pub mod views;

pub use views::{BucketStatRow, MetricSeries, SeriesPoint, StatMetric, StatsDashboard};
