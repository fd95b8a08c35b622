use super::super::adjuster::{BucketCounts, StatAdjuster};
use super::views::{BucketStatRow, MetricSeries, SeriesPoint, StatMetric, StatsDashboard};

impl StatsDashboard {
    /// Recomputes the derived figures for `counts`; nothing is cached between calls.
    pub fn build(adjuster: &StatAdjuster, counts: BucketCounts, unclassified: usize) -> Self {
        let derived = adjuster.recompute(&counts);

        let rows: Vec<BucketStatRow> = derived
            .iter()
            .map(|(bucket, stat)| {
                let entry = adjuster.baselines().entry(bucket);
                BucketStatRow {
                    bucket,
                    bucket_label: bucket.label(),
                    applicants: counts.get(bucket),
                    reduction_factor: entry.reduction_factor,
                    baseline: entry.stat,
                    derived: *stat,
                }
            })
            .collect();

        let series = StatMetric::ordered()
            .into_iter()
            .map(|metric| MetricSeries {
                metric,
                metric_label: metric.label(),
                points: rows
                    .iter()
                    .map(|row| SeriesPoint {
                        bucket_label: row.bucket_label,
                        value: metric.value_of(&row.derived),
                    })
                    .collect(),
            })
            .collect();

        let classified = usize::try_from(counts.total()).unwrap_or(usize::MAX);

        Self {
            total_applicants: classified.saturating_add(unclassified),
            unclassified_applicants: unclassified,
            counts,
            rows,
            series,
        }
    }

    pub fn row(&self, label: &str) -> Option<&BucketStatRow> {
        self.rows.iter().find(|row| row.bucket_label == label)
    }

    pub fn series_for(&self, metric: StatMetric) -> Option<&MetricSeries> {
        self.series.iter().find(|series| series.metric == metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::AgeBucket;

    #[test]
    fn dashboard_has_one_series_per_metric() {
        let counts = BucketCounts::new().with(AgeBucket::MidYouth, 4);
        let dashboard = StatsDashboard::build(&StatAdjuster::default(), counts, 2);

        assert_eq!(dashboard.rows.len(), 3);
        assert_eq!(dashboard.series.len(), 4);
        assert!(dashboard.series.iter().all(|series| series.points.len() == 3));
        assert_eq!(dashboard.total_applicants, 6);
        assert_eq!(dashboard.unclassified_applicants, 2);

        let row = dashboard.row("22-25").expect("mid youth row");
        assert_eq!(row.applicants, 4);
        assert!((row.derived.unemployment_pct - 8.8).abs() < 1e-9);
    }

    #[test]
    fn wage_series_matches_baseline() {
        let counts = BucketCounts::new().with(AgeBucket::EarlyYouth, 50);
        let dashboard = StatsDashboard::build(&StatAdjuster::default(), counts, 0);
        let wages = dashboard
            .series_for(StatMetric::AverageWage)
            .expect("wage series");
        let values: Vec<f64> = wages.points.iter().map(|point| point.value).collect();
        assert_eq!(values, vec![410.0, 520.0, 640.0]);
    }
}
