use crate::infra::build_applicant_service;
use clap::Args;
use job_tracker::error::AppError;
use job_tracker::jobs::{JobCatalog, DEFAULT_RECOMMENDATION_LIMIT};
use job_tracker::statistics::{AgeBucket, StatsDashboard};
use std::fmt::Write as _;
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct StatsArgs {
    /// Applicant CSV snapshot to tally ages from
    #[arg(long)]
    pub(crate) applicants_csv: Option<PathBuf>,
    /// Override the 18-21 applicant count
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) count_18_21: Option<i64>,
    /// Override the 22-25 applicant count
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) count_22_25: Option<i64>,
    /// Override the 26-30 applicant count
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) count_26_30: Option<i64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct JobsArgs {
    /// Preferred job role to match against the job board
    #[arg(long)]
    pub(crate) interest: Option<String>,
    /// Maximum number of recommendations
    #[arg(long, default_value_t = DEFAULT_RECOMMENDATION_LIMIT)]
    pub(crate) limit: usize,
}

pub(crate) fn run_stats(args: StatsArgs) -> Result<(), AppError> {
    let StatsArgs {
        applicants_csv,
        count_18_21,
        count_22_25,
        count_26_30,
    } = args;

    let service = build_applicant_service();
    let source = match &applicants_csv {
        Some(path) => {
            let summary = service.import_csv(File::open(path)?)?;
            format!(
                "{} ({} applicants, {} rows skipped)",
                path.display(),
                summary.imported,
                summary.skipped
            )
        }
        None => "no applicant data".to_string(),
    };

    let mut tally = service.tally()?;
    let overrides = [
        (AgeBucket::EarlyYouth, count_18_21),
        (AgeBucket::MidYouth, count_22_25),
        (AgeBucket::LateYouth, count_26_30),
    ];
    for (bucket, count) in overrides {
        if let Some(count) = count {
            tally.counts.set(bucket, count);
        }
    }

    let dashboard = StatsDashboard::build(service.adjuster(), tally.counts, tally.unclassified);
    print!("{}", render_stats(&dashboard, &source));
    Ok(())
}

pub(crate) fn render_stats(dashboard: &StatsDashboard, source: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Youth labour statistics");
    let _ = writeln!(out, "Data source: {source}");
    let _ = writeln!(
        out,
        "Applicants: {} total, {} unclassified",
        dashboard.total_applicants, dashboard.unclassified_applicants
    );

    let _ = writeln!(
        out,
        "\n{:<7} {:>10} {:>13} {:>16} {:>8} {:>10}",
        "Age", "Applicants", "Unemployment", "Underemployment", "NEET", "Wage (PHP)"
    );
    for row in &dashboard.rows {
        let _ = writeln!(
            out,
            "{:<7} {:>10} {:>12.2}% {:>15.2}% {:>7.2}% {:>10.2}",
            row.bucket_label,
            row.applicants,
            row.derived.unemployment_pct,
            row.derived.underemployment_pct,
            row.derived.neet_pct,
            row.derived.avg_wage_php
        );
    }

    out
}

pub(crate) fn run_jobs(args: JobsArgs) {
    let catalog = JobCatalog::standard();
    print!("{}", render_jobs(&catalog, args.interest.as_deref(), args.limit));
}

pub(crate) fn render_jobs(catalog: &JobCatalog, interest: Option<&str>, limit: usize) -> String {
    let mut out = String::new();

    match interest {
        None => {
            let _ = writeln!(out, "Job listings");
            for listing in catalog.listings() {
                let _ = writeln!(
                    out,
                    "- {} | {} | {} ({})",
                    listing.title,
                    listing.employer,
                    listing.location,
                    listing.region.label()
                );
            }
        }
        Some(interest) => {
            let recommendations = catalog.recommend(interest, limit);
            if recommendations.is_empty() {
                let _ = writeln!(out, "No listings match '{interest}'");
            } else {
                let _ = writeln!(out, "Recommended for '{interest}'");
                for rec in recommendations {
                    let _ = writeln!(
                        out,
                        "- {} at {} (matched: {})",
                        rec.title,
                        rec.employer,
                        rec.matched_terms.join(", ")
                    );
                }
            }
        }
    }

    out
}
