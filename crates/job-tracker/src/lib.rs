//! Youth job-application tracker: applicant intake, a static job board, and the
//! age-bucketed labour statistics shown on the dashboard.

pub mod applicants;
pub mod config;
pub mod error;
pub mod jobs;
pub mod statistics;
pub mod telemetry;
