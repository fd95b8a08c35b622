use job_tracker::applicants::{ApplicantService, InMemoryApplicantRepository};
use job_tracker::statistics::StatAdjuster;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type TrackerService = ApplicantService<InMemoryApplicantRepository>;

/// Fresh in-memory store wired to the standard baselines.
pub(crate) fn build_applicant_service() -> TrackerService {
    ApplicantService::new(
        Arc::new(InMemoryApplicantRepository::default()),
        Arc::new(StatAdjuster::default()),
    )
}
