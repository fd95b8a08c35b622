use crate::cli::ServeArgs;
use crate::infra::{build_applicant_service, AppState};
use crate::routes::with_tracker_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use job_tracker::applicants::AdminAccess;
use job_tracker::config::AppConfig;
use job_tracker::error::AppError;
use job_tracker::jobs::JobCatalog;
use job_tracker::telemetry;
use std::fs::File;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(build_applicant_service());
    if let Some(path) = &config.tracker.seed_csv {
        let summary = service.import_csv(File::open(path)?)?;
        info!(
            path = %path.display(),
            imported = summary.imported,
            skipped = summary.skipped,
            "seeded applicant store"
        );
    }

    let admin = AdminAccess::new(config.tracker.admin_password.clone());
    let app = with_tracker_routes(service, Arc::new(JobCatalog::standard()), admin)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job application tracker ready");

    axum::serve(listener, app).await?;
    Ok(())
}
