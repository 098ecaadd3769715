use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySubmissionRepository};
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hse_survey::config::AppConfig;
use hse_survey::error::AppError;
use hse_survey::survey::{SubmissionCsvImporter, SurveyService};
use hse_survey::telemetry;
use std::sync::atomic::Ordering;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemorySubmissionRepository::default());
    if let Some(path) = config.survey.import_csv.as_ref() {
        let submissions = SubmissionCsvImporter::from_path(path)?;
        let seeded = repository.seed(submissions);
        info!(path = %path.display(), seeded, "survey submissions seeded from export");
    }
    let survey_service = Arc::new(SurveyService::new(repository));

    let app = with_operational_routes(survey_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "hse survey service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
