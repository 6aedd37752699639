use crate::cli::ServeArgs;
use crate::infra::{
    default_assessment_config, AppState, InMemoryAlertPublisher, InMemoryAssessmentRepository,
};
use crate::routes::with_advisory_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use career_ai::config::AppConfig;
use career_ai::error::AppError;
use career_ai::telemetry;
use career_ai::workflows::advisory::CareerAssessmentService;
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

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let assessment_config = default_assessment_config();
    let assessment_service = Arc::new(CareerAssessmentService::new(
        repository,
        alerts,
        assessment_config,
    ));

    let app = with_advisory_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "career intelligence service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
