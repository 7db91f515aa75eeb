use crate::cli::ServeArgs;
use crate::infra::{build_generator, AppState};
use crate::routes::with_triage_routes;
use accident_triage::config::AppConfig;
use accident_triage::error::AppError;
use accident_triage::telemetry;
use accident_triage::workflows::triage::TriageEngine;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
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

    let generator = build_generator(&config.generator, false)?;
    let engine = Arc::new(TriageEngine::new(generator)?);

    let app = with_triage_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "accident triage service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
