use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::app_router;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use valida_cpf::config::AppConfig;
use valida_cpf::error::AppError;
use valida_cpf::telemetry;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    if config.is_unprotected_production() {
        warn!("APP_FUNCTION_KEY is unset; the validation route accepts anonymous requests");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = app_router(app_state, config.auth.clone()).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        function_key = config.auth.function_key.is_some(),
        "CPF validation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
