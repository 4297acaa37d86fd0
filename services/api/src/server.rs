use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_certificate_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use gsp_cert::certificate::{BackgroundAssets, CertificateRenderer};
use gsp_cert::config::AppConfig;
use gsp_cert::error::AppError;
use gsp_cert::telemetry;
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

    let renderer = Arc::new(CertificateRenderer::new(BackgroundAssets::new(
        config.assets.dir.clone(),
    )));

    let app = with_certificate_routes(renderer)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, asset_dir = %config.assets.dir.display(), "certificate renderer ready");

    axum::serve(listener, app).await?;
    Ok(())
}
