use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, InMemoryDiagnosticRepository};
use crate::routes::with_diagnostic_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use datapay_diagnostic::config::AppConfig;
use datapay_diagnostic::diagnostic::DiagnosticService;
use datapay_diagnostic::error::AppError;
use datapay_diagnostic::telemetry;
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
    if let Some(catalog) = args.catalog.take() {
        config.diagnostic.catalog_path = Some(catalog);
    }

    telemetry::init(&config.telemetry)?;

    let catalog = load_catalog(config.diagnostic.catalog_path.as_deref())?;
    info!(
        version = catalog.version(),
        questions = catalog.len(),
        "questionnaire loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryDiagnosticRepository::default());
    let diagnostic_service = Arc::new(DiagnosticService::new(repository, catalog));

    let app = with_diagnostic_routes(diagnostic_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "diagnostic service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
