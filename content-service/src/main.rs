use content_service::config::ContentConfig;
use content_service::services::init_metrics;
use content_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing; spans are exported only when a collector is configured
    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty());
    init_tracing("content-service", "info", otlp_endpoint.as_deref());

    let config = ContentConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    if let Err(e) = init_metrics() {
        tracing::warn!("Metrics recorder not installed: {}", e);
    }

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
