//! Metrics collection and Prometheus export.
//!
//! Installs the Prometheus recorder behind the `metrics` facade and provides
//! the recording helpers used by the generation path.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the metrics recorder.
///
/// Call once at startup before any metrics are recorded. Later calls are no-ops.
pub fn init_metrics() -> Result<(), BuildError> {
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    let _ = METRICS_HANDLE.set(handle);
    Ok(())
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

/// Record one provider call and its outcome.
pub fn record_generation(provider: &str, model: &str, status: &'static str, latency: Duration) {
    let labels = [
        ("provider", provider.to_string()),
        ("model", model.to_string()),
    ];

    counter!(
        "content_generations_total",
        "provider" => provider.to_string(),
        "status" => status
    )
    .increment(1);
    histogram!("content_provider_latency_seconds", &labels).record(latency.as_secs_f64());
}

/// Record token usage reported by the provider.
pub fn record_tokens(model: &str, input_tokens: u32, output_tokens: u32) {
    counter!("content_tokens_total", "model" => model.to_string(), "type" => "input")
        .increment(u64::from(input_tokens));
    counter!("content_tokens_total", "model" => model.to_string(), "type" => "output")
        .increment(u64::from(output_tokens));
}
