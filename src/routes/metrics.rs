//! Prometheus metrics endpoint
//!
//! Exposes application metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

fn register_metrics() {
    metrics::describe_counter!(
        "hsg_relay_requests_total",
        "Total number of chat requests by outcome"
    );
    metrics::describe_histogram!(
        "hsg_relay_request_duration_seconds",
        "Chat request duration in seconds, including the upstream call"
    );
}

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a chat request and its outcome
pub fn record_request(outcome: &str, duration_secs: f64) {
    metrics::counter!("hsg_relay_requests_total", "outcome" => outcome.to_string()).increment(1);
    metrics::histogram!("hsg_relay_request_duration_seconds", "outcome" => outcome.to_string())
        .record(duration_secs);
}
