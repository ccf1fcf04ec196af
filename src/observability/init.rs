//! Tracing initialization and subscriber setup.

use super::exporter::{self, SCOPE_NAME};
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Installs the global subscriber: `EnvFilter` from `config.trace_level`, then
/// an OpenTelemetry layer exporting to the rotating trace file.
///
/// The trace file is `/host/.local/share/zellij/aecintel/aecintel-otlp.json`.
/// Nothing is installed if the directory cannot be created. Calling this more
/// than once is harmless; only the first subscriber sticks.
pub fn init_tracing(config: &Config) {
    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = exporter::create_tracer_provider(
        paths::trace_file(),
        config.trace_file_max_mb.saturating_mul(BYTES_PER_MB),
        resource,
    );

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
