//! File-backed span exporter and the tracer provider built on it.
//!
//! Plugins run sandboxed without network access to a collector, so spans are
//! written as OTLP JSON lines to a rotating file instead.

use super::otlp_json::OtlpJsonEncoder;
use super::rotating_file::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Instrumentation scope name written into every batch.
pub const SCOPE_NAME: &str = "aecintel";

#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    encoder: OtlpJsonEncoder,
    is_shutdown: AtomicBool,
}

impl SpanExporter for FileSpanExporter {
    /// Writes the batch as one JSON line.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let line = self.encoder.encode_batch(&batch).to_string();
        let result = self
            .file
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()));
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// The resource is fixed at construction.
    fn set_resource(&mut self, _resource: &Resource) {}
}

/// Builds a provider that exports each finished span immediately to
/// `file_path`, rotating the file at `max_bytes`.
#[must_use]
pub fn create_tracer_provider(
    file_path: PathBuf,
    max_bytes: u64,
    resource: Resource,
) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(file_path, max_bytes),
        encoder: OtlpJsonEncoder::new(resource.clone(), SCOPE_NAME),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
