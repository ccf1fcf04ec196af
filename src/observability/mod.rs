//! OpenTelemetry tracing exported to a local OTLP/JSON file.
//!
//! `tracing` spans and events from the whole crate flow through
//! `tracing-subscriber` into an OpenTelemetry tracer provider whose exporter
//! appends one OTLP document per batch to a size-rotated file.

mod exporter;
mod init;
mod otlp_json;
mod rotating_file;

pub use init::init_tracing;
pub use rotating_file::{RotatingFile, MAX_BACKUP_FILES};
