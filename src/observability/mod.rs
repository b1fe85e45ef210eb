//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → OtlpFileExporter → RotatingFile
//! ```
//!
//! Spans land in `/host/.local/share/zellij/signbridge/signbridge-otlp.json`
//! as one OTLP JSON document per line. The file rotates at 10 MiB and keeps
//! three backups.
//!
//! # Usage
//!
//! ```no_run
//! use signbridge::observability::init_tracing;
//! use signbridge::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```
//!
//! # Modules
//!
//! - `init`: subscriber setup from [`Config::trace_level`](crate::Config)
//! - `exporter`: `SpanExporter` producing OTLP JSON
//! - `file_writer`: size-rotated line writer

mod exporter;
mod file_writer;
mod init;

pub use exporter::{create_tracer_provider, otlp_document, OtlpFileExporter};
pub use file_writer::RotatingFile;
pub use init::{init_tracing, SERVICE_NAME};
