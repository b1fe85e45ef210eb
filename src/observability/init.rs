//! Tracing subscriber setup.

use super::exporter::{self, SCOPE_NAME};
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported on the trace resource.
pub const SERVICE_NAME: &str = "signbridge";

/// Installs the global subscriber exporting spans to the trace file.
///
/// `config.trace_level` is an `EnvFilter` directive (`debug`,
/// `signbridge::listing=trace`, ...); an unparsable directive falls back to
/// `info`. Observability is optional: if the data directory cannot be created
/// nothing is installed, and calling this again after a subscriber is set is a
/// no-op.
pub fn init_tracing(config: &Config) {
    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = exporter::create_tracer_provider(paths::trace_file(), resource);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME)));

    let _ = subscriber.try_init();
}
