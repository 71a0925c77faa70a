//! Tracing subscriber setup.

use super::file_writer::RotatingFileWriter;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "staff-portal.log";

const DEFAULT_TRACE_LEVEL: &str = "info";

/// Builds the filter from a `trace_level` directive, falling back to `info`
/// when the directive does not parse.
#[must_use]
pub fn env_filter(trace_level: Option<&str>) -> EnvFilter {
    let directive = trace_level.unwrap_or(DEFAULT_TRACE_LEVEL);
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL))
}

/// Installs the global subscriber writing to `<data dir>/staff-portal.log`.
///
/// Logging is optional: if the data directory cannot be created, or a
/// subscriber is already installed, this returns without doing anything.
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = RotatingFileWriter::new(data_dir.join(LOG_FILE_NAME));
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE);

    let installed = tracing_subscriber::registry()
        .with(env_filter(config.trace_level.as_deref()))
        .with(layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            trace_level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL),
            "tracing initialized"
        );
    }
}
