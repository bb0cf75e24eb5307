//! Logging setup for Lingo services.
//!
//! Log output is either human-readable (`pretty`, `compact`) or one JSON
//! object per line (`json`). Spans created with [`request_span!`] carry a
//! trace id so every line emitted during one analysis call can be grouped.
//!
//! HTTP and TLS plumbing crates are capped at `warn` unless `RUST_LOG`
//! overrides the whole filter.

use std::str::FromStr;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Transport crates whose debug output drowns the service's own events.
pub const NOISY_MODULES: &[&str] = &[
    "hyper",
    "hyper_util",
    "reqwest",
    "h2",
    "rustls",
    "tokio_util",
    "tower_http",
];

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

fn filter_directives(log_level: &str) -> String {
    let quiet = NOISY_MODULES
        .iter()
        .map(|module| format!("{}=warn", module))
        .collect::<Vec<_>>()
        .join(",");

    format!("{},{}", log_level.trim().to_lowercase(), quiet)
}

fn env_or_default_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(log_level)))
}

/// Install the global subscriber.
///
/// An unrecognized `log_format` falls back to `pretty`. Only the first call
/// installs a subscriber; later calls are no-ops apart from the startup event.
pub fn init_logging(log_level: &str, log_format: &str) {
    let format = log_format.parse().unwrap_or(LogFormat::Pretty);
    let registry = tracing_subscriber::registry().with(env_or_default_filter(log_level));

    let installed = match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_span_events(FmtSpan::CLOSE)
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact().with_target(false))
            .try_init(),
    };

    tracing::info!(
        level = %log_level,
        format = ?format,
        fresh = installed.is_ok(),
        "Logging ready"
    );
}

/// Fresh id attached to a request span.
pub fn generate_trace_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Open an `info` span tagged with a trace id and optional extra fields.
///
/// ```ignore
/// let span = request_span!("analyze_word", generate_trace_id(), model = %name);
/// async { /* ... */ }.instrument(span).await;
/// ```
#[macro_export]
macro_rules! request_span {
    ($name:expr, $trace_id:expr) => {
        tracing::info_span!($name, trace_id = %$trace_id)
    };
    ($name:expr, $trace_id:expr, $($field:tt)*) => {
        tracing::info_span!($name, trace_id = %$trace_id, $($field)*)
    };
}
