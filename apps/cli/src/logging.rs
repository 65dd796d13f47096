use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid. Lookups are quiet unless
/// something in the datasets is wrong.
const DEFAULT_FILTER: &str = "warn";

/// Output format of diagnostic logs, selected by `MT_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Anything other than `json` (any case) falls back to text.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the tracing subscriber on stderr so stdout carries only results.
/// `log` records from the library are forwarded through tracing-subscriber's
/// log bridge.
pub fn init_tracing() {
    let format = LogFormat::from_setting(std::env::var("MT_LOG_FORMAT").ok().as_deref());
    let filter = env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
