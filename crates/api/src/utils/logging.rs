//! Tracing setup for the server binary

use tracing_subscriber::EnvFilter;

/// Env var selecting the output format (`json` or anything else for text).
pub const LOG_FORMAT_VAR: &str = "RHAI_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    /// Format named by `RHAI_LOG_FORMAT`; compact when unset.
    pub fn from_env() -> Self {
        Self::parse(std::env::var(LOG_FORMAT_VAR).ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(format) if format.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Compact,
        }
    }
}

/// Install the global subscriber.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Calling this twice is
/// harmless; the second install is ignored.
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
