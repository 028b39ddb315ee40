//! Logging setup for the transcriber
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a `fmt`
//! layer writing to stderr, so stdout stays free for transcripts

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};
use transcriber_config::{LogFormat, TelemetryConfig};

/// Filter used when neither the caller nor the config supplies a valid one
const FALLBACK_FILTER: &str = "warn";

/// Initialize logging from configuration
///
/// `log_filter` takes precedence over `telemetry.log_filter`. An invalid
/// directive falls back to `warn` rather than failing startup.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &TelemetryConfig, log_filter: Option<&str>) -> anyhow::Result<()> {
    let filter = build_filter(log_filter.or(config.log_filter.as_deref()));

    let fmt_layer = match config.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(false)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(())
}

fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_FILTER))
}
