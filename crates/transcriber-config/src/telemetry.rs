use serde::Deserialize;

/// Logging configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Output format for log lines
    #[serde(default)]
    pub format: LogFormat,
    /// Filter directive used when none is given on the command line
    #[serde(default)]
    pub log_filter: Option<String>,
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// One JSON object per line
    Json,
}
