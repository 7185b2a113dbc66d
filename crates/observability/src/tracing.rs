//! Tracing/logging initialization.
//!
//! The filter comes from `RUST_LOG` (default `info`) and the output format from
//! `ROSEKEEP_LOG_FORMAT` (`json`, `pretty` or `compact`; default `json`).

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "ROSEKEEP_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, with timestamps.
    #[default]
    Json,
    /// Multi-line, human-oriented output.
    Pretty,
    /// Single-line text output.
    Compact,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to [`LogFormat::Json`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "compact" | "text" => LogFormat::Compact,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    /// Build from raw variable values; blank values count as unset.
    pub fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = format.as_deref().map(LogFormat::parse).unwrap_or_default();
        Self { filter, format }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). An unparsable
/// filter falls back to `info`.
pub fn init_with(config: &LogConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info_json() {
        let config = LogConfig::from_vars(None, None);
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn blank_filter_counts_as_unset() {
        let config = LogConfig::from_vars(Some("  ".to_string()), None);
        assert_eq!(config.filter, "info");
    }

    #[test]
    fn reads_filter_and_format() {
        let config = LogConfig::from_vars(
            Some("rosekeep_inventory=trace".to_string()),
            Some("Pretty".to_string()),
        );
        assert_eq!(config.filter, "rosekeep_inventory=trace");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn format_names() {
        assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("text"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Json);
    }

    #[test]
    fn init_is_idempotent() {
        let config = LogConfig::from_vars(Some("not a [valid filter".to_string()), None);
        init_with(&config);
        init_with(&LogConfig::default());
    }
}
