//! Logging setup on top of `tracing-subscriber`.
//!
//! `RUST_LOG` wins over the configured level when it is set.

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `info` or `info,calc=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Filter directives to use, given the value of `RUST_LOG` (if any).
    #[must_use]
    pub fn directives(&self, rust_log: Option<&str>) -> String {
        match rust_log.map(str::trim) {
            Some(env) if !env.is_empty() => env.to_owned(),
            _ => self.level.clone(),
        }
    }

    /// Build the `EnvFilter` for this config.
    ///
    /// # Errors
    /// Returns an error if the directives cannot be parsed.
    pub fn env_filter(&self) -> anyhow::Result<EnvFilter> {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let directives = self.directives(rust_log.as_deref());
        EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid log filter directives '{directives}'"))
    }
}

/// Install the global fmt subscriber (stderr).
///
/// # Errors
/// Returns an error if the filter is invalid or a global subscriber is already set.
pub fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let filter = cfg.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!(format = ?cfg.format, "logging initialized");
    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn default_is_info_text() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.level, "info");
        assert_eq!(cfg.format, LogFormat::Text);
    }

    #[test]
    fn rust_log_overrides_configured_level() {
        let cfg = LoggingConfig {
            level: "warn".to_owned(),
            format: LogFormat::Json,
        };
        assert_eq!(cfg.directives(None), "warn");
        assert_eq!(cfg.directives(Some("  ")), "warn");
        assert_eq!(cfg.directives(Some("calc=trace")), "calc=trace");
    }

    #[test]
    fn format_deserializes_snake_case() {
        let cfg: LoggingConfig =
            serde_json::from_value(serde_json::json!({ "format": "json" })).unwrap();
        assert_eq!(cfg.format, LogFormat::Json);
        assert_eq!(cfg.level, "info");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<LoggingConfig, _> =
            serde_json::from_value(serde_json::json!({ "colour": true }));
        assert!(result.is_err());
    }
}
