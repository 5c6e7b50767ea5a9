//! Run configuration.
//!
//! A [`WalkConfig`] can be loaded from a JSON file; missing fields take their
//! defaults. The command line then overrides individual fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::graph::WalkBound;

/// Trace-length bound used when nothing else is configured.
pub const DEFAULT_MAX_TRACE_LEN: usize = 4096;

/// Which traversal a run performs from node 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkMode {
    /// Follow every edge, re-entering nodes freely; stops only at the bound.
    #[default]
    Literal,
    /// Visit each reachable node once; always terminates.
    Visited,
}

/// How an emitted trace is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Space-separated indices on one line.
    #[default]
    Plain,
    /// The full run report as JSON.
    Json,
}

/// Settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Traversal semantics.
    pub mode: WalkMode,
    /// Limits for literal walks. Ignored in visited mode.
    pub bound: WalkBound,
    /// Print the trace after the run.
    pub emit: bool,
    /// Format used when `emit` is set.
    pub format: OutputFormat,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            mode: WalkMode::default(),
            bound: WalkBound::trace_len(DEFAULT_MAX_TRACE_LEN),
            emit: false,
            format: OutputFormat::default(),
        }
    }
}

impl WalkConfig {
    /// Parses a config from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] if the text is not a valid config.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads a config from a JSON file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_json(&fs::read_to_string(path)?)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_literal_walks() {
        let config = WalkConfig::default();
        assert_eq!(config.mode, WalkMode::Literal);
        assert_eq!(config.bound.max_trace_len, Some(DEFAULT_MAX_TRACE_LEN));
        assert_eq!(config.bound.max_depth, None);
        assert!(!config.emit);
        assert_eq!(config.format, OutputFormat::Plain);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = WalkConfig::from_json(r#"{ "mode": "visited", "emit": true }"#).unwrap();
        assert_eq!(config.mode, WalkMode::Visited);
        assert!(config.emit);
        assert_eq!(config.bound, WalkConfig::default().bound);
    }

    #[test]
    fn bound_fields_parse() {
        let config = WalkConfig::from_json(
            r#"{ "bound": { "max_depth": 5, "max_trace_len": null }, "format": "json" }"#,
        )
        .unwrap();
        assert_eq!(config.bound, WalkBound::depth(5));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(matches!(
            WalkConfig::from_json(r#"{ "mode": "sideways" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            WalkConfig::load("/nonexistent/walktrace.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = WalkConfig {
            mode: WalkMode::Visited,
            bound: WalkBound::depth(3),
            emit: true,
            format: OutputFormat::Json,
        };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(WalkConfig::from_json(&text).unwrap(), config);
    }
}
