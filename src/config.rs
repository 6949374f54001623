//! Configuration module for the BOM detector
//!
//! Loaded from a JSON document. Every field is optional; an empty
//! object yields the historical behavior (registration order, locale
//! fallback, no structured events).

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::rules::RuleOrder;

/// Detector configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DetectorConfig {
    /// Evaluation order of the encoding rules
    #[serde(default)]
    pub rule_order: RuleOrder,

    /// Encoding reported when no BOM matches (platform default if unset)
    #[serde(default)]
    pub fallback_encoding: Option<String>,

    /// Emit a structured event for every detection
    #[serde(default = "default_log_detections")]
    pub log_detections: bool,
}

fn default_log_detections() -> bool {
    false
}

impl DetectorConfig {
    /// Parse configuration from JSON bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config_str = std::str::from_utf8(bytes)?;
        Ok(serde_json::from_str(config_str)?)
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Set the rule evaluation order
    pub fn with_rule_order(mut self, order: RuleOrder) -> Self {
        self.rule_order = order;
        self
    }

    /// Override the fallback encoding
    pub fn with_fallback(mut self, encoding: &str) -> Self {
        self.fallback_encoding = Some(encoding.to_string());
        self
    }

    /// Enable structured detection events
    pub fn with_detection_log(mut self, enabled: bool) -> Self {
        self.log_detections = enabled;
        self
    }
}
