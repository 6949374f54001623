//! Telemetry Module for BOM detection
//!
//! Emits one structured JSON log line per detection through the `log`
//! facade, so whichever logger the host installs can collect them.

use log::{info, warn};
use serde::Serialize;

use crate::prefix::ReadOutcome;
use crate::rules::BomSignature;

/// Detection event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionEventType {
    /// A BOM rule matched
    BomMatched,
    /// No rule matched, fallback reported
    FallbackUsed,
    /// Prefix could not be read
    ReadFailed,
}

/// Detection event for logging
#[derive(Debug, Clone, Serialize)]
pub struct DetectionEvent {
    /// Event type
    pub event_type: DetectionEventType,
    /// Source of the bytes (file path)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Reported encoding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// Matched signature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<BomSignature>,
    /// Prefix read completeness
    #[serde(flatten)]
    pub read: Option<ReadOutcome>,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DetectionEvent {
    /// Create a new detection event
    pub fn new(event_type: DetectionEventType) -> Self {
        Self {
            event_type,
            source: None,
            encoding: None,
            signature: None,
            read: None,
            reason: None,
        }
    }

    /// Set source
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    /// Set encoding
    pub fn with_encoding(mut self, encoding: &str) -> Self {
        self.encoding = Some(encoding.to_string());
        self
    }

    /// Set matched signature
    pub fn with_signature(mut self, signature: BomSignature) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Set read outcome
    pub fn with_read(mut self, read: ReadOutcome) -> Self {
        self.read = Some(read);
        self
    }

    /// Set reason
    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    /// Log the event
    pub fn emit(&self) {
        match serde_json::to_string(self) {
            Ok(json) => match self.event_type {
                DetectionEventType::ReadFailed => warn!("[BOM-DETECT] {}", json),
                _ => info!("[BOM-DETECT] {}", json),
            },
            Err(e) => {
                warn!("Failed to serialize detection event: {}", e);
            }
        }
    }
}

/// Create a read failure event
pub fn read_failed(source: &str, reason: &str) -> DetectionEvent {
    DetectionEvent::new(DetectionEventType::ReadFailed)
        .with_source(source)
        .with_reason(reason)
}
