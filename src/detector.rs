//! BOM Detector
//!
//! Maps the leading bytes of a file to an encoding name. Rules are
//! evaluated first-match-wins against the bytes actually read; when
//! none matches the configured fallback (or the platform default) is
//! reported.
//!
//! The detector is a plain value. `initialize` and `release` take
//! `&mut self`, so they cannot race with `detect`; share a detector
//! across threads with `Arc<BomDetector>`.

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};

use crate::config::DetectorConfig;
use crate::error::{DetectError, Result};
use crate::platform;
use crate::prefix::{Prefix, ReadOutcome};
use crate::rules::{BomSignature, EncodingRule, RuleRegistry};
use crate::telemetry::{self, DetectionEvent, DetectionEventType};

/// Result of a detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Reported encoding name
    pub encoding: Cow<'static, str>,
    /// Matched signature, `None` when the fallback was used
    pub signature: Option<BomSignature>,
    /// How much of the prefix was available
    pub read: ReadOutcome,
}

impl Detection {
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Check if no BOM matched
    pub fn is_fallback(&self) -> bool {
        self.signature.is_none()
    }

    /// Number of BOM bytes to skip before the text starts
    pub fn bom_len(&self) -> usize {
        self.signature.map(BomSignature::len).unwrap_or(0)
    }
}

/// Encoding detector driven by an ordered rule registry
#[derive(Debug, Clone)]
pub struct BomDetector {
    registry: RuleRegistry,
    fallback: String,
    log_detections: bool,
}

impl BomDetector {
    /// Create an initialized detector from configuration
    pub fn new(config: DetectorConfig) -> Self {
        let fallback = config
            .fallback_encoding
            .unwrap_or_else(platform::default_encoding);

        let mut detector = Self {
            registry: RuleRegistry::new(config.rule_order),
            fallback,
            log_detections: config.log_detections,
        };
        detector.initialize();
        detector
    }

    /// Clear and repopulate the rule registry. Idempotent.
    pub fn initialize(&mut self) {
        self.registry.initialize();
        info!(
            "BOM detector initialized with {} rules ({:?} order)",
            self.registry.len(),
            self.registry.order()
        );
    }

    /// Clear the rule registry; every detection reports the fallback until
    /// the next `initialize`.
    pub fn release(&mut self) {
        self.registry.release();
        info!("BOM detector released");
    }

    pub fn is_initialized(&self) -> bool {
        !self.registry.is_empty()
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[EncodingRule] {
        self.registry.rules()
    }

    /// Encoding reported when no rule matches
    pub fn fallback_encoding(&self) -> &str {
        &self.fallback
    }

    /// Detect the encoding of the file at `path`
    pub fn detect(&self, path: impl AsRef<Path>) -> Result<Detection> {
        let path = path.as_ref();

        let prefix = match Prefix::read_path(path) {
            Ok(prefix) => prefix,
            Err(e) => {
                if self.log_detections {
                    telemetry::read_failed(&path.display().to_string(), &e.to_string()).emit();
                }
                return Err(e);
            }
        };

        debug!(
            "Read {} prefix bytes from {}",
            prefix.len(),
            path.display()
        );

        Ok(self.classify(&prefix, Some(path)))
    }

    /// Detect the encoding of a stream, consuming at most its first four bytes
    pub fn detect_reader<R: Read>(&self, reader: &mut R) -> Result<Detection> {
        let prefix = Prefix::read_from(reader).map_err(DetectError::Stream)?;
        Ok(self.classify(&prefix, None))
    }

    /// Detect the encoding of an in-memory buffer
    pub fn detect_prefix(&self, bytes: &[u8]) -> Detection {
        self.classify(&Prefix::from_slice(bytes), None)
    }

    /// Best-effort detection: a read failure is logged and the fallback
    /// encoding is reported.
    pub fn detect_or_default(&self, path: impl AsRef<Path>) -> Detection {
        let path = path.as_ref();

        self.detect(path).unwrap_or_else(|e| {
            warn!(
                "Encoding detection failed, using {}: {}",
                self.fallback, e
            );
            self.fallback_detection(ReadOutcome::Partial { bytes_read: 0 })
        })
    }

    fn classify(&self, prefix: &Prefix, source: Option<&Path>) -> Detection {
        let detection = match self.registry.first_match(prefix.as_bytes()) {
            Some(rule) => Detection {
                encoding: Cow::Borrowed(rule.encoding_name()),
                signature: Some(rule.signature),
                read: prefix.outcome(),
            },
            None => self.fallback_detection(prefix.outcome()),
        };

        if self.log_detections {
            let event_type = if detection.is_fallback() {
                DetectionEventType::FallbackUsed
            } else {
                DetectionEventType::BomMatched
            };

            let mut event = DetectionEvent::new(event_type)
                .with_encoding(detection.encoding())
                .with_read(detection.read);
            if let Some(signature) = detection.signature {
                event = event.with_signature(signature);
            }
            if let Some(path) = source {
                event = event.with_source(&path.display().to_string());
            }
            event.emit();
        }

        detection
    }

    fn fallback_detection(&self, read: ReadOutcome) -> Detection {
        Detection {
            encoding: Cow::Owned(self.fallback.clone()),
            signature: None,
            read,
        }
    }
}

impl Default for BomDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}
