//! BOM Encoding Detector
//!
//! Detects the character encoding of a text file from the byte-order-mark
//! in its first four bytes. Files without a recognizable mark report the
//! platform default encoding (or a configured fallback).
//!
//! ```no_run
//! use bom_detect::BomDetector;
//!
//! let detector = BomDetector::default();
//! let detection = detector.detect("lyrics.lrc")?;
//! println!("{} (skip {} bytes)", detection.encoding(), detection.bom_len());
//! # Ok::<(), bom_detect::DetectError>(())
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod platform;
pub mod prefix;
pub mod rules;
pub mod telemetry;

pub use config::DetectorConfig;
pub use detector::{BomDetector, Detection};
pub use error::{ConfigError, DetectError};
pub use prefix::{Prefix, ReadOutcome};
pub use rules::{BomSignature, EncodingRule, RuleOrder, RuleRegistry};
