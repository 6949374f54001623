//! Encoding rules for BOM detection
//!
//! This module provides:
//! - BOM signatures and their canonical encoding names
//! - The ordered, first-match-wins rule registry

pub mod signature;
pub mod registry;

pub use signature::{BomSignature, MAX_SIGNATURE_LEN};
pub use registry::{EncodingRule, RuleOrder, RuleRegistry, DEFAULT_RULES};
