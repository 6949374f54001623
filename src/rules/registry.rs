//! Rule Registry
//!
//! Ordered list of encoding rules evaluated first-match-wins.
//! UTF-16LE (`FF FE`) shadows both UTF-32LE (`FF FE 00 00`) and the
//! UNICODE alias under registration order; `RuleOrder::LongestFirst`
//! lets the 4-byte UTF-32LE mark win instead.

use log::debug;
use serde::{Deserialize, Serialize};

use super::signature::BomSignature;

/// Rules in registration order
pub const DEFAULT_RULES: [BomSignature; 6] = [
    BomSignature::Utf8,
    BomSignature::Utf16Be,
    BomSignature::Utf16Le,
    BomSignature::Utf32Be,
    BomSignature::Utf32Le,
    BomSignature::Unicode,
];

/// Order in which registered rules are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOrder {
    /// Strict registration order (UTF-32LE and UNICODE never fire)
    #[default]
    Registration,
    /// Longest pattern first; ties keep registration order
    LongestFirst,
}

/// A single detection rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingRule {
    /// Position in the registration sequence
    pub order: usize,
    /// Signature tested by this rule
    pub signature: BomSignature,
}

impl EncodingRule {
    /// Encoding name reported by this rule
    pub fn encoding_name(&self) -> &'static str {
        self.signature.encoding_name()
    }
}

/// Ordered set of encoding rules
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<EncodingRule>,
    order: RuleOrder,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new(order: RuleOrder) -> Self {
        Self {
            rules: Vec::with_capacity(DEFAULT_RULES.len()),
            order,
        }
    }

    /// Clear and repopulate with the fixed rule set
    pub fn initialize(&mut self) {
        self.rules.clear();
        self.rules.extend(
            DEFAULT_RULES
                .iter()
                .enumerate()
                .map(|(order, &signature)| EncodingRule { order, signature }),
        );

        if self.order == RuleOrder::LongestFirst {
            // sort_by_key is stable, so UTF-16LE stays ahead of UNICODE
            self.rules
                .sort_by_key(|rule| std::cmp::Reverse(rule.signature.len()));
        }
    }

    /// Drop every rule
    pub fn release(&mut self) {
        self.rules.clear();
    }

    /// Return the first rule whose signature matches `bytes`
    pub fn first_match(&self, bytes: &[u8]) -> Option<&EncodingRule> {
        let matched = self.rules.iter().find(|rule| rule.signature.matches(bytes));

        if let Some(rule) = matched {
            debug!(
                "Rule #{} ({}) matched {:02X?}",
                rule.order, rule.signature, bytes
            );
        }

        matched
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[EncodingRule] {
        &self.rules
    }

    /// Evaluation order policy
    pub fn order(&self) -> RuleOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(order: RuleOrder) -> RuleRegistry {
        let mut registry = RuleRegistry::new(order);
        registry.initialize();
        registry
    }

    fn matched_name(registry: &RuleRegistry, bytes: &[u8]) -> Option<&'static str> {
        registry.first_match(bytes).map(|r| r.encoding_name())
    }

    #[test]
    fn test_registration_order() {
        let registry = registry(RuleOrder::Registration);
        let signatures: Vec<_> = registry.rules().iter().map(|r| r.signature).collect();
        assert_eq!(signatures, DEFAULT_RULES);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut registry = registry(RuleOrder::Registration);
        let once = registry.rules().to_vec();

        registry.initialize();
        assert_eq!(registry.rules(), once.as_slice());
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_utf32le_shadowed_in_registration_order() {
        let registry = registry(RuleOrder::Registration);
        assert_eq!(
            matched_name(&registry, &[0xFF, 0xFE, 0x00, 0x00]),
            Some("UTF-16LE")
        );
    }

    #[test]
    fn test_longest_first_reaches_utf32le() {
        let registry = registry(RuleOrder::LongestFirst);
        assert_eq!(
            matched_name(&registry, &[0xFF, 0xFE, 0x00, 0x00]),
            Some("UTF-32LE")
        );
        // 2-byte mark followed by text is still UTF-16LE, never UNICODE
        assert_eq!(
            matched_name(&registry, &[0xFF, 0xFE, 0x41, 0x00]),
            Some("UTF-16LE")
        );
    }

    #[test]
    fn test_longest_first_order() {
        let registry = registry(RuleOrder::LongestFirst);
        let signatures: Vec<_> = registry.rules().iter().map(|r| r.signature).collect();
        assert_eq!(
            signatures,
            vec![
                BomSignature::Utf32Be,
                BomSignature::Utf32Le,
                BomSignature::Utf8,
                BomSignature::Utf16Be,
                BomSignature::Utf16Le,
                BomSignature::Unicode,
            ]
        );
    }

    #[test]
    fn test_release_empties_registry() {
        let mut registry = registry(RuleOrder::Registration);
        registry.release();

        assert!(registry.is_empty());
        assert!(registry.first_match(&[0xEF, 0xBB, 0xBF, 0x41]).is_none());
    }

    #[test]
    fn test_no_match() {
        let registry = registry(RuleOrder::Registration);
        assert!(registry.first_match(b"hell").is_none());
        assert!(registry.first_match(&[]).is_none());
    }
}
