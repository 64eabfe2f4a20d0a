//! Red-flag extraction over normalized text
//!
//! The extractor tests every trigger phrase of every applicable rule for
//! containment in the normalized view, then re-scans the original text
//! case-insensitively to collect evidence with its original casing and
//! spacing. Containment runs as a single Aho-Corasick sweep across the
//! whole catalog.

use aho_corasick::AhoCorasick;
use fraudsight_core::{Error, ExtractedMetadata, Language, NormalizedText, RedFlag, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::catalog::RuleCatalog;
use crate::metadata::MetadataSweeper;

/// Output of one extraction pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanFindings {
    /// Fired flags in catalog declaration order
    pub flags: Vec<RedFlag>,

    /// Contact and channel artifacts
    pub metadata: ExtractedMetadata,
}

/// Rule-based red-flag extractor
///
/// Construction compiles the catalog's phrases once; extraction itself is a
/// pure function over its input and may run from any number of concurrent
/// callers.
pub struct RedFlagExtractor {
    catalog: RuleCatalog,
    phrases: AhoCorasick,
    rule_phrase_ranges: Vec<std::ops::Range<usize>>,
    evidence_patterns: Vec<Regex>,
    sweeper: MetadataSweeper,
}

impl RedFlagExtractor {
    /// Compile an extractor for the given catalog
    pub fn new(catalog: RuleCatalog) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut rule_phrase_ranges = Vec::with_capacity(catalog.len());
        let mut evidence_patterns = Vec::new();

        for rule in catalog.rules() {
            let start = patterns.len();
            for phrase in &rule.trigger_phrases {
                patterns.push(phrase.to_lowercase());
                evidence_patterns.push(evidence_pattern(phrase)?);
            }
            rule_phrase_ranges.push(start..patterns.len());
        }

        let phrases = AhoCorasick::builder()
            .build(&patterns)
            .map_err(|e| Error::catalog(format!("failed to build phrase matcher: {}", e)))?;

        Ok(Self {
            catalog,
            phrases,
            rule_phrase_ranges,
            evidence_patterns,
            sweeper: MetadataSweeper::new()?,
        })
    }

    /// Extractor over the built-in default catalog
    pub fn builtin() -> Result<Self> {
        Self::new(RuleCatalog::builtin())
    }

    /// The catalog this extractor was compiled from
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Scan `text` for red flags and artifacts
    ///
    /// Total over all inputs: degenerate text yields empty findings, never
    /// an error. A rule fires at most once per scan and contributes its
    /// weight once; evidence aggregates every matched occurrence across the
    /// rule's phrases, deduplicated in first-occurrence order.
    pub fn extract(&self, text: &str, language: Language) -> ScanFindings {
        let norm = NormalizedText::new(text);

        let mut contained = vec![false; self.evidence_patterns.len()];
        for m in self.phrases.find_overlapping_iter(norm.normalized()) {
            contained[m.pattern().as_usize()] = true;
        }

        let mut flags = Vec::new();
        for (rule_idx, rule) in self.catalog.rules().iter().enumerate() {
            if !rule.language.applies_to(language) {
                continue;
            }

            let mut evidence: Vec<String> = Vec::new();
            for phrase_idx in self.rule_phrase_ranges[rule_idx].clone() {
                if !contained[phrase_idx] {
                    continue;
                }
                for m in self.evidence_patterns[phrase_idx].find_iter(norm.original()) {
                    if !evidence.iter().any(|e| e == m.as_str()) {
                        evidence.push(m.as_str().to_string());
                    }
                }
            }

            if !evidence.is_empty() {
                tracing::debug!(
                    rule = %rule.code,
                    occurrences = evidence.len(),
                    weight = rule.weight,
                    "rule fired"
                );
                flags.push(RedFlag::new(
                    rule.code.clone(),
                    rule.weight,
                    rule.severity,
                    evidence,
                ));
            }
        }

        let metadata = self.sweeper.sweep(&norm);
        tracing::debug!(flags = flags.len(), "red flag extraction complete");

        ScanFindings { flags, metadata }
    }
}

/// Case-insensitive literal pattern for a phrase, with each space matching
/// any whitespace run so occurrences that span line breaks in the original
/// are still recovered after whitespace collapse
fn evidence_pattern(phrase: &str) -> Result<Regex> {
    let escaped = regex::escape(phrase).replace(' ', r"\s+");
    RegexBuilder::new(&escaped)
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::catalog(format!("failed to compile evidence pattern: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraudsight_core::Severity;
    use proptest::prelude::*;

    fn extractor() -> RedFlagExtractor {
        RedFlagExtractor::builtin().unwrap()
    }

    fn codes(findings: &ScanFindings) -> Vec<&str> {
        findings.flags.iter().map(|f| f.code.as_str()).collect()
    }

    #[test]
    fn test_known_scam_text_fires_expected_rules() {
        let text = "GUARANTEED 200% returns! WhatsApp +91-9876543210, pay via UPI now";
        let findings = extractor().extract(text, Language::En);

        let fired = codes(&findings);
        assert!(fired.contains(&"GUARANTEED_RETURNS"));
        assert!(fired.contains(&"UNREALISTIC_RETURNS"));
        assert!(fired.contains(&"UNOFFICIAL_CHANNELS"));
        assert!(fired.contains(&"SUSPICIOUS_PAYMENT"));

        let base: u32 = findings.flags.iter().map(|f| u32::from(f.weight)).sum();
        assert!(base >= 85);

        assert!(findings
            .metadata
            .phones
            .contains(&"+91-9876543210".to_string()));
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let findings = extractor().extract("", Language::En);
        assert!(findings.flags.is_empty());
        assert!(findings.metadata.is_empty());

        let findings = extractor().extract("   \n\t ", Language::En);
        assert!(findings.flags.is_empty());
        assert!(findings.metadata.is_empty());
    }

    #[test]
    fn test_rule_fires_once_with_weight_counted_once() {
        // Three distinct GUARANTEED_RETURNS phrases in one text
        let text = "Guaranteed profits, assured returns, no risk at all!";
        let findings = extractor().extract(text, Language::En);

        let matching: Vec<_> = findings
            .flags
            .iter()
            .filter(|f| f.code == "GUARANTEED_RETURNS")
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].weight, 25);
        assert!(matching[0].evidence.len() >= 3);
    }

    #[test]
    fn test_evidence_preserves_original_casing_and_dedups() {
        let text = "GUARANTEED returns! Guaranteed returns! guaranteed.";
        let findings = extractor().extract(text, Language::En);

        let flag = findings
            .flags
            .iter()
            .find(|f| f.code == "GUARANTEED_RETURNS")
            .unwrap();
        // Three casings of "guaranteed", each kept once
        assert!(flag.evidence.contains(&"GUARANTEED".to_string()));
        assert!(flag.evidence.contains(&"Guaranteed".to_string()));
        assert!(flag.evidence.contains(&"guaranteed".to_string()));
        let unique: std::collections::HashSet<_> = flag.evidence.iter().collect();
        assert_eq!(unique.len(), flag.evidence.len());
    }

    #[test]
    fn test_flag_order_follows_catalog_order() {
        // Mention a late-catalog rule before an early one in the text
        let text = "Pay the registration fee for guaranteed profit";
        let findings = extractor().extract(text, Language::En);

        let fired = codes(&findings);
        let guaranteed = fired.iter().position(|c| *c == "GUARANTEED_RETURNS");
        let advance = fired.iter().position(|c| *c == "ADVANCE_PAYMENT");
        assert!(guaranteed.unwrap() < advance.unwrap());
    }

    #[test]
    fn test_language_rules_are_additive() {
        let text = "गारंटी के साथ guaranteed मुनाफा";
        let hi = extractor().extract(text, Language::Hi);
        assert!(codes(&hi).contains(&"HINDI_SCAM_PHRASES"));
        assert!(codes(&hi).contains(&"GUARANTEED_RETURNS"));
        assert!(!codes(&hi).contains(&"MARATHI_SCAM_PHRASES"));

        let en = extractor().extract(text, Language::En);
        assert!(!codes(&en).contains(&"HINDI_SCAM_PHRASES"));
        assert!(codes(&en).contains(&"GUARANTEED_RETURNS"));
    }

    #[test]
    fn test_phrase_spanning_line_break_still_fires() {
        let text = "We offer assured\nreturns to members";
        let findings = extractor().extract(text, Language::En);

        let flag = findings
            .flags
            .iter()
            .find(|f| f.code == "GUARANTEED_RETURNS")
            .unwrap();
        assert_eq!(flag.evidence, vec!["assured\nreturns".to_string()]);
    }

    #[test]
    fn test_idempotent_extraction() {
        let text = "Act now! Guaranteed pre-IPO allotment via Telegram, pay first.";
        let ex = extractor();
        let first = ex.extract(text, Language::En);
        let second = ex.extract(text, Language::En);
        assert_eq!(first, second);
    }

    #[test]
    fn test_more_occurrences_never_shrink_evidence() {
        let ex = extractor();
        let base = ex.extract("no risk scheme", Language::En);
        let more = ex.extract("no risk scheme, truly NO RISK", Language::En);

        let base_flag = base.flags.iter().find(|f| f.code == "GUARANTEED_RETURNS");
        let more_flag = more.flags.iter().find(|f| f.code == "GUARANTEED_RETURNS");
        assert!(base_flag.is_some() && more_flag.is_some());
        assert!(more_flag.unwrap().evidence.len() >= base_flag.unwrap().evidence.len());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = RuleCatalog::new(vec![crate::catalog::RuleDefinition {
            code: "FREE_MONEY".to_string(),
            trigger_phrases: vec!["free money".to_string()],
            weight: 40,
            severity: Severity::High,
            language: crate::catalog::RuleLanguage::All,
        }])
        .unwrap();
        let ex = RedFlagExtractor::new(catalog).unwrap();

        let findings = ex.extract("Get FREE   money here", Language::En);
        assert_eq!(findings.flags.len(), 1);
        assert_eq!(findings.flags[0].label, "free money");
        assert_eq!(findings.flags[0].evidence, vec!["FREE   money".to_string()]);
    }

    proptest! {
        #[test]
        fn prop_extraction_is_total_and_idempotent(text in "\\PC{0,300}") {
            let ex = extractor();
            let first = ex.extract(&text, Language::En);
            let second = ex.extract(&text, Language::En);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_weights_stay_within_catalog_bounds(text in ".{0,200}") {
            let ex = extractor();
            let findings = ex.extract(&text, Language::Hi);
            for flag in &findings.flags {
                prop_assert!(flag.weight <= 50);
                prop_assert!(!flag.evidence.is_empty());
            }
        }
    }
}
