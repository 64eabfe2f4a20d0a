//! Core types shared across FraudSight components

use serde::{Deserialize, Serialize};

/// Language of the content under analysis
///
/// The orchestration layer restricts input to this closed set; rule
/// definitions carry their own tag (see `RuleLanguage` in the rules crate)
/// so language-specific rule sets apply additively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Hindi
    Hi,
    /// Marathi
    Mr,
}

impl Language {
    /// Language tag as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Mr => "mr",
        }
    }
}

/// Severity of a fired red flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A fraud indicator fired by the red-flag extractor
///
/// Owned by the scan result; never mutated after creation. Evidence holds
/// the matched substrings from the original text, deduplicated in order of
/// first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlag {
    /// Stable rule code, e.g. `GUARANTEED_RETURNS`
    pub code: String,

    /// Human-readable label derived from the code
    pub label: String,

    /// Weight contributed to the base score
    pub weight: u8,

    /// Severity category
    pub severity: Severity,

    /// Matched substrings in original casing/spacing
    pub evidence: Vec<String>,
}

impl RedFlag {
    /// Create a flag, deriving the label from the code
    pub fn new(
        code: impl Into<String>,
        weight: u8,
        severity: Severity,
        evidence: Vec<String>,
    ) -> Self {
        let code = code.into();
        let label = code.replace('_', " ").to_lowercase();
        Self {
            code,
            label,
            weight,
            severity,
            evidence,
        }
    }
}

/// Contact and channel artifacts pulled from the scanned text
///
/// Email/phone/website sweeps run over the original text; social and
/// payment mentions are keyword membership over normalized text. All lists
/// are deduplicated, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub websites: Vec<String>,
    pub social_media: Vec<String>,
    pub payment_methods: Vec<String>,
}

impl ExtractedMetadata {
    /// True when no artifact of any kind was found
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
            && self.phones.is_empty()
            && self.websites.is_empty()
            && self.social_media.is_empty()
            && self.payment_methods.is_empty()
    }
}

/// One category label emitted by the external classifier collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierLabel {
    /// Fraud category, e.g. `ponzi_scheme`
    pub category: String,

    /// Classifier confidence in [0, 100]
    pub confidence: u8,

    /// Short reason for the label
    pub explanation: String,
}

impl ClassifierLabel {
    pub fn new(category: impl Into<String>, confidence: u8, explanation: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            confidence,
            explanation: explanation.into(),
        }
    }
}

/// Categorical risk band derived from the bounded score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Map a bounded score to its band (Low <= 34 < Medium <= 64 < High)
    pub fn from_score(score: u8) -> Self {
        if score <= 34 {
            Self::Low
        } else if score <= 64 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Band name as presented to users
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// How the final score was composed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Sum of fired rule weights, uncapped
    pub base_score: u32,

    /// Classifier boost after the [0, 25] clamp
    pub boost: u8,

    /// Number of fired flags
    pub flag_count: usize,

    /// Number of fired flags with high severity
    pub high_severity_count: usize,
}

/// Deterministic risk assessment for one scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Final score clamped to [0, 100]
    pub score: u8,

    /// Categorical band for the score
    pub band: RiskBand,

    /// Composition details
    pub breakdown: ScoreBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_derivation() {
        let flag = RedFlag::new("GUARANTEED_RETURNS", 25, Severity::High, vec![]);
        assert_eq!(flag.label, "guaranteed returns");
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(RiskBand::from_score(0), RiskBand::Low);
        assert_eq!(RiskBand::from_score(34), RiskBand::Low);
        assert_eq!(RiskBand::from_score(35), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(64), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(65), RiskBand::High);
        assert_eq!(RiskBand::from_score(100), RiskBand::High);
    }

    #[test]
    fn test_band_serializes_uppercase() {
        let json = serde_json::to_string(&RiskBand::High).unwrap();
        assert_eq!(json, "\"HIGH\"");
    }
}
