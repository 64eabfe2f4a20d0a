//! Rule catalog definitions
//!
//! A catalog is an immutable list of weighted fraud-pattern rules, loaded
//! at process start and injected into the extractor. There is no runtime
//! mutation; a reloaded catalog means a new extractor.

use fraudsight_core::{Error, Language, Result, Severity};
use serde::{Deserialize, Serialize};

/// Language tag on a rule definition
///
/// `All` rules always apply; language-tagged rules are additive on top of
/// them for content in that language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleLanguage {
    En,
    Hi,
    Mr,
    #[default]
    All,
}

impl RuleLanguage {
    /// Whether a rule with this tag participates in a scan of `language`
    pub fn applies_to(&self, language: Language) -> bool {
        match self {
            Self::All => true,
            Self::En => language == Language::En,
            Self::Hi => language == Language::Hi,
            Self::Mr => language == Language::Mr,
        }
    }
}

/// A single weighted fraud-pattern rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Unique rule code, e.g. `GUARANTEED_RETURNS`
    pub code: String,

    /// Trigger phrases, tested for containment in normalized text
    pub trigger_phrases: Vec<String>,

    /// Weight in [0, 50] contributed once per scan when the rule fires
    pub weight: u8,

    /// Severity category
    pub severity: Severity,

    /// Language the rule applies to
    #[serde(default)]
    pub language: RuleLanguage,
}

/// An immutable, validated catalog of rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleCatalog {
    rules: Vec<RuleDefinition>,
}

impl RuleCatalog {
    /// Build a catalog from rule definitions, validating invariants
    pub fn new(rules: Vec<RuleDefinition>) -> Result<Self> {
        let catalog = Self { rules };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let catalog: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::catalog(format!("failed to parse catalog: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a YAML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// The built-in default catalog
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[RuleDefinition] {
        &self.rules
    }

    /// Number of rules in the catalog
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the catalog holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for rule in &self.rules {
            if rule.code.is_empty() {
                return Err(Error::catalog("rule code must not be empty"));
            }
            if !seen.insert(rule.code.as_str()) {
                return Err(Error::catalog(format!("duplicate rule code: {}", rule.code)));
            }
            if rule.weight > 50 {
                return Err(Error::catalog(format!(
                    "rule {} weight {} exceeds maximum of 50",
                    rule.code, rule.weight
                )));
            }
            if rule.trigger_phrases.is_empty() {
                return Err(Error::catalog(format!(
                    "rule {} has no trigger phrases",
                    rule.code
                )));
            }
            let mut phrases = std::collections::HashSet::new();
            for phrase in &rule.trigger_phrases {
                if phrase.trim().is_empty() {
                    return Err(Error::catalog(format!(
                        "rule {} has an empty trigger phrase",
                        rule.code
                    )));
                }
                if !phrases.insert(phrase.as_str()) {
                    return Err(Error::catalog(format!(
                        "rule {} repeats trigger phrase '{}'",
                        rule.code, phrase
                    )));
                }
            }
        }
        Ok(())
    }
}

fn rule(
    code: &str,
    phrases: &[&str],
    weight: u8,
    severity: Severity,
    language: RuleLanguage,
) -> RuleDefinition {
    RuleDefinition {
        code: code.to_string(),
        trigger_phrases: phrases.iter().map(|p| p.to_string()).collect(),
        weight,
        severity,
        language,
    }
}

/// The default rule set covering investment-promotion fraud patterns
fn builtin_rules() -> Vec<RuleDefinition> {
    const DEVANAGARI_PHRASES: &[&str] = &[
        "पक्का मुनाफा",
        "गारंटी",
        "जल्दी करें",
        "सिर्फ आज",
        "दोगुना पैसा",
    ];

    vec![
        // High-risk financial promises
        rule(
            "GUARANTEED_RETURNS",
            &["guaranteed", "guarantee", "assured returns", "fixed profit", "no risk"],
            25,
            Severity::High,
            RuleLanguage::All,
        ),
        rule(
            "UNREALISTIC_RETURNS",
            &[
                "double your money",
                "100% profit",
                "200% return",
                "multiply your investment",
                "triple your money",
            ],
            30,
            Severity::High,
            RuleLanguage::All,
        ),
        rule(
            "URGENCY_PRESSURE",
            &["limited time", "offer expires", "act now", "hurry up", "last chance", "only today"],
            20,
            Severity::Medium,
            RuleLanguage::All,
        ),
        rule(
            "INSIDER_CLAIMS",
            &[
                "insider information",
                "secret tip",
                "confidential",
                "exclusive access",
                "inside knowledge",
            ],
            25,
            Severity::High,
            RuleLanguage::All,
        ),
        // IPO and trading scams
        rule(
            "PRE_IPO_SCAM",
            &["pre-ipo", "pre ipo", "before listing", "unlisted shares", "firm allotment"],
            30,
            Severity::High,
            RuleLanguage::All,
        ),
        rule(
            "PUMP_DUMP",
            &["pump and dump", "coordinate buying", "target price", "exit strategy", "book profit"],
            35,
            Severity::High,
            RuleLanguage::All,
        ),
        // Communication red flags
        rule(
            "UNOFFICIAL_CHANNELS",
            &["telegram", "whatsapp", "signal app", "discord", "private group"],
            15,
            Severity::Medium,
            RuleLanguage::All,
        ),
        rule(
            "CLONE_APP_WARNING",
            &["clone app", "fake app", "duplicate app", "mirror app", "copy trading"],
            25,
            Severity::High,
            RuleLanguage::All,
        ),
        // Payment red flags
        rule(
            "SUSPICIOUS_PAYMENT",
            &["upi", "paytm", "googlepay", "phonepe", "cash only", "cryptocurrency", "bitcoin"],
            15,
            Severity::Medium,
            RuleLanguage::All,
        ),
        rule(
            "ADVANCE_PAYMENT",
            &[
                "pay first",
                "advance payment",
                "registration fee",
                "processing charges",
                "token amount",
            ],
            20,
            Severity::Medium,
            RuleLanguage::All,
        ),
        // Regulatory red flags
        rule(
            "NO_REGULATION",
            &["no sebi", "unregulated", "offshore", "tax free", "black money"],
            30,
            Severity::High,
            RuleLanguage::All,
        ),
        rule(
            "FAKE_CREDENTIALS",
            &["certified advisor", "sebi registered", "rbi approved", "government scheme"],
            20,
            Severity::Medium,
            RuleLanguage::All,
        ),
        // Language-specific phrase sets; one catalog entry per language tag
        rule(
            "HINDI_SCAM_PHRASES",
            DEVANAGARI_PHRASES,
            25,
            Severity::High,
            RuleLanguage::Hi,
        ),
        rule(
            "MARATHI_SCAM_PHRASES",
            DEVANAGARI_PHRASES,
            25,
            Severity::High,
            RuleLanguage::Mr,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = RuleCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.len(), 14);
    }

    #[test]
    fn test_catalog_from_yaml() {
        let yaml = r#"
rules:
  - code: TEST_RULE
    trigger_phrases: ["free money"]
    weight: 10
    severity: low
"#;
        let catalog = RuleCatalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.rules()[0].language, RuleLanguage::All);
    }

    #[test]
    fn test_rule_from_json() {
        let json = r#"{
            "code": "TEST_RULE",
            "trigger_phrases": ["free money"],
            "weight": 10,
            "severity": "high",
            "language": "hi"
        }"#;
        let rule: RuleDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(rule.code, "TEST_RULE");
        assert_eq!(rule.severity, Severity::High);
        assert_eq!(rule.language, RuleLanguage::Hi);
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let rules = vec![
            rule("A", &["x"], 5, Severity::Low, RuleLanguage::All),
            rule("A", &["y"], 5, Severity::Low, RuleLanguage::All),
        ];
        assert!(RuleCatalog::new(rules).is_err());
    }

    #[test]
    fn test_overweight_rule_rejected() {
        let rules = vec![rule("A", &["x"], 51, Severity::High, RuleLanguage::All)];
        assert!(RuleCatalog::new(rules).is_err());
    }

    #[test]
    fn test_empty_phrase_list_rejected() {
        let rules = vec![rule("A", &[], 5, Severity::Low, RuleLanguage::All)];
        assert!(RuleCatalog::new(rules).is_err());
    }

    #[test]
    fn test_language_applicability() {
        assert!(RuleLanguage::All.applies_to(Language::En));
        assert!(RuleLanguage::Hi.applies_to(Language::Hi));
        assert!(!RuleLanguage::Hi.applies_to(Language::Mr));
        assert!(!RuleLanguage::Mr.applies_to(Language::En));
    }
}
