//! Scan pipeline orchestration
//!
//! Wires the pure analysis components together for one scan: validate
//! input shape, extract red flags, gather classifier signal, aggregate
//! risk, resolve claimed advisors, and assemble the structured report.
//! Collaborator failures degrade to zero signal here; the only error this
//! layer raises for text input is the length floor.

use std::sync::Arc;

use fraudsight_classifiers::{Classification, TextClassifier};
use fraudsight_core::{
    ClassifierLabel, Error, ExtractedMetadata, Language, RedFlag, Result, RiskAssessment,
};
use fraudsight_registry::{AdvisorMatch, AdvisorResolver, NameExtractor};
use fraudsight_rules::RedFlagExtractor;
use fraudsight_scoring::{assess, narrative, recommendations};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum trimmed input length accepted by `scan`
pub const MIN_TEXT_LENGTH: usize = 10;

/// Candidate names checked against the registry per scan
const MAX_CANDIDATE_NAMES: usize = 3;

/// Registry matches requested per candidate name
const MATCHES_PER_NAME: usize = 2;

/// Structured result of one scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub scan_id: Uuid,
    pub language: Language,
    pub flags: Vec<RedFlag>,
    pub metadata: ExtractedMetadata,
    pub labels: Vec<ClassifierLabel>,
    pub classifier_mock: bool,
    pub assessment: RiskAssessment,
    pub advisor_matches: Vec<AdvisorMatch>,
    pub narrative: String,
    pub recommendations: Vec<String>,
}

/// Orchestrates one scan across the analysis components
///
/// Holds no cross-call state; a single service may serve any number of
/// concurrent scans.
pub struct ScanService {
    extractor: RedFlagExtractor,
    classifier: Arc<dyn TextClassifier>,
    resolver: AdvisorResolver,
    names: NameExtractor,
}

impl ScanService {
    /// Build a service with the default name-extraction heuristics
    pub fn new(
        extractor: RedFlagExtractor,
        classifier: Arc<dyn TextClassifier>,
        resolver: AdvisorResolver,
    ) -> Result<Self> {
        Ok(Self {
            extractor,
            classifier,
            resolver,
            names: NameExtractor::new()?,
        })
    }

    /// Replace the name extractor, e.g. with a custom excluded-term list
    pub fn with_name_extractor(mut self, names: NameExtractor) -> Self {
        self.names = names;
        self
    }

    /// Run the full analysis pipeline over `text`
    pub async fn scan(&self, text: &str, language: Language) -> Result<ScanReport> {
        let text = text.trim();
        if text.chars().count() < MIN_TEXT_LENGTH {
            return Err(Error::input(format!(
                "text content too short (minimum {} characters)",
                MIN_TEXT_LENGTH
            )));
        }

        let findings = self.extractor.extract(text, language);

        let classification = match self.classifier.classify(text, language).await {
            Ok(classification) => classification,
            Err(e) => {
                tracing::warn!(error = %e, "classifier unavailable, continuing without boost");
                Classification::empty(false)
            }
        };

        let assessment = assess(&findings.flags, &classification.categories);
        let narrative = narrative(
            &findings.flags,
            assessment.score,
            assessment.band,
            &classification.categories,
        );
        let recommendations =
            recommendations(&findings.flags, assessment.band, &findings.metadata);

        let mut advisor_matches = Vec::new();
        for name in self.names.extract(text).iter().take(MAX_CANDIDATE_NAMES) {
            advisor_matches.extend(self.resolver.find_by_name(name, MATCHES_PER_NAME).await);
        }
        let advisor_matches = dedupe_by_registration(advisor_matches);

        let report = ScanReport {
            scan_id: Uuid::new_v4(),
            language,
            flags: findings.flags,
            metadata: findings.metadata,
            labels: classification.categories,
            classifier_mock: classification.mock,
            assessment,
            advisor_matches,
            narrative,
            recommendations,
        };

        tracing::info!(
            scan_id = %report.scan_id,
            score = report.assessment.score,
            band = report.assessment.band.as_str(),
            flags = report.flags.len(),
            advisors = report.advisor_matches.len(),
            "scan complete"
        );

        Ok(report)
    }

    /// Look up advisors by free-text name
    pub async fn find_advisors(&self, name: &str, limit: usize) -> Vec<AdvisorMatch> {
        self.resolver.find_by_name(name, limit).await
    }

    /// Verify an advisor's credentials by registration number
    pub async fn verify_advisor(
        &self,
        registration_number: &str,
    ) -> fraudsight_registry::CredentialCheck {
        self.resolver.verify_credentials(registration_number).await
    }
}

/// Collapse matches rediscovered by independent queries to one per
/// registry identity, keeping the first (highest-tier) occurrence
pub fn dedupe_by_registration(matches: Vec<AdvisorMatch>) -> Vec<AdvisorMatch> {
    let mut seen = std::collections::HashSet::new();
    matches
        .into_iter()
        .filter(|m| seen.insert(m.advisor.registration_number.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fraudsight_registry::{AdvisorRecord, AdvisorStatus, MatchType};

    fn record(name: &str, registration: &str) -> AdvisorRecord {
        AdvisorRecord {
            name: name.to_string(),
            registration_number: registration.to_string(),
            status: AdvisorStatus::Active,
            firm: "Test Firm".to_string(),
            email: None,
            phone: None,
            certifications: vec![],
            specializations: vec![],
            registration_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        }
    }

    fn matched(name: &str, registration: &str, confidence: u8) -> AdvisorMatch {
        AdvisorMatch {
            advisor: record(name, registration),
            match_type: MatchType::Fuzzy,
            confidence,
        }
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let deduped = dedupe_by_registration(vec![
            matched("Priya Singh", "INH000002345", 100),
            matched("Amit Patel", "INH000003456", 72),
            matched("Priya Singh", "INH000002345", 58),
        ]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].confidence, 100);
    }

    #[test]
    fn test_dedupe_preserves_order() {
        let deduped = dedupe_by_registration(vec![
            matched("B", "R2", 50),
            matched("A", "R1", 90),
            matched("B", "R2", 50),
        ]);
        let registrations: Vec<_> = deduped
            .iter()
            .map(|m| m.advisor.registration_number.as_str())
            .collect();
        assert_eq!(registrations, vec!["R2", "R1"]);
    }
}
