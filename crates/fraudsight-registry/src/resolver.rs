//! Approximate advisor-identity resolution
//!
//! The resolver ranks registry candidates against a free-text name through
//! a three-tier cascade: exact equality, full-text search, then substring
//! containment. The first non-empty tier wins. Store failures are absorbed
//! as empty tiers so a degraded registry reads as "no additional signal",
//! never as an error.

use std::sync::Arc;

use crate::advisor::{AdvisorMatch, AdvisorRecord, AdvisorStatus, CredentialCheck, MatchType};
use crate::store::RegistryStore;

/// Similarity score between a query and a candidate name, in [0, 100]
///
/// Case-insensitive: equality scores 100; containment in either direction
/// scores by length ratio against a 90 ceiling; anything else by classic
/// unit-cost Levenshtein distance against an 80 ceiling.
pub fn match_confidence(a: &str, b: &str) -> u8 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 100;
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let max_len = len_a.max(len_b);

    if a.contains(&b) || b.contains(&a) {
        let ratio = len_a.min(len_b) as f64 / max_len as f64;
        return (ratio * 90.0).round() as u8;
    }

    let distance = strsim::levenshtein(&a, &b);
    let similarity = 1.0 - distance as f64 / max_len as f64;
    (similarity * 80.0).round() as u8
}

/// Stateless resolver over a registry store
pub struct AdvisorResolver {
    store: Arc<dyn RegistryStore>,
}

impl AdvisorResolver {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self { store }
    }

    /// Rank registry candidates for a free-text name
    ///
    /// Input shorter than 2 characters after trimming short-circuits to an
    /// empty result. Fuzzy tiers are ordered by descending confidence with
    /// ties left in store iteration order.
    pub async fn find_by_name(&self, name: &str, limit: usize) -> Vec<AdvisorMatch> {
        let query = name.trim();
        if query.chars().count() < 2 {
            tracing::debug!(query = %query, "advisor query below minimum length");
            return Vec::new();
        }

        let exact = self
            .absorb(self.store.find_exact_name(query, limit).await, "exact");
        if !exact.is_empty() {
            tracing::debug!(tier = "exact", hits = exact.len(), "match tier selected");
            return exact
                .into_iter()
                .map(|advisor| AdvisorMatch {
                    advisor,
                    match_type: MatchType::Exact,
                    confidence: 100,
                })
                .collect();
        }

        let text_hits = self.absorb(self.store.search_text(query, limit).await, "text");
        if !text_hits.is_empty() {
            tracing::debug!(tier = "text", hits = text_hits.len(), "match tier selected");
            return Self::ranked(query, text_hits);
        }

        let substring_hits = self.absorb(
            self.store.search_substring(query, limit).await,
            "substring",
        );
        tracing::debug!(
            tier = "substring",
            hits = substring_hits.len(),
            "match tier selected"
        );
        Self::ranked(query, substring_hits)
    }

    /// Exact lookup on the registration key
    pub async fn find_by_registration(&self, registration_number: &str) -> Option<AdvisorMatch> {
        match self.store.find_by_registration(registration_number).await {
            Ok(Some(advisor)) => Some(AdvisorMatch {
                advisor,
                match_type: MatchType::Exact,
                confidence: 100,
            }),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "registration lookup failed");
                None
            }
        }
    }

    /// Verify credentials behind a registration number
    pub async fn verify_credentials(&self, registration_number: &str) -> CredentialCheck {
        match self.store.find_by_registration(registration_number).await {
            Ok(Some(advisor)) => {
                let message = match advisor.status {
                    AdvisorStatus::Active => "Advisor is active and verified".to_string(),
                    status => format!("Advisor status: {}", status.as_str()),
                };
                CredentialCheck {
                    verified: true,
                    status: Some(advisor.status),
                    advisor: Some(advisor),
                    message,
                }
            }
            Ok(None) => CredentialCheck {
                verified: false,
                status: None,
                advisor: None,
                message: "Advisor not found in registry".to_string(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "credential verification failed");
                CredentialCheck {
                    verified: false,
                    status: None,
                    advisor: None,
                    message: "Error verifying advisor credentials".to_string(),
                }
            }
        }
    }

    fn absorb(
        &self,
        result: fraudsight_core::Result<Vec<AdvisorRecord>>,
        tier: &str,
    ) -> Vec<AdvisorRecord> {
        match result {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!(tier, error = %e, "registry lookup failed");
                Vec::new()
            }
        }
    }

    fn ranked(query: &str, hits: Vec<AdvisorRecord>) -> Vec<AdvisorMatch> {
        let mut matches: Vec<AdvisorMatch> = hits
            .into_iter()
            .map(|advisor| {
                let confidence = match_confidence(query, &advisor.name);
                AdvisorMatch {
                    advisor,
                    match_type: MatchType::Fuzzy,
                    confidence,
                }
            })
            .collect();
        // Stable sort keeps store iteration order for equal confidences
        matches.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        matches
    }
}
