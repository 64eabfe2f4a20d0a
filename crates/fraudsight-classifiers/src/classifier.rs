//! Classifier collaborator contract

use async_trait::async_trait;
use fraudsight_core::{ClassifierLabel, Language, Result};
use serde::{Deserialize, Serialize};

/// Capability interface for the external content classifier
///
/// The orchestration layer selects an implementation (mock or live
/// provider) and injects it; the risk aggregator only ever sees the label
/// list. A failing implementation surfaces an error for the caller to
/// absorb as zero signal, never for the aggregator to observe.
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Classify the given text
    async fn classify(&self, text: &str, language: Language) -> Result<Classification>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Result of one classification call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Fraud-category labels with confidences in [0, 100]
    pub categories: Vec<ClassifierLabel>,

    /// True when produced by the offline mock
    pub mock: bool,
}

impl Classification {
    /// An empty, zero-signal classification
    pub fn empty(mock: bool) -> Self {
        Self {
            categories: Vec::new(),
            mock,
        }
    }
}
