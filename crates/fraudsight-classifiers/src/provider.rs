//! Live classifier provider over HTTP
//!
//! Thin JSON client for a hosted classification endpoint. Transport and
//! response-shape failures surface as classifier errors; the orchestration
//! layer absorbs them into an empty label list.

use async_trait::async_trait;
use fraudsight_core::{ClassifierLabel, Error, Language, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::classifier::{Classification, TextClassifier};

/// Connection settings for the hosted classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Endpoint accepting classification requests
    pub endpoint: String,

    /// Model identifier forwarded to the provider
    pub model: String,

    /// Bearer token, when the endpoint requires one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    15
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    model: &'a str,
    text: &'a str,
    language: &'a str,
}

#[derive(Deserialize)]
struct ClassifyResponse {
    categories: Vec<WireLabel>,
}

#[derive(Deserialize)]
struct WireLabel {
    category: String,
    confidence: u32,
    #[serde(default)]
    explanation: String,
}

/// HTTP-backed implementation of the classifier capability
pub struct HttpClassifier {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl HttpClassifier {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::classifier(format!("failed to build http client: {}", e)))?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl TextClassifier for HttpClassifier {
    async fn classify(&self, text: &str, language: Language) -> Result<Classification> {
        let request = ClassifyRequest {
            model: &self.config.model,
            text,
            language: language.as_str(),
        };

        let mut builder = self.client.post(&self.config.endpoint).json(&request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::classifier(format!("provider request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::classifier(format!(
                "provider returned status {}",
                response.status()
            )));
        }

        let body: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| Error::classifier(format!("malformed provider response: {}", e)))?;

        // Confidences outside [0, 100] are clamped rather than rejected
        let categories = body
            .categories
            .into_iter()
            .map(|label| {
                ClassifierLabel::new(label.category, label.confidence.min(100) as u8, label.explanation)
            })
            .collect();

        tracing::debug!(model = %self.config.model, "provider classification complete");

        Ok(Classification {
            categories,
            mock: false,
        })
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}
