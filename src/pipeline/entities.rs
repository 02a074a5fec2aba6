//! The entity-provider seam: named-entity spans and the client that
//! produces them.
//!
//! The pipeline only sees the `EntityProvider` trait. The real
//! implementation is a hosted token-classification endpoint; tests and
//! model-less deployments use `NullProvider`.

use serde::{Deserialize, Serialize};

/// Coarse label classes the pipeline cares about. Raw model labels are
/// folded into these via `EntityLabel::from_raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityLabel {
    Drug,
    Disease,
    Dosage,
    Other,
}

impl EntityLabel {
    /// Map a raw model label (e.g. "B-MEDICATION", "Disease_disorder",
    /// "STRENGTH") to a coarse class by substring match, uppercased.
    pub fn from_raw(raw: &str) -> Self {
        let upper = raw.to_uppercase();
        if ["MEDICATION", "DRUG", "CHEMICAL"].iter().any(|k| upper.contains(k)) {
            EntityLabel::Drug
        } else if ["DISEASE", "CONDITION", "SYMPTOM"].iter().any(|k| upper.contains(k)) {
            EntityLabel::Disease
        } else if upper.contains("STRENGTH") {
            EntityLabel::Dosage
        } else {
            EntityLabel::Other
        }
    }
}

/// A recognized span: surface text plus coarse label. Request-scoped,
/// consumed only by the lexical extractors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub surface: String,
    pub label: EntityLabel,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Cannot reach NER endpoint at {0}")]
    Connection(String),
    #[error("NER request failed: {0}")]
    Http(String),
    #[error("NER endpoint returned status {status}: {body}")]
    Endpoint { status: u16, body: String },
    #[error("Cannot parse NER response: {0}")]
    ResponseParsing(String),
}

/// Produces entities for a text. May fail; the analyzer treats any
/// failure as zero entities rather than propagating it.
pub trait EntityProvider: Send + Sync {
    fn infer(&self, text: &str) -> Result<Vec<Entity>, ProviderError>;
}

/// Provider for deployments without a model endpoint. Always returns
/// zero entities, leaving extraction to the regex fallbacks.
pub struct NullProvider;

impl EntityProvider for NullProvider {
    fn infer(&self, _text: &str) -> Result<Vec<Entity>, ProviderError> {
        Ok(Vec::new())
    }
}

/// HTTP client for a hosted token-classification endpoint
/// (Hugging Face inference API shape).
pub struct HfNerClient {
    url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

/// Request body for the inference endpoint.
#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// One span in the inference response. `entity_group` is present with
/// aggregation enabled; plain `entity` otherwise.
#[derive(Deserialize)]
struct RawEntity {
    #[serde(default)]
    entity_group: Option<String>,
    #[serde(default)]
    entity: Option<String>,
    word: String,
}

impl HfNerClient {
    pub fn new(url: &str, token: Option<String>, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            url: url.trim_end_matches('/').to_string(),
            token,
            client,
            timeout_secs,
        }
    }

    /// The configured endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl EntityProvider for HfNerClient {
    fn infer(&self, text: &str) -> Result<Vec<Entity>, ProviderError> {
        let mut request = self
            .client
            .post(&self.url)
            .json(&InferenceRequest { inputs: text });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| {
            if e.is_connect() {
                ProviderError::Connection(self.url.clone())
            } else if e.is_timeout() {
                ProviderError::Http(format!("Request timed out after {}s", self.timeout_secs))
            } else {
                ProviderError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let raw: Vec<RawEntity> = response
            .json()
            .map_err(|e| ProviderError::ResponseParsing(e.to_string()))?;

        Ok(raw
            .into_iter()
            .map(|r| {
                let label = r
                    .entity_group
                    .or(r.entity)
                    .map(|l| EntityLabel::from_raw(&l))
                    .unwrap_or(EntityLabel::Other);
                Entity {
                    surface: r.word,
                    label,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_labels_fold_to_coarse_classes() {
        assert_eq!(EntityLabel::from_raw("B-MEDICATION"), EntityLabel::Drug);
        assert_eq!(EntityLabel::from_raw("drug"), EntityLabel::Drug);
        assert_eq!(EntityLabel::from_raw("Chemical_substance"), EntityLabel::Drug);
        assert_eq!(EntityLabel::from_raw("Disease_disorder"), EntityLabel::Disease);
        assert_eq!(EntityLabel::from_raw("SIGN_SYMPTOM"), EntityLabel::Disease);
        assert_eq!(EntityLabel::from_raw("Strength"), EntityLabel::Dosage);
        assert_eq!(EntityLabel::from_raw("B-PER"), EntityLabel::Other);
        assert_eq!(EntityLabel::from_raw(""), EntityLabel::Other);
    }

    #[test]
    fn null_provider_returns_no_entities() {
        let entities = NullProvider.infer("Take Amoxicillin 500 mg").unwrap();
        assert!(entities.is_empty());
    }

    #[test]
    fn response_parsing_accepts_both_label_fields() {
        let grouped: Vec<RawEntity> =
            serde_json::from_str(r#"[{"entity_group": "Medication", "word": "Amoxicillin"}]"#)
                .unwrap();
        assert_eq!(grouped[0].entity_group.as_deref(), Some("Medication"));

        let plain: Vec<RawEntity> =
            serde_json::from_str(r#"[{"entity": "B-DRUG", "word": "Amoxicillin", "score": 0.99}]"#)
                .unwrap();
        assert_eq!(plain[0].entity.as_deref(), Some("B-DRUG"));
    }
}
