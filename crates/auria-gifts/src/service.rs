//! Generation service seam and its HTTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::ServiceError;

/// Default API root of the hosted model.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Something that turns a prompt into the raw JSON text of a
/// `{recommendation}` object.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError>;
}

/// Connection settings for [`HttpGenerationService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub endpoint: String,
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: String,
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

impl GenerationConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `<endpoint>/models/<model>:generateContent`
    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}

/// Calls a hosted `generateContent` endpoint with a JSON response schema.
pub struct HttpGenerationService {
    client: Client,
    config: GenerationConfig,
}

impl HttpGenerationService {
    pub fn new(config: GenerationConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ServiceError::Client(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }
}

/// Request body asking for a `{recommendation: string}` JSON object.
pub fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "recommendation": {
                        "type": "STRING",
                        "description": "A detailed gift recommendation including the name of the jewellery item and why it is suitable for the occasion, recipient and budget."
                    }
                },
                "required": ["recommendation"]
            }
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Concatenated text parts of the first candidate.
pub fn first_candidate_text(body: &str) -> Result<String, ServiceError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    let content = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or_else(|| ServiceError::MalformedBody("response has no candidates".into()))?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    if text.trim().is_empty() {
        return Err(ServiceError::EmptyRecommendation);
    }
    Ok(text)
}

#[async_trait]
impl GenerationService for HttpGenerationService {
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        let url = self.config.url();
        debug!(model = %self.config.model, "sending generation request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                message: body,
            });
        }
        first_candidate_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        let config = GenerationConfig::new("key").with_endpoint("https://example.test/v1/");
        assert_eq!(
            config.url(),
            "https://example.test/v1/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_asks_for_json() {
        let body = request_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"][0],
            "recommendation"
        );
    }

    #[test]
    fn test_first_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"recommendation\":"},{"text":"\"Ring\"}"}]}}]}"#;
        assert_eq!(first_candidate_text(body).unwrap(), r#"{"recommendation":"Ring"}"#);
    }

    #[test]
    fn test_no_candidates() {
        assert!(matches!(
            first_candidate_text(r#"{"candidates":[]}"#),
            Err(ServiceError::MalformedBody(_))
        ));
        assert!(matches!(
            first_candidate_text("<html>"),
            Err(ServiceError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_api_key_not_serialized() {
        let json = serde_json::to_value(GenerationConfig::new("secret")).unwrap();
        assert!(json.get("api_key").is_none());
        assert_eq!(json["timeout"], 30);
    }
}
