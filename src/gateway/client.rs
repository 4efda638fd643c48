//! Generative service client.
//!
//! One operation: send a prompt plus a JSON response schema, get back the
//! parsed JSON the model produced. The real implementation speaks the
//! Gemini `generateContent` protocol; `FakeLlmClient` serves scripted
//! responses for tests. No retries - a failed call is a failed call.

use std::time::Duration;

use serde::Serialize;

use crate::config::LlmConfig;

/// Errors from the generative service boundary.
///
/// Callers collapse these into a single user-visible failure; the variants
/// exist so the log can say what actually went wrong.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    #[error("service returned an empty response")]
    EmptyResponse,

    #[error("invalid JSON from service: {0}")]
    InvalidJson(String),
}

/// Client for schema-constrained JSON generation.
pub trait LlmClient {
    /// Ask the model for a JSON document conforming to `response_schema`.
    fn call_json(
        &self,
        prompt: &str,
        response_schema: &serde_json::Value,
        temperature: f64,
    ) -> Result<serde_json::Value, LlmError>;
}

/// HTTP client for a Gemini-style `generateContent` endpoint.
pub struct HttpLlmClient {
    config: LlmConfig,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: std::borrow::Cow<'a, str>,
}

#[derive(Serialize)]
struct GenerationConfig<'a> {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: &'a serde_json::Value,
    temperature: f64,
}

impl HttpLlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }
}

impl LlmClient for HttpLlmClient {
    fn call_json(
        &self,
        prompt: &str,
        response_schema: &serde_json::Value,
        temperature: f64,
    ) -> Result<serde_json::Value, LlmError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(LlmError::MissingApiKey)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        );

        let body = GenerateContentRequest {
            contents: [Content {
                parts: [Part {
                    text: prompt.into(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema,
                temperature,
            },
        };

        tracing::debug!(model = %self.config.model, "calling generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout(self.config.timeout_secs)
                } else {
                    LlmError::Http(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Http(format!("HTTP {status} from service")));
        }

        let envelope: serde_json::Value = response
            .json()
            .map_err(|e| LlmError::InvalidJson(format!("unparseable response body: {e}")))?;

        // Gemini envelope: candidates[0].content.parts[0].text holds the
        // schema-constrained JSON as a string.
        let text = envelope
            .get("candidates")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("content"))
            .and_then(|v| v.get("parts"))
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("text"))
            .and_then(|v| v.as_str())
            .ok_or(LlmError::EmptyResponse)?;

        serde_json::from_str(text)
            .map_err(|e| LlmError::InvalidJson(format!("model output is not valid JSON: {e}")))
    }
}

/// Scripted client for tests.
///
/// Serves the configured responses in order; a single response is served
/// repeatedly.
pub struct FakeLlmClient {
    responses: std::sync::Mutex<Vec<Result<serde_json::Value, LlmError>>>,
    call_count: std::sync::Mutex<usize>,
}

impl FakeLlmClient {
    pub fn new(responses: Vec<Result<serde_json::Value, LlmError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses),
            call_count: std::sync::Mutex::new(0),
        }
    }

    /// Always answer with the given JSON.
    pub fn always_valid(json: serde_json::Value) -> Self {
        Self::new(vec![Ok(json)])
    }

    /// Always answer with the given error.
    pub fn always_error(error: LlmError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// How many calls have been made.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl LlmClient for FakeLlmClient {
    fn call_json(
        &self,
        _prompt: &str,
        _response_schema: &serde_json::Value,
        _temperature: f64,
    ) -> Result<serde_json::Value, LlmError> {
        *self.call_count.lock().unwrap() += 1;

        let mut responses = self.responses.lock().unwrap();
        match responses.len() {
            0 => Err(LlmError::EmptyResponse),
            1 => responses[0].clone(),
            _ => responses.remove(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_client_repeats_single_response() {
        let client = FakeLlmClient::always_valid(serde_json::json!({"ok": true}));

        for _ in 0..3 {
            let result = client.call_json("p", &serde_json::json!({}), 0.5).unwrap();
            assert_eq!(result["ok"], true);
        }
        assert_eq!(client.call_count(), 3);
    }

    #[test]
    fn test_fake_client_serves_responses_in_order() {
        let client = FakeLlmClient::new(vec![
            Ok(serde_json::json!({"n": 1})),
            Err(LlmError::Timeout(30)),
        ]);

        assert_eq!(
            client.call_json("", &serde_json::json!({}), 0.0).unwrap()["n"],
            1
        );
        assert!(matches!(
            client.call_json("", &serde_json::json!({}), 0.0),
            Err(LlmError::Timeout(30))
        ));
    }

    #[test]
    fn test_missing_key_fails_before_any_io() {
        let client = HttpLlmClient::new(LlmConfig {
            api_key: None,
            ..LlmConfig::default()
        })
        .unwrap();

        let result = client.call_json("prompt", &serde_json::json!({}), 0.7);
        assert!(matches!(result, Err(LlmError::MissingApiKey)));
    }
}
