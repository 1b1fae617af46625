use std::time::Duration;

use async_trait::async_trait;
use newwork_application::{
    EnhancementFailure, EnhancementOutcome, FeedbackEnhancer, enhancement_prompt,
};
use serde::{Deserialize, Serialize};

/// Default Gemini `generateContent` endpoint.
pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
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
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty())
    }
}

/// Feedback enhancer backed by the Gemini REST API.
///
/// Every failure degrades to the original text; nothing is retried.
pub struct GeminiFeedbackEnhancer {
    http_client: reqwest::Client,
    api_key: String,
    endpoint: String,
    timeout: Duration,
}

impl GeminiFeedbackEnhancer {
    /// Creates a Gemini-backed enhancer.
    #[must_use]
    pub fn new(
        http_client: reqwest::Client,
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            timeout,
        }
    }

    async fn request_rewrite(
        &self,
        text: &str,
        employee_name: Option<&str>,
    ) -> Result<String, EnhancementFailure> {
        let prompt = enhancement_prompt(text, employee_name);
        let body = GenerateContentRequest {
            contents: [Content {
                parts: [Part {
                    text: prompt.as_str(),
                }],
            }],
        };

        let response = self
            .http_client
            .post(self.endpoint.as_str())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnhancementFailure::Status(status.as_u16()));
        }

        let payload = response.text().await.map_err(classify_transport_error)?;
        let decoded: GenerateContentResponse = serde_json::from_str(&payload)
            .map_err(|error| EnhancementFailure::MalformedPayload(error.to_string()))?;

        decoded.first_text().ok_or(EnhancementFailure::MissingContent)
    }
}

fn classify_transport_error(error: reqwest::Error) -> EnhancementFailure {
    if error.is_timeout() {
        EnhancementFailure::Timeout
    } else {
        EnhancementFailure::Transport(error.to_string())
    }
}

#[async_trait]
impl FeedbackEnhancer for GeminiFeedbackEnhancer {
    async fn enhance(&self, text: &str, employee_name: Option<&str>) -> EnhancementOutcome {
        match self.request_rewrite(text, employee_name).await {
            Ok(enhanced) => {
                tracing::debug!(length = enhanced.len(), "gemini enhancement received");
                EnhancementOutcome::Enhanced(enhanced)
            }
            Err(reason) => {
                tracing::warn!(%reason, "gemini enhancement failed");
                EnhancementOutcome::fallback(text, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests;
