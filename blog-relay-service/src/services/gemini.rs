//! Gemini `generateContent` client.
//!
//! Sends one prompt per call and hands the provider's status and JSON body
//! back untouched.

use super::RelayError;
use crate::config::GeminiSettings;
use axum::http::StatusCode;
use reqwest::{header::CONTENT_TYPE, Client};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::time::Duration;

/// Provider reply, passed through to the caller as-is.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

pub struct GeminiClient {
    settings: GeminiSettings,
    client: Client,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> Result<Self, RelayError> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(RelayError::ClientBuild)?;

        Ok(Self { settings, client })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    /// Endpoint URL without the `key` credential.
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.api_base, self.settings.model
        )
    }

    pub async fn generate_content(&self, prompt: &str) -> Result<UpstreamResponse, RelayError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = self.endpoint();

        tracing::debug!(
            model = %self.settings.model,
            url = %url,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        // reqwest errors embed the request URL, which carries the key.
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.settings.api_key.expose_secret().as_str())])
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Upstream(e.without_url()))?;

        let status = response.status();

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| RelayError::Upstream(e.without_url()))?;

        if status.is_success() {
            tracing::debug!(status = %status, "Gemini API responded");
        } else {
            tracing::warn!(status = %status, "Gemini API returned an error status");
        }

        Ok(UpstreamResponse { status, body })
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}
