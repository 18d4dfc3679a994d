use std::time::Duration;

use axum::body::Bytes;
use reqwest::{header, redirect, Client, StatusCode};
use serde_json::{Map, Value};

use crate::error::AppError;

/// Thin client for Groq's OpenAI-compatible `/audio/speech` endpoint.
pub struct GroqClient {
    http: Client,
    speech_url: String,
    api_key: String,
}

impl GroqClient {
    pub fn new(base_url: &str, api_key: String, timeout: Duration) -> Result<Self, AppError> {
        // A 3xx is an upstream answer like any other non-200 and goes back to the caller.
        let http = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            speech_url: format!("{}/audio/speech", base_url.trim_end_matches('/')),
            api_key,
        })
    }

    pub fn speech_url(&self) -> &str {
        &self.speech_url
    }

    /// POST the body as-is and hand back the audio bytes. Any status other
    /// than 200 becomes [`AppError::Upstream`] carrying the raw response text.
    pub async fn speech(&self, body: &Map<String, Value>) -> Result<Bytes, AppError> {
        let response = self
            .http
            .post(&self.speech_url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            return Err(AppError::Upstream { status, body });
        }

        Ok(response.bytes().await?)
    }
}
