pub mod groq;
pub mod normalize;
pub mod voice;

use axum::body::Bytes;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::AppError;

pub use groq::GroqClient;
pub use voice::VoiceCatalog;

pub struct TtsService {
    upstream: GroqClient,
    voices: VoiceCatalog,
}

impl TtsService {
    pub fn new(upstream: GroqClient, voices: VoiceCatalog) -> Self {
        Self { upstream, voices }
    }

    pub fn from_config(config: &Config, voices: VoiceCatalog) -> Result<Self, AppError> {
        let upstream = GroqClient::new(&config.base_url, config.api_key.clone(), config.timeout)?;
        Ok(Self::new(upstream, voices))
    }

    pub async fn speak(&self, request: Map<String, Value>) -> Result<Bytes, AppError> {
        // 1. Fill in / replace model, voice and format
        let body = normalize::normalize(request, &self.voices);

        tracing::debug!(
            model = body.get("model").and_then(|v| v.as_str()),
            voice = body.get("voice").and_then(|v| v.as_str()),
            "Forwarding speech request to {}",
            self.upstream.speech_url()
        );

        // 2. Relay to Groq
        let audio = self.upstream.speech(&body).await?;

        tracing::debug!("Upstream returned {} bytes of audio", audio.len());
        Ok(audio)
    }

    pub fn list_voices(&self) -> &[String] {
        self.voices.voices()
    }
}
