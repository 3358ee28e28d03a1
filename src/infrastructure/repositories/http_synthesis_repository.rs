use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::synthesis_repository::{
    SynthesisApiError, SynthesisRepository, SynthesisRequest, SynthesizedAudio,
};
use crate::infrastructure::config::Config;

/// HTTP implementation of the synthesis repository
///
/// POSTs `{ text, voice, speed }` to the VoiceText Pro backend and awaits
/// the complete `audio/*` payload.
pub struct HttpSynthesisRepository {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl HttpSynthesisRepository {
    pub fn new(
        base_url: impl Into<String>,
        timeout_secs: u64,
        access_token: Option<String>,
    ) -> Result<Self, SynthesisApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SynthesisApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            access_token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, SynthesisApiError> {
        Self::new(
            config.api_base_url.clone(),
            config.synthesis_timeout_secs,
            config.access_token.clone(),
        )
    }

    fn synthesize_url(&self) -> String {
        format!("{}/api/tts/synthesize", self.base_url)
    }
}

#[async_trait]
impl SynthesisRepository for HttpSynthesisRepository {
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> Result<SynthesizedAudio, SynthesisApiError> {
        tracing::debug!(
            url = %self.synthesize_url(),
            voice = %request.voice,
            text_length = request.text.chars().count(),
            "Sending synthesis request"
        );

        let mut builder = self.client.post(self.synthesize_url()).json(request);
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                SynthesisApiError::Timeout
            } else if e.is_connect() {
                SynthesisApiError::Network(format!("Cannot connect to synthesis endpoint: {}", e))
            } else {
                SynthesisApiError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SynthesisApiError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.starts_with("audio/") {
            return Err(SynthesisApiError::InvalidResponse(format!(
                "Expected an audio payload, got content-type '{}'",
                content_type
            )));
        }

        // The full payload is awaited before use; no streaming is assumed
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisApiError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            voice = %request.voice,
            audio_size = bytes.len(),
            content_type = %content_type,
            "Synthesis response received"
        );

        Ok(SynthesizedAudio {
            bytes,
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_url() {
        let repo = HttpSynthesisRepository::new("http://localhost:9000", 30, None).unwrap();
        assert_eq!(
            repo.synthesize_url(),
            "http://localhost:9000/api/tts/synthesize"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let request = SynthesisRequest {
            text: "Xin chào".to_string(),
            voice: "banmai".to_string(),
            speed: 1.0,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "Xin chào", "voice": "banmai", "speed": 1.0})
        );
    }
}
