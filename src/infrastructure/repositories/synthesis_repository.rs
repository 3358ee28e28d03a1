use async_trait::async_trait;
use serde::Serialize;

/// Request body for the synthesis endpoint
///
/// `voice` carries the provider-specific identifier, already mapped from
/// the catalogue voice. Pitch and volume are playback-side parameters and
/// never cross this boundary.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: String,
    pub speed: f32,
}

/// Full audio payload returned by the synthesis endpoint
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timeout")]
    Timeout,

    #[error("service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Repository for the synthesis endpoint
///
/// Abstracts the backend that converts text to audio bytes. The whole
/// payload is awaited before use; no streaming or partial response is
/// assumed.
#[async_trait]
pub trait SynthesisRepository: Send + Sync {
    /// Issue one synthesis call and await the complete audio payload
    ///
    /// # Errors
    /// Any non-2xx status or transport failure is an error; callers treat
    /// all variants as a generic synthesis failure and do not retry.
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> Result<SynthesizedAudio, SynthesisApiError>;
}
