use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata written to the backend after a successful synthesis
///
/// Field names follow the backend's JSON contract. `duration` is a
/// placeholder until playback metadata is known; `fileSize` is the
/// synthesized byte count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipMetadataRecord {
    pub title: String,
    pub content: String,
    pub voice: String,
    pub speed: f32,
    pub pitch: f32,
    pub volume: f32,
    pub format: String,
    pub duration: f32,
    pub file_size: u64,
    pub is_public: bool,
}

/// Created-record representation returned by the backend
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedClipRecord {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Repository for the clip-metadata persistence endpoint
///
/// Writes are best-effort: the caller logs and swallows every error, so
/// implementations must never panic on failure paths.
#[async_trait]
pub trait ClipMetadataRepository: Send + Sync {
    async fn save(&self, record: &ClipMetadataRecord) -> Result<SavedClipRecord, PersistenceError>;
}
