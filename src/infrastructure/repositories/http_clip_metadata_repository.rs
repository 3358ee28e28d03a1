use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::clip_metadata_repository::{
    ClipMetadataRecord, ClipMetadataRepository, PersistenceError, SavedClipRecord,
};
use crate::infrastructure::config::Config;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP implementation of the clip-metadata repository
pub struct HttpClipMetadataRepository {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl HttpClipMetadataRepository {
    pub fn new(
        base_url: impl Into<String>,
        access_token: Option<String>,
    ) -> Result<Self, PersistenceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| PersistenceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            access_token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, PersistenceError> {
        Self::new(config.api_base_url.clone(), config.access_token.clone())
    }

    fn records_url(&self) -> String {
        format!("{}/api/audio-files", self.base_url)
    }
}

#[async_trait]
impl ClipMetadataRepository for HttpClipMetadataRepository {
    async fn save(&self, record: &ClipMetadataRecord) -> Result<SavedClipRecord, PersistenceError> {
        let mut builder = self.client.post(self.records_url()).json(record);
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| PersistenceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PersistenceError::Service {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<SavedClipRecord>()
            .await
            .map_err(|e| PersistenceError::InvalidResponse(e.to_string()))
    }
}
