use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::config::SynthesisConfig;
use super::error::SynthesisError;
use super::fingerprint::Fingerprint;
use crate::domain::clip::{ClipStore, GeneratedClip, ResourceHandle, ResourceReleaser};
use crate::domain::session::SessionContext;
use crate::domain::voice::Provider;
use crate::infrastructure::repositories::{
    ClipMetadataRecord, ClipMetadataRepository, SynthesisRepository, SynthesisRequest,
};

/// Characters of trimmed text used for the persisted record title
const TITLE_MAX_CHARS: usize = 50;

/// Outcome of a synthesize call
#[derive(Debug, Clone)]
pub enum SynthesisOutcome {
    /// A new clip was generated with exactly one outbound call
    Generated(ResourceHandle),
    /// An identical config's clip was still live; no call was issued
    Reused(ResourceHandle),
    /// A request was already in flight for this instance; this call issued
    /// nothing and was not queued
    Dropped,
}

pub struct SynthesisService {
    synthesis_repo: Arc<dyn SynthesisRepository>,
    metadata_repo: Arc<dyn ClipMetadataRepository>,
    session: SessionContext,
    provider: Provider,
    audio_format: String,
    store: Mutex<ClipStore>,
    in_flight: AtomicBool,
}

impl SynthesisService {
    pub fn new(
        synthesis_repo: Arc<dyn SynthesisRepository>,
        metadata_repo: Arc<dyn ClipMetadataRepository>,
        session: SessionContext,
        provider: Provider,
        audio_format: impl Into<String>,
        releaser: Arc<dyn ResourceReleaser>,
    ) -> Self {
        Self {
            synthesis_repo,
            metadata_repo,
            session,
            provider,
            audio_format: audio_format.into(),
            store: Mutex::new(ClipStore::new(releaser)),
            in_flight: AtomicBool::new(false),
        }
    }

    /// The clip currently held by this instance, if any
    pub fn current_clip(&self) -> Option<GeneratedClip> {
        self.store.lock().current().cloned()
    }

    /// Release the cached clip (e.g. on teardown of the owning view)
    pub fn clear_clip(&self) {
        self.store.lock().clear();
    }

    /// Back-fill the cached clip's duration once playback metadata loads
    pub fn set_clip_duration(&self, duration_seconds: f32) {
        self.store.lock().set_duration(duration_seconds);
    }
}

#[async_trait]
pub trait SynthesisApi: Send + Sync {
    /// Turn a configuration into a playable resource handle
    ///
    /// This operation:
    /// - Validates the configuration at the boundary
    /// - Reuses the cached clip when the fingerprint is unchanged
    /// - Drops the call if a request is already in flight
    /// - Otherwise issues exactly one outbound call, stores the new clip
    ///   (releasing the prior one), and fires the metadata side-effect for
    ///   authenticated sessions
    async fn synthesize(&self, config: SynthesisConfig)
        -> Result<SynthesisOutcome, SynthesisError>;
}

#[async_trait]
impl SynthesisApi for SynthesisService {
    async fn synthesize(
        &self,
        config: SynthesisConfig,
    ) -> Result<SynthesisOutcome, SynthesisError> {
        // 1. Validate at the boundary
        config.validate()?;

        let fingerprint = Fingerprint::of(&config);

        // 2. Reuse the live clip when the config is unchanged
        {
            let store = self.store.lock();
            if let Some(clip) = store.current() {
                if Fingerprint::of(&clip.source) == fingerprint {
                    tracing::info!(
                        handle_id = %clip.handle.id(),
                        voice = %config.voice,
                        "Reusing cached clip for identical config"
                    );
                    return Ok(SynthesisOutcome::Reused(clip.handle.clone()));
                }
            }
        }

        // 3. Guard against concurrent requests: a second call while one is
        //    pending is dropped, not queued
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::warn!(
                voice = %config.voice,
                "Synthesis already in flight, dropping request"
            );
            return Ok(SynthesisOutcome::Dropped);
        }
        let _guard = InFlightGuard(&self.in_flight);

        // 4. Exactly one outbound call for this config
        let request = SynthesisRequest {
            text: config.trimmed_text().to_string(),
            voice: config.voice.provider_id(self.provider).to_string(),
            speed: config.rate,
        };

        tracing::info!(
            voice = %request.voice,
            text_length = request.text.chars().count(),
            speed = request.speed,
            "Requesting synthesis"
        );

        let audio = self.synthesis_repo.synthesize(&request).await.map_err(|e| {
            tracing::error!(error = %e, voice = %request.voice, "Synthesis request failed");
            SynthesisError::Failed(e.to_string())
        })?;

        // 5. Store the new clip; the store releases the prior handle first
        let handle = ResourceHandle::new(audio.bytes);
        let byte_len = handle.byte_len();
        self.store
            .lock()
            .store(GeneratedClip::new(handle.clone(), config.clone()));

        // 6. Best-effort metadata write, authenticated sessions only
        if self.session.is_authenticated() {
            self.persist_metadata(&config, byte_len);
        }

        tracing::info!(
            handle_id = %handle.id(),
            size_bytes = byte_len,
            voice = %config.voice,
            "Synthesis completed"
        );

        Ok(SynthesisOutcome::Generated(handle))
    }
}

impl SynthesisService {
    /// Fire-and-forget write of clip metadata
    ///
    /// Failures are logged and swallowed; they never affect the synthesis
    /// outcome or the stored clip.
    fn persist_metadata(&self, config: &SynthesisConfig, byte_len: usize) {
        let trimmed = config.trimmed_text();
        let record = ClipMetadataRecord {
            title: trimmed.chars().take(TITLE_MAX_CHARS).collect(),
            content: trimmed.to_string(),
            voice: config.voice.as_str().to_string(),
            speed: config.rate,
            pitch: config.pitch,
            volume: config.volume,
            format: self.audio_format.clone(),
            // Duration is only known once playback metadata loads
            duration: 0.0,
            file_size: byte_len as u64,
            is_public: false,
        };

        let repo = self.metadata_repo.clone();
        let user_id = self.session.user().map(|u| u.user_id);
        tokio::spawn(async move {
            match repo.save(&record).await {
                Ok(saved) => {
                    tracing::debug!(record_id = %saved.id, "Clip metadata persisted");
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        user_id = ?user_id,
                        "Failed to persist clip metadata, ignoring"
                    );
                }
            }
        });
    }
}

/// Clears the in-flight flag when the request completes, errors included
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
