#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;
use uuid::Uuid;

use voicetext_engine::domain::clip::ResourceReleaser;
use voicetext_engine::domain::playback::MediaBackend;
use voicetext_engine::domain::session::SessionContext;
use voicetext_engine::domain::synthesis::{SynthesisConfig, SynthesisService};
use voicetext_engine::domain::voice::{Provider, Voice};
use voicetext_engine::infrastructure::repositories::{
    ClipMetadataRecord, ClipMetadataRepository, PersistenceError, SavedClipRecord,
    SynthesisApiError, SynthesisRepository, SynthesisRequest, SynthesizedAudio,
};
use voicetext_engine::ResourceHandle;

/// Records every released handle id so tests can assert release-once
#[derive(Default)]
pub struct CountingReleaser {
    pub released: Mutex<Vec<Uuid>>,
}

impl ResourceReleaser for CountingReleaser {
    fn release(&self, handle_id: Uuid) {
        self.released.lock().push(handle_id);
    }
}

/// Programmable synthesis endpoint double
///
/// Counts outbound calls, can be told to fail, and can hold a request open
/// so tests can observe the in-flight guard.
pub struct FakeSynthesisRepository {
    calls: AtomicUsize,
    response: Mutex<Result<Vec<u8>, String>>,
    hold_gate: Mutex<Option<Arc<Notify>>>,
    /// Signalled when a request reaches the repository
    pub entered: Arc<Notify>,
}

impl FakeSynthesisRepository {
    pub fn returning(bytes: Vec<u8>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            response: Mutex::new(Ok(bytes)),
            hold_gate: Mutex::new(None),
            entered: Arc::new(Notify::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make subsequent requests fail with a service error
    pub fn fail_with(&self, message: &str) {
        *self.response.lock() = Err(message.to_string());
    }

    /// Hold the next requests open until the returned gate is notified
    pub fn hold(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.hold_gate.lock() = Some(gate.clone());
        gate
    }
}

#[async_trait]
impl SynthesisRepository for FakeSynthesisRepository {
    async fn synthesize(
        &self,
        _request: &SynthesisRequest,
    ) -> Result<SynthesizedAudio, SynthesisApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();

        let gate = self.hold_gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let response = self.response.lock().clone();
        match response {
            Ok(bytes) => Ok(SynthesizedAudio {
                bytes,
                content_type: "audio/mpeg".to_string(),
            }),
            Err(message) => Err(SynthesisApiError::Service {
                status: 502,
                message,
            }),
        }
    }
}

/// Recording persistence endpoint double
pub struct RecordingMetadataRepository {
    pub saved: Mutex<Vec<ClipMetadataRecord>>,
    attempts: AtomicUsize,
    fail: bool,
    /// Signalled after every save attempt, success or failure
    pub attempted: Arc<Notify>,
}

impl RecordingMetadataRepository {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            saved: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            fail: false,
            attempted: Arc::new(Notify::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            saved: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            fail: true,
            attempted: Arc::new(Notify::new()),
        })
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClipMetadataRepository for RecordingMetadataRepository {
    async fn save(&self, record: &ClipMetadataRecord) -> Result<SavedClipRecord, PersistenceError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let result = if self.fail {
            Err(PersistenceError::Service {
                status: 503,
                message: "persistence unavailable".to_string(),
            })
        } else {
            self.saved.lock().push(record.clone());
            Ok(SavedClipRecord {
                id: Uuid::new_v4(),
                title: record.title.clone(),
                created_at: chrono::Utc::now(),
            })
        };
        self.attempted.notify_one();
        result
    }
}

/// Media element double that records every backend call
#[derive(Default)]
pub struct ScriptedMediaBackend {
    pub loads: Vec<Uuid>,
    pub plays: usize,
    pub pauses: usize,
    pub stops: usize,
}

impl MediaBackend for ScriptedMediaBackend {
    fn load(&mut self, handle: &ResourceHandle) -> Result<(), String> {
        self.loads.push(handle.id());
        Ok(())
    }

    fn play(&mut self) -> Result<(), String> {
        self.plays += 1;
        Ok(())
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }

    fn stop(&mut self) {
        self.stops += 1;
    }
}

pub fn sample_config() -> SynthesisConfig {
    SynthesisConfig::new("Xin chào", Voice::BanMai, 1.0, 1.0, 1.0)
}

pub fn build_service(
    synthesis_repo: Arc<FakeSynthesisRepository>,
    metadata_repo: Arc<RecordingMetadataRepository>,
    session: SessionContext,
    releaser: Arc<CountingReleaser>,
) -> Arc<SynthesisService> {
    Arc::new(SynthesisService::new(
        synthesis_repo,
        metadata_repo,
        session,
        Provider::Fpt,
        "mp3",
        releaser,
    ))
}
