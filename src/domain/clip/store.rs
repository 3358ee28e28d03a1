use std::sync::Arc;

use super::handle::{ResourceHandle, ResourceReleaser};
use crate::domain::synthesis::SynthesisConfig;

/// A synthesized clip together with the configuration that produced it
///
/// Duration starts unknown and is back-filled once playback metadata loads.
#[derive(Debug, Clone)]
pub struct GeneratedClip {
    pub handle: ResourceHandle,
    pub duration_seconds: Option<f32>,
    pub source: SynthesisConfig,
}

impl GeneratedClip {
    pub fn new(handle: ResourceHandle, source: SynthesisConfig) -> Self {
        Self {
            handle,
            duration_seconds: None,
            source,
        }
    }
}

/// Single-slot owner of the live audio resource
///
/// Invariant: at most one clip is live at a time, and replacing or clearing
/// it releases the prior handle's resource exactly once. Dropping the store
/// releases whatever is still held.
pub struct ClipStore {
    current: Option<GeneratedClip>,
    releaser: Arc<dyn ResourceReleaser>,
}

impl ClipStore {
    pub fn new(releaser: Arc<dyn ResourceReleaser>) -> Self {
        Self {
            current: None,
            releaser,
        }
    }

    /// Replace the live clip, releasing the previous resource first
    pub fn store(&mut self, clip: GeneratedClip) {
        self.release_current();
        tracing::debug!(
            handle_id = %clip.handle.id(),
            size_bytes = clip.handle.byte_len(),
            "Clip stored"
        );
        self.current = Some(clip);
    }

    /// Release the live clip, if any
    pub fn clear(&mut self) {
        self.release_current();
    }

    pub fn current(&self) -> Option<&GeneratedClip> {
        self.current.as_ref()
    }

    /// Back-fill the clip duration once playback metadata is known
    pub fn set_duration(&mut self, duration_seconds: f32) {
        if let Some(clip) = self.current.as_mut() {
            clip.duration_seconds = Some(duration_seconds);
        }
    }

    fn release_current(&mut self) {
        // Option::take guards against double release
        if let Some(previous) = self.current.take() {
            self.releaser.release(previous.handle.id());
        }
    }
}

impl Drop for ClipStore {
    fn drop(&mut self) {
        self.release_current();
    }
}
