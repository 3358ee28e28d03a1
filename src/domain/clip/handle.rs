use std::sync::Arc;
use uuid::Uuid;

/// Opaque reference to synthesized audio bytes
///
/// Handles are cheap to clone; all clones point at the same payload. The
/// underlying resource is released through the owning [`ClipStore`], never
/// by the handle itself: playback borrows a handle but does not manage its
/// lifetime.
///
/// [`ClipStore`]: super::ClipStore
#[derive(Debug, Clone)]
pub struct ResourceHandle {
    id: Uuid,
    data: Arc<Vec<u8>>,
}

impl ResourceHandle {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            data: Arc::new(bytes),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }
}

/// Hook invoked exactly once when a handle's underlying resource is
/// superseded or cleared
///
/// The browser original revokes a temporary object URL here; native
/// embedders can return buffers to a pool or close file handles. The store
/// guarantees release-once semantics regardless of the implementation.
pub trait ResourceReleaser: Send + Sync {
    fn release(&self, handle_id: Uuid);
}

/// Default releaser: the handle's payload is dropped with its last clone,
/// so there is nothing left to free beyond recording the event
#[derive(Debug, Default)]
pub struct LoggingReleaser;

impl ResourceReleaser for LoggingReleaser {
    fn release(&self, handle_id: Uuid) {
        tracing::debug!(handle_id = %handle_id, "Audio resource released");
    }
}
