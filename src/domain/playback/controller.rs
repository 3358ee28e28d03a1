use uuid::Uuid;

use super::backend::{MediaBackend, MediaEvent};
use super::error::PlaybackError;
use super::state::{PlaybackPhase, PlaybackState};
use crate::domain::clip::ResourceHandle;

/// Explicit state machine over a single media resource
///
/// Idle → Loading → Playing ⇄ Paused → Ended, with Error reachable from
/// Loading or Playing. The controller borrows resource handles for the
/// duration of a play session; ownership stays with the clip store.
pub struct PlaybackController<B: MediaBackend> {
    backend: B,
    state: PlaybackState,
    loaded: Option<Uuid>,
}

impl<B: MediaBackend> PlaybackController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: PlaybackState::idle(),
            loaded: None,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Start, resume, or restart playback of the given clip
    ///
    /// Resuming a paused clip does not re-fetch it; a clip not yet attached
    /// to the media element is loaded first and the machine passes through
    /// Loading until the backend reports [`MediaEvent::Started`].
    pub fn play(&mut self, handle: &ResourceHandle) -> Result<(), PlaybackError> {
        let same_clip = self.loaded == Some(handle.id());

        match self.state.phase {
            PlaybackPhase::Playing if same_clip => Ok(()),
            PlaybackPhase::Paused if same_clip => {
                self.backend.play().map_err(|e| self.fail(e))?;
                self.state.phase = PlaybackPhase::Playing;
                Ok(())
            }
            PlaybackPhase::Ended if same_clip => {
                // Replay from the start; the media is already attached
                self.backend.stop();
                self.state.reset_progress();
                self.backend.play().map_err(|e| self.fail(e))?;
                self.state.phase = PlaybackPhase::Playing;
                Ok(())
            }
            _ => {
                if !same_clip {
                    self.backend.load(handle).map_err(|e| self.fail(e))?;
                    self.loaded = Some(handle.id());
                    self.state = PlaybackState::idle();
                }
                self.backend.play().map_err(|e| self.fail(e))?;
                self.state.phase = PlaybackPhase::Loading;
                tracing::debug!(handle_id = %handle.id(), "Playback loading");
                Ok(())
            }
        }
    }

    /// Pause playback; a no-op outside of Playing
    pub fn pause(&mut self) {
        if self.state.phase == PlaybackPhase::Playing {
            self.backend.pause();
            self.state.phase = PlaybackPhase::Paused;
        }
    }

    /// Reset to Idle with zeroed progress; a no-op when already Idle
    pub fn stop(&mut self) {
        if self.state.phase == PlaybackPhase::Idle {
            return;
        }
        self.backend.stop();
        self.state.phase = PlaybackPhase::Idle;
        self.state.reset_progress();
    }

    /// Feed a media element notification through the state machine
    ///
    /// Returns an error only for media failures, so the caller can surface
    /// a generic playback-failure signal to the user.
    pub fn handle_event(&mut self, event: MediaEvent) -> Result<(), PlaybackError> {
        match event {
            MediaEvent::MetadataLoaded { duration_seconds } => {
                self.state.duration_seconds = duration_seconds;
                Ok(())
            }
            MediaEvent::Started => {
                if self.state.phase == PlaybackPhase::Loading {
                    self.state.phase = PlaybackPhase::Playing;
                }
                Ok(())
            }
            MediaEvent::TimeUpdate {
                current_time_seconds,
            } => {
                if self.state.phase == PlaybackPhase::Playing {
                    self.state.current_time_seconds = current_time_seconds;
                    self.state.progress_percent = if self.state.duration_seconds > 0.0 {
                        (current_time_seconds / self.state.duration_seconds * 100.0).min(100.0)
                    } else {
                        // Duration unknown until metadata loads
                        0.0
                    };
                }
                Ok(())
            }
            MediaEvent::Ended => {
                if self.state.phase == PlaybackPhase::Playing {
                    self.state.phase = PlaybackPhase::Ended;
                    self.state.progress_percent = 100.0;
                    self.state.current_time_seconds = self.state.duration_seconds;
                }
                Ok(())
            }
            MediaEvent::Failed { message } => match self.state.phase {
                PlaybackPhase::Loading | PlaybackPhase::Playing => {
                    self.backend.stop();
                    Err(self.fail(message))
                }
                _ => {
                    tracing::warn!(error = %message, "Media failure outside active playback, ignoring");
                    Ok(())
                }
            },
        }
    }

    /// Enter the Error state and force a reload on the next play
    fn fail(&mut self, message: String) -> PlaybackError {
        tracing::error!(error = %message, "Playback failed");
        self.state.phase = PlaybackPhase::Error;
        self.state.reset_progress();
        self.loaded = None;
        PlaybackError::Failed(message)
    }
}
