use crate::domain::clip::ResourceHandle;

/// Seam between the playback state machine and the real media element
///
/// A production implementation wraps an audio element or a native output
/// device; tests drive the controller with a scripted double. The backend
/// reports progress and completion asynchronously through [`MediaEvent`]s
/// fed to the controller.
pub trait MediaBackend {
    /// Attach a clip's audio bytes to the media element
    fn load(&mut self, handle: &ResourceHandle) -> Result<(), String>;

    /// Begin or resume playback at the current position
    fn play(&mut self) -> Result<(), String>;

    /// Halt playback, keeping the current position
    fn pause(&mut self);

    /// Halt playback and reset the position to zero
    fn stop(&mut self);
}

/// Notifications from the media element, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Media duration became known
    MetadataLoaded { duration_seconds: f32 },
    /// Playback actually started after a load
    Started,
    /// Periodic position tick during playback
    TimeUpdate { current_time_seconds: f32 },
    /// Natural end of the media
    Ended,
    /// Media element error during load or playback
    Failed { message: String },
}
