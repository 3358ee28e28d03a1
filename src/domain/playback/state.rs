/// Lifecycle of a single media resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    Loading,
    Playing,
    Paused,
    Ended,
    Error,
}

/// Transient playback state, reset on stop and on new clips
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub phase: PlaybackPhase,
    /// 0–100; stays 0 until media duration is known
    pub progress_percent: f32,
    pub current_time_seconds: f32,
    /// 0 until metadata loads
    pub duration_seconds: f32,
}

impl PlaybackState {
    pub fn idle() -> Self {
        Self {
            phase: PlaybackPhase::Idle,
            progress_percent: 0.0,
            current_time_seconds: 0.0,
            duration_seconds: 0.0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.phase == PlaybackPhase::Paused
    }

    /// Zero the position and progress, keeping any known duration
    pub fn reset_progress(&mut self) {
        self.progress_percent = 0.0;
        self.current_time_seconds = 0.0;
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::idle()
    }
}
