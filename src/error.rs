use crate::domain::playback::PlaybackError;
use crate::domain::synthesis::SynthesisError;

/// Main engine error type
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("Playback failed: {0}")]
    Playback(#[from] PlaybackError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Custom result type for the engine
pub type EngineResult<T> = Result<T, EngineError>;
