#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("playback failed: {0}")]
    Failed(String),
}
