#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesis failed: {0}")]
    Failed(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
