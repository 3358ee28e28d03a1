pub mod config;
pub mod error;
pub mod fingerprint;
pub mod service;

pub use config::SynthesisConfig;
pub use error::SynthesisError;
pub use fingerprint::Fingerprint;
pub use service::{SynthesisApi, SynthesisOutcome, SynthesisService};
