//! Client-side synthesis and playback engine for VoiceText Pro.
//!
//! The engine turns a [`domain::synthesis::SynthesisConfig`] into playable
//! audio with a single outbound call per distinct configuration: identical
//! configs reuse the cached clip, concurrent requests are dropped while one
//! is in flight, and the previously cached clip is released exactly once
//! when superseded. Playback is driven by an explicit state machine that is
//! independent from synthesis.

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::clip::{ClipStore, GeneratedClip, ResourceHandle, ResourceReleaser};
pub use domain::playback::{MediaBackend, MediaEvent, PlaybackController, PlaybackState};
pub use domain::session::SessionContext;
pub use domain::synthesis::{SynthesisConfig, SynthesisOutcome, SynthesisService};
pub use domain::voice::Voice;
pub use error::{EngineError, EngineResult};
