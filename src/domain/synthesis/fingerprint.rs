use super::config::SynthesisConfig;
use crate::domain::voice::Voice;

/// Equality key over a synthesis configuration
///
/// Two fingerprints compare equal iff every field of the source configs
/// matches, with text trimmed of leading and trailing whitespace. No other
/// normalization is applied; voice and numeric fields must already be
/// canonical.
#[derive(Debug, Clone, PartialEq)]
pub struct Fingerprint {
    text: String,
    voice: Voice,
    rate: f32,
    pitch: f32,
    volume: f32,
}

impl Fingerprint {
    pub fn of(config: &SynthesisConfig) -> Self {
        Self {
            text: config.trimmed_text().to_string(),
            voice: config.voice,
            rate: config.rate,
            pitch: config.pitch,
            volume: config.volume,
        }
    }
}
