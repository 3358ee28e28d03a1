use serde::{Deserialize, Serialize};

use super::error::SynthesisError;
use crate::domain::voice::Voice;

/// Maximum synthesizable text length, in characters
pub const MAX_TEXT_CHARS: usize = 5000;

pub const MIN_RATE: f32 = 0.5;
pub const MAX_RATE: f32 = 2.0;
pub const MIN_PITCH: f32 = 0.5;
pub const MAX_PITCH: f32 = 2.0;
pub const MIN_VOLUME: f32 = 0.0;
pub const MAX_VOLUME: f32 = 1.0;

/// Immutable synthesis request configuration
///
/// A closed record: deserialization rejects unknown fields, and
/// [`SynthesisConfig::validate`] rejects out-of-range values at the
/// boundary. Two configs are identical iff every field matches, with text
/// compared after trimming (see [`Fingerprint`]).
///
/// [`Fingerprint`]: super::Fingerprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisConfig {
    pub text: String,
    pub voice: Voice,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl SynthesisConfig {
    pub fn new(
        text: impl Into<String>,
        voice: Voice,
        rate: f32,
        pitch: f32,
        volume: f32,
    ) -> Self {
        Self {
            text: text.into(),
            voice,
            rate,
            pitch,
            volume,
        }
    }

    /// The text as sent to the synthesis endpoint
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Validate field ranges before any network call
    pub fn validate(&self) -> Result<(), SynthesisError> {
        let trimmed = self.trimmed_text();

        if trimmed.is_empty() {
            return Err(SynthesisError::Invalid("Text cannot be empty".to_string()));
        }

        let char_count = trimmed.chars().count();
        if char_count > MAX_TEXT_CHARS {
            return Err(SynthesisError::Invalid(format!(
                "Text must be {} characters or less, got {}",
                MAX_TEXT_CHARS, char_count
            )));
        }

        // Range checks reject NaN as well: a NaN never satisfies `contains`
        if !(MIN_RATE..=MAX_RATE).contains(&self.rate) {
            return Err(SynthesisError::Invalid(format!(
                "Rate must be between {} and {}, got {}",
                MIN_RATE, MAX_RATE, self.rate
            )));
        }

        if !(MIN_PITCH..=MAX_PITCH).contains(&self.pitch) {
            return Err(SynthesisError::Invalid(format!(
                "Pitch must be between {} and {}, got {}",
                MIN_PITCH, MAX_PITCH, self.pitch
            )));
        }

        if !(MIN_VOLUME..=MAX_VOLUME).contains(&self.volume) {
            return Err(SynthesisError::Invalid(format!(
                "Volume must be between {} and {}, got {}",
                MIN_VOLUME, MAX_VOLUME, self.volume
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> SynthesisConfig {
        SynthesisConfig::new("Xin chào", Voice::BanMai, 1.0, 1.0, 1.0)
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_empty_text_rejected() {
        let mut config = valid_config();
        config.text = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_whitespace_only_text_rejected() {
        let mut config = valid_config();
        config.text = "   \n\t ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_text_over_limit_rejected() {
        let mut config = valid_config();
        config.text = "à".repeat(MAX_TEXT_CHARS + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_text_at_limit_accepted() {
        let mut config = valid_config();
        config.text = "à".repeat(MAX_TEXT_CHARS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_rates_rejected() {
        for rate in [0.4, 2.1, -1.0, f32::NAN] {
            let mut config = valid_config();
            config.rate = rate;
            assert!(config.validate().is_err(), "rate {} should be rejected", rate);
        }
    }

    #[test]
    fn test_valid_rates_accepted() {
        for rate in [0.5, 1.0, 1.5, 2.0] {
            let mut config = valid_config();
            config.rate = rate;
            assert!(config.validate().is_ok(), "rate {} should be accepted", rate);
        }
    }

    #[test]
    fn test_out_of_range_pitch_and_volume_rejected() {
        let mut config = valid_config();
        config.pitch = 2.5;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.volume = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_fields_rejected_on_deserialization() {
        let json = r#"{
            "text": "Xin chào",
            "voice": "ban-mai",
            "rate": 1.0,
            "pitch": 1.0,
            "volume": 1.0,
            "emotion": "cheerful"
        }"#;
        assert!(serde_json::from_str::<SynthesisConfig>(json).is_err());
    }

    #[test]
    fn test_known_fields_deserialize() {
        let json = r#"{
            "text": "Xin chào",
            "voice": "lan-nhi",
            "rate": 1.25,
            "pitch": 0.9,
            "volume": 0.8
        }"#;
        let config: SynthesisConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.voice, Voice::LanNhi);
        assert_eq!(config.rate, 1.25);
    }
}
