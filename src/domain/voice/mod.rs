use serde::{Deserialize, Serialize};

/// Voices offered by the VoiceText Pro player
///
/// Each voice is a fixed catalogue entry; the provider-specific identifier
/// sent to the synthesis endpoint is resolved through [`Voice::provider_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Voice {
    #[serde(rename = "ban-mai")]
    BanMai,
    #[serde(rename = "le-minh")]
    LeMinh,
    #[serde(rename = "thu-minh")]
    ThuMinh,
    #[serde(rename = "gia-huy")]
    GiaHuy,
    #[serde(rename = "my-an")]
    MyAn,
    #[serde(rename = "lan-nhi")]
    LanNhi,
    #[serde(rename = "linh-san")]
    LinhSan,
    #[serde(rename = "minh-quang")]
    MinhQuang,
}

/// TTS providers the backend can route a request to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Fpt,
    OpenAi,
}

impl Voice {
    /// Get the catalogue identifier as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::BanMai => "ban-mai",
            Voice::LeMinh => "le-minh",
            Voice::ThuMinh => "thu-minh",
            Voice::GiaHuy => "gia-huy",
            Voice::MyAn => "my-an",
            Voice::LanNhi => "lan-nhi",
            Voice::LinhSan => "linh-san",
            Voice::MinhQuang => "minh-quang",
        }
    }

    /// Parse a catalogue identifier, rejecting anything outside the catalogue
    pub fn parse(value: &str) -> Option<Voice> {
        match value {
            "ban-mai" => Some(Voice::BanMai),
            "le-minh" => Some(Voice::LeMinh),
            "thu-minh" => Some(Voice::ThuMinh),
            "gia-huy" => Some(Voice::GiaHuy),
            "my-an" => Some(Voice::MyAn),
            "lan-nhi" => Some(Voice::LanNhi),
            "linh-san" => Some(Voice::LinhSan),
            "minh-quang" => Some(Voice::MinhQuang),
            _ => None,
        }
    }

    /// Resolve the provider-specific voice identifier for the synthesis call
    pub fn provider_id(&self, provider: Provider) -> &'static str {
        match provider {
            Provider::Fpt => match self {
                Voice::BanMai => "banmai",
                Voice::LeMinh => "leminh",
                Voice::ThuMinh => "thuminh",
                Voice::GiaHuy => "giahuy",
                Voice::MyAn => "myan",
                Voice::LanNhi => "lannhi",
                Voice::LinhSan => "linhsan",
                Voice::MinhQuang => "minhquang",
            },
            // OpenAI has no Vietnamese-specific voices; map each catalogue
            // entry to the closest-sounding multilingual voice
            Provider::OpenAi => match self {
                Voice::BanMai => "alloy",
                Voice::LeMinh => "onyx",
                Voice::ThuMinh => "nova",
                Voice::GiaHuy => "echo",
                Voice::MyAn => "shimmer",
                Voice::LanNhi => "fable",
                Voice::LinhSan => "nova",
                Voice::MinhQuang => "onyx",
            },
        }
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_voice() {
        assert_eq!(Voice::parse("ban-mai"), Some(Voice::BanMai));
        assert_eq!(Voice::parse("minh-quang"), Some(Voice::MinhQuang));
    }

    #[test]
    fn test_parse_rejects_unknown_voice() {
        assert_eq!(Voice::parse("joanna"), None);
        assert_eq!(Voice::parse(""), None);
    }

    #[test]
    fn test_fpt_provider_mapping() {
        assert_eq!(Voice::BanMai.provider_id(Provider::Fpt), "banmai");
        assert_eq!(Voice::LanNhi.provider_id(Provider::Fpt), "lannhi");
    }

    #[test]
    fn test_openai_provider_mapping_uses_catalogue_voices() {
        let openai_voices = ["alloy", "echo", "fable", "onyx", "nova", "shimmer"];
        for voice in [
            Voice::BanMai,
            Voice::LeMinh,
            Voice::ThuMinh,
            Voice::GiaHuy,
            Voice::MyAn,
            Voice::LanNhi,
            Voice::LinhSan,
            Voice::MinhQuang,
        ] {
            assert!(openai_voices.contains(&voice.provider_id(Provider::OpenAi)));
        }
    }
}
