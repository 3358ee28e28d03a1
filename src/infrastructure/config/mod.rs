use serde::Deserialize;
use std::env;

use crate::domain::voice::Provider;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the VoiceText Pro backend (synthesis + persistence)
    pub api_base_url: String,
    /// Timeout for the synthesis request, which awaits the full byte payload
    pub synthesis_timeout_secs: u64,
    /// Container format reported in persisted records
    pub audio_format: String,
    /// Bearer token for authenticated persistence calls
    pub access_token: Option<String>,
    /// Which provider the backend routes synthesis to
    pub provider: Provider,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            api_base_url: env::var("VOICETEXT_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            synthesis_timeout_secs: env::var("SYNTHESIS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()?,
            audio_format: env::var("AUDIO_FORMAT").unwrap_or_else(|_| "mp3".to_string()),
            access_token: env::var("VOICETEXT_ACCESS_TOKEN").ok(),
            provider: env::var("TTS_PROVIDER")
                .unwrap_or_else(|_| "fpt".to_string())
                .parse::<String>()
                .map(|s| match s.to_lowercase().as_str() {
                    "openai" => Provider::OpenAi,
                    _ => Provider::Fpt,
                })?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
