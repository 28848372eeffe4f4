use crate::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Behavior of the keypad digit 3 option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dtmf3Action {
    /// Announce a transfer to a human and stay on the line
    Transfer,
    /// Say goodbye and hang up
    EndCall,
}

impl Dtmf3Action {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "transfer" => Some(Dtmf3Action::Transfer),
            "end_call" | "endcall" | "hangup" => Some(Dtmf3Action::EndCall),
            _ => None,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Speech
    pub language: String,
    pub tts_engine: String,
    pub elevenlabs_api_key: String,
    pub elevenlabs_voice_id: String,

    // Call behavior
    pub dtmf_three: Dtmf3Action,

    // Transcript export
    pub webhook_url: String,
    pub transcript_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "pt-PT".to_string(),
            tts_engine: "elevenlabs".to_string(),
            elevenlabs_api_key: String::new(),
            // "Ana", the default European Portuguese voice
            elevenlabs_voice_id: "FIEA0c5UHH9JnvWaQrXS".to_string(),
            dtmf_three: Dtmf3Action::Transfer,
            webhook_url: String::new(),
            transcript_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("quitanda/transcripts")
                .to_string_lossy()
                .to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything unset. `.env` files are honored by the caller
    /// (dotenvy) before this runs.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("QUITANDA_LANGUAGE") {
            config.language = v;
        }
        if let Ok(v) = std::env::var("QUITANDA_TTS") {
            config.tts_engine = v;
        }
        if let Ok(v) = std::env::var("ELEVENLABS_API_KEY") {
            config.elevenlabs_api_key = v;
        }
        if let Ok(v) = std::env::var("ELEVENLABS_VOICE_ID") {
            config.elevenlabs_voice_id = v;
        }
        if let Ok(v) = std::env::var("QUITANDA_DTMF3") {
            config.dtmf_three = Dtmf3Action::parse(&v).ok_or_else(|| {
                AssistantError::Config(format!(
                    "invalid QUITANDA_DTMF3 value '{}' (expected 'transfer' or 'end_call')",
                    v
                ))
            })?;
        }
        if let Ok(v) = std::env::var("MAKE_WEBHOOK_URL") {
            config.webhook_url = v;
        }
        if let Ok(v) = std::env::var("QUITANDA_TRANSCRIPT_DIR") {
            config.transcript_dir = v;
        }

        Ok(config)
    }
}
