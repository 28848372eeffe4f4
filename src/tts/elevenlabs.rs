//! ElevenLabs TTS backend over HTTP

use super::TtsEngine;
use crate::config::Config;
use crate::error::{AssistantError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio_retry::strategy::FixedInterval;
use tokio_retry::Retry;
use tracing::{debug, info};

const API_BASE: &str = "https://api.elevenlabs.io/v1/text-to-speech";
const MODEL_ID: &str = "eleven_multilingual_v2";

// Lower stability trades a little voice consistency for latency
const STABILITY: f32 = 0.3;
const SIMILARITY_BOOST: f32 = 0.6;

const MAX_ATTEMPTS: usize = 3;
const RETRY_DELAY: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub struct ElevenLabsEngine {
    api_key: String,
    voice_id: String,
    client: reqwest::Client,
}

impl ElevenLabsEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.elevenlabs_api_key.clone(),
            voice_id: config.elevenlabs_voice_id.clone(),
            client: reqwest::Client::new(),
        }
    }

    async fn request(&self, text: &str) -> Result<Vec<u8>> {
        let url = format!("{}/{}", API_BASE, self.voice_id);
        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .json(&serde_json::json!({
                "text": text,
                "model_id": MODEL_ID,
                "voice_settings": {
                    "stability": STABILITY,
                    "similarity_boost": SIMILARITY_BOOST,
                    "style": 0.0,
                    "use_speaker_boost": true,
                },
            }))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Tts(format!(
                "ElevenLabs returned status {}",
                status
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl TtsEngine for ElevenLabsEngine {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        debug!("📢 Synthesizing: '{}'", text);

        let strategy = FixedInterval::new(RETRY_DELAY).take(MAX_ATTEMPTS - 1);
        let audio = Retry::spawn(strategy, || self.request(text)).await?;

        info!("Synthesized {} bytes of audio", audio.len());
        Ok(audio)
    }

    fn name(&self) -> &str {
        "elevenlabs"
    }
}
