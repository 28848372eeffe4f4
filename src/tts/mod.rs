//! TTS (Text-to-Speech) Module
//!
//! Provides a unified interface for speech synthesis backends. Engines
//! return raw audio bytes; playing them into the call is the transport's
//! job.

use crate::config::Config;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub mod elevenlabs;
pub mod null;

/// Trait for TTS engines
#[async_trait]
pub trait TtsEngine: Send + Sync + std::fmt::Debug {
    /// Render the given text to audio bytes
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Factory to create the configured TTS engine
pub fn create_engine(config: &Config) -> Result<Arc<dyn TtsEngine>> {
    info!("🛠️ Creating TTS engine: {}", config.tts_engine);
    let engine: Arc<dyn TtsEngine> = match config.tts_engine.as_str() {
        "elevenlabs" => {
            if config.elevenlabs_api_key.is_empty() {
                warn!("  - ELEVENLABS_API_KEY not set, speech synthesis disabled");
                Arc::new(null::NullEngine::new())
            } else {
                info!(
                    "  - Using ElevenLabs TTS (Voice: {})",
                    config.elevenlabs_voice_id
                );
                Arc::new(elevenlabs::ElevenLabsEngine::new(config))
            }
        }
        "null" | "none" => Arc::new(null::NullEngine::new()),
        _ => {
            warn!(
                "  - Unknown engine '{}', speech synthesis disabled",
                config.tts_engine
            );
            Arc::new(null::NullEngine::new())
        }
    };
    info!("✅ TTS engine '{}' initialized", engine.name());
    Ok(engine)
}
