//! Silent fallback TTS engine

use super::TtsEngine;
use crate::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Engine that renders nothing. Used when no synthesis provider is
/// configured so the dialog keeps working in text-only form.
#[derive(Debug)]
pub struct NullEngine;

impl Default for NullEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NullEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TtsEngine for NullEngine {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        debug!("(muted) {}", text);
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "null"
    }
}
