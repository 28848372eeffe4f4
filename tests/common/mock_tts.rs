//! Mock TTS Engine for Testing
//!
//! Records all synthesized text for verification.

use async_trait::async_trait;
use quitanda::error::{AssistantError, Result};
use quitanda::tts::TtsEngine;
use std::sync::{Arc, Mutex};

/// Mock TTS engine that records synthesized text
#[derive(Debug, Default)]
pub struct MockTts {
    /// All text that was "synthesized"
    pub spoken: Arc<Mutex<Vec<String>>>,
    /// Simulate failure on every synthesis
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockTts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all synthesized phrases
    pub fn get_spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }

    /// Check if a phrase was synthesized
    pub fn was_spoken(&self, text: &str) -> bool {
        self.spoken.lock().unwrap().iter().any(|s| s.contains(text))
    }

    pub fn set_failing(&self, failing: bool) {
        *self.should_fail.lock().unwrap() = failing;
    }
}

#[async_trait]
impl TtsEngine for MockTts {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        if *self.should_fail.lock().unwrap() {
            return Err(AssistantError::Tts("Mock TTS failure".to_string()));
        }
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(vec![0u8; 1024])
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_tts_records_synthesis() {
        let mock = MockTts::new();
        mock.synthesize("olá").await.unwrap();
        mock.synthesize("boa tarde").await.unwrap();

        assert!(mock.was_spoken("olá"));
        assert!(mock.was_spoken("boa tarde"));
        assert_eq!(mock.get_spoken().len(), 2);
    }
}
