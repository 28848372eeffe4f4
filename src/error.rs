//! Quitanda Error Types
//!
//! Centralized error handling for the assistant.

use thiserror::Error;

/// Central error type for Quitanda
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TTS engine error: {0}")]
    Tts(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Transcript export error: {0}")]
    Transcript(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Quitanda operations
pub type Result<T> = std::result::Result<T, AssistantError>;
