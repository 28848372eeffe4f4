//! Conversation Transcript
//!
//! Records user and assistant turns per session and exports them when the
//! call ends: always to a local JSON file, and to a webhook when one is
//! configured.

use crate::config::Config;
use crate::error::{AssistantError, Result};
use crate::session::Session;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    pub role: Role,
    pub content: String,
    pub timestamp: String,
}

/// Ordered conversation log for one session
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn add_user(&mut self, content: &str) {
        self.push(Role::User, content);
    }

    pub fn add_assistant(&mut self, content: &str) {
        self.push(Role::Assistant, content);
    }

    fn push(&mut self, role: Role, content: &str) {
        self.entries.push(TranscriptEntry {
            role,
            content: content.to_string(),
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Writes transcripts out when sessions close
pub struct TranscriptExporter {
    webhook_url: Option<String>,
    output_dir: PathBuf,
    client: reqwest::Client,
}

impl TranscriptExporter {
    pub fn new(config: &Config) -> Self {
        let webhook_url = if config.webhook_url.is_empty() {
            None
        } else {
            Some(config.webhook_url.clone())
        };
        Self {
            webhook_url,
            output_dir: PathBuf::from(&config.transcript_dir),
            client: reqwest::Client::new(),
        }
    }

    /// Export one finished session. Sessions that never spoke are skipped.
    pub async fn export(&self, session: &Session) -> Result<()> {
        if session.transcript.is_empty() {
            return Ok(());
        }

        let payload = serde_json::json!({
            "room": session.room,
            "language": session.language,
            "transcript": session.transcript,
            "reservation": session.reservation,
            "summary": session.reservation.summary(),
        });

        self.write_local(&session.room, &payload)?;

        if let Some(url) = &self.webhook_url {
            let response = self.client.post(url).json(&payload).send().await?;
            if !response.status().is_success() {
                return Err(AssistantError::Transcript(format!(
                    "webhook returned status {}",
                    response.status()
                )));
            }
            info!(room = %session.room, "transcript sent to webhook");
        } else {
            debug!(room = %session.room, "webhook not configured, transcript kept locally");
        }

        Ok(())
    }

    fn write_local(&self, room: &str, payload: &serde_json::Value) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;

        let safe_room: String = room
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        let filename = format!(
            "{}_{}.json",
            safe_room,
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        );
        let path = self.output_dir.join(filename);

        std::fs::write(&path, serde_json::to_string_pretty(payload)?)?;
        debug!(path = %path.display(), "transcript written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_records_in_order() {
        let mut transcript = Transcript::default();
        transcript.add_user("quero reservar");
        transcript.add_assistant("Para que dia deseja a reserva?");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].role, Role::User);
        assert_eq!(transcript.entries()[1].role, Role::Assistant);
        assert!(transcript.entries()[1].content.contains("dia"));
    }

    #[test]
    fn test_transcript_serializes() {
        let mut transcript = Transcript::default();
        transcript.add_user("olá");
        let json = serde_json::to_string(&transcript).unwrap();
        assert!(json.contains("user"));
        assert!(json.contains("olá"));
    }

    #[test]
    fn test_export_writes_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            transcript_dir: dir.path().to_string_lossy().to_string(),
            ..Config::default()
        };
        let exporter = TranscriptExporter::new(&config);

        let mut session = crate::session::Session::new("room/1", "pt-PT");
        session.transcript.add_user("boa tarde");

        tokio_test::block_on(exporter.export(&session)).unwrap();

        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
        let content =
            std::fs::read_to_string(files[0].as_ref().unwrap().path()).unwrap();
        assert!(content.contains("boa tarde"));
        assert!(content.contains("room/1"));
    }

    #[test]
    fn test_export_skips_silent_session() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            transcript_dir: dir.path().to_string_lossy().to_string(),
            ..Config::default()
        };
        let exporter = TranscriptExporter::new(&config);
        let session = crate::session::Session::new("quiet", "pt-PT");

        tokio_test::block_on(exporter.export(&session)).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
