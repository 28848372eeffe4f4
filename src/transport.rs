//! Session Transport
//!
//! Capability interface to the call infrastructure: it delivers input
//! events per room, accepts synthesized audio for playback and executes
//! call actions. The real deployment sits behind a WebRTC/telephony
//! framework; the implementations here are a channel-backed transport for
//! embedding and tests, and a console driver for local development.

use crate::error::Result;
use crate::event::InputEvent;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Trait for call transports
#[async_trait]
pub trait SessionTransport: Send {
    /// Next `(room, event)` pair, or `None` when the transport shuts down
    async fn next_event(&mut self) -> Option<(String, InputEvent)>;

    /// Play synthesized audio into the room
    async fn publish_audio(&mut self, room: &str, audio: &[u8]) -> Result<()>;

    /// Hang up the call in the room
    async fn end_call(&mut self, room: &str) -> Result<()>;
}

/// Transport fed through an in-process channel.
///
/// The sender half is handed to whatever produces events (an SDK binding,
/// a test script); audio playback is a no-op.
pub struct ChannelTransport {
    rx: mpsc::Receiver<(String, InputEvent)>,
}

impl ChannelTransport {
    pub fn new(capacity: usize) -> (Self, mpsc::Sender<(String, InputEvent)>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { rx }, tx)
    }
}

#[async_trait]
impl SessionTransport for ChannelTransport {
    async fn next_event(&mut self) -> Option<(String, InputEvent)> {
        self.rx.recv().await
    }

    async fn publish_audio(&mut self, room: &str, audio: &[u8]) -> Result<()> {
        debug!(%room, "publishing {} bytes of audio", audio.len());
        Ok(())
    }

    async fn end_call(&mut self, room: &str) -> Result<()> {
        info!(%room, "call ended");
        Ok(())
    }
}

/// Interactive transport for local development: each stdin line becomes an
/// utterance, a single digit becomes a DTMF press, EOF hangs up.
pub struct ConsoleTransport {
    room: String,
    lines: Lines<BufReader<Stdin>>,
    joined: bool,
    finished: bool,
}

impl ConsoleTransport {
    pub fn new(room: &str) -> Self {
        Self {
            room: room.to_string(),
            lines: BufReader::new(tokio::io::stdin()).lines(),
            joined: false,
            finished: false,
        }
    }
}

#[async_trait]
impl SessionTransport for ConsoleTransport {
    async fn next_event(&mut self) -> Option<(String, InputEvent)> {
        if !self.joined {
            self.joined = true;
            info!(room = %self.room, "participant joined");
            return Some((
                self.room.clone(),
                InputEvent::ParticipantJoined {
                    identity: "console".to_string(),
                },
            ));
        }
        if self.finished {
            return None;
        }

        loop {
            match self.lines.next_line().await {
                Ok(Some(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let event = match line.chars().next() {
                        Some(c) if line.len() == 1 && c.is_ascii_digit() => {
                            InputEvent::DtmfDigit { digit: c }
                        }
                        _ => InputEvent::Utterance {
                            text: line.to_string(),
                        },
                    };
                    return Some((self.room.clone(), event));
                }
                Ok(None) => {
                    self.finished = true;
                    return Some((self.room.clone(), InputEvent::Disconnected));
                }
                Err(e) => {
                    warn!("stdin read failed: {}", e);
                    self.finished = true;
                    return Some((self.room.clone(), InputEvent::Disconnected));
                }
            }
        }
    }

    async fn publish_audio(&mut self, room: &str, audio: &[u8]) -> Result<()> {
        debug!(%room, "{} bytes synthesized (not played in console mode)", audio.len());
        Ok(())
    }

    async fn end_call(&mut self, room: &str) -> Result<()> {
        info!(%room, "call ended");
        self.finished = true;
        Ok(())
    }
}
