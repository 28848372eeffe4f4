//! Agent Runner
//!
//! The event loop that glues everything together: events come in from the
//! transport, go through the session controller, and the resulting
//! directives are rendered (synthesis + playback, call actions) and
//! recorded in the session transcript. Sessions are exported when their
//! call closes and at shutdown.

use crate::event::{InputEvent, ResponseDirective};
use crate::intent;
use crate::registry::SessionRegistry;
use crate::session::{DialogState, SessionController};
use crate::transcript::TranscriptExporter;
use crate::transport::SessionTransport;
use crate::tts::TtsEngine;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct Agent<T: SessionTransport> {
    transport: T,
    controller: SessionController,
    registry: SessionRegistry,
    tts: Arc<dyn TtsEngine>,
    exporter: TranscriptExporter,
}

impl<T: SessionTransport> Agent<T> {
    pub fn new(
        transport: T,
        controller: SessionController,
        registry: SessionRegistry,
        tts: Arc<dyn TtsEngine>,
        exporter: TranscriptExporter,
    ) -> Self {
        Self {
            transport,
            controller,
            registry,
            tts,
            exporter,
        }
    }

    /// Current dialog state of a room, if its session is live
    pub fn state_of(&self, room: &str) -> Option<DialogState> {
        self.registry.get(room).map(|session| session.state)
    }

    /// Run until the transport shuts down, then export whatever is left
    pub async fn run(&mut self) -> crate::error::Result<()> {
        while let Some((room, event)) = self.transport.next_event().await {
            self.dispatch(&room, event).await?;
        }

        for session in self.registry.drain() {
            if let Err(e) = self.exporter.export(&session).await {
                warn!(room = %session.room, "transcript export failed: {}", e);
            }
        }
        Ok(())
    }

    /// Process one event for one room
    pub async fn dispatch(&mut self, room: &str, event: InputEvent) -> crate::error::Result<()> {
        if let InputEvent::Utterance { text } = &event {
            if intent::is_noise(text) {
                debug!(%room, "ignoring noise-only speech: '{}'", text);
                return Ok(());
            }
            info!(%room, "📝 Heard: '{}'", text);
        }

        let directives = {
            let session = self.registry.open(room);
            if let InputEvent::Utterance { text } = &event {
                session.transcript.add_user(text);
            }
            self.controller.handle(session, &event)
        };

        let mut ended = false;
        for directive in directives {
            match directive {
                ResponseDirective::Speak { text } => {
                    info!(%room, "assistant: {}", text);
                    if let Some(session) = self.registry.get_mut(room) {
                        session.transcript.add_assistant(&text);
                    }
                    match self.tts.synthesize(&text).await {
                        Ok(audio) if !audio.is_empty() => {
                            if let Err(e) = self.transport.publish_audio(room, &audio).await {
                                warn!(%room, "audio playback failed: {}", e);
                            }
                        }
                        Ok(_) => {}
                        Err(e) => warn!(%room, "TTS synthesis failed: {}", e),
                    }
                }
                ResponseDirective::TransferState { state } => {
                    debug!(%room, ?state, "dialog state changed");
                }
                ResponseDirective::EndCall => {
                    if let Err(e) = self.transport.end_call(room).await {
                        warn!(%room, "hang-up failed: {}", e);
                    }
                    ended = true;
                }
            }
        }

        let closed = self
            .registry
            .get(room)
            .map(|session| session.state == DialogState::Closed)
            .unwrap_or(false);
        if ended || closed {
            if let Some(session) = self.registry.close(room) {
                if let Err(e) = self.exporter.export(&session).await {
                    warn!(%room, "transcript export failed: {}", e);
                }
            }
        }

        Ok(())
    }
}
