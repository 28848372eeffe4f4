//! Mock Transport for Testing
//!
//! Feeds a scripted queue of events and records everything published
//! back at it.

use async_trait::async_trait;
use quitanda::error::Result;
use quitanda::event::InputEvent;
use quitanda::transport::SessionTransport;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Transport that replays predetermined events
pub struct MockTransport {
    events: VecDeque<(String, InputEvent)>,
    /// (room, audio byte count) for every playback
    pub published: Arc<Mutex<Vec<(String, usize)>>>,
    /// Rooms where the call was hung up
    pub ended: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    /// Script a single-room conversation
    pub fn scripted(room: &str, events: Vec<InputEvent>) -> Self {
        Self {
            events: events
                .into_iter()
                .map(|event| (room.to_string(), event))
                .collect(),
            published: Arc::new(Mutex::new(Vec::new())),
            ended: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn ended_rooms(&self) -> Vec<String> {
        self.ended.lock().unwrap().clone()
    }

    pub fn publish_count(&self) -> usize {
        self.published.lock().unwrap().len()
    }
}

#[async_trait]
impl SessionTransport for MockTransport {
    async fn next_event(&mut self) -> Option<(String, InputEvent)> {
        self.events.pop_front()
    }

    async fn publish_audio(&mut self, room: &str, audio: &[u8]) -> Result<()> {
        self.published
            .lock()
            .unwrap()
            .push((room.to_string(), audio.len()));
        Ok(())
    }

    async fn end_call(&mut self, room: &str) -> Result<()> {
        self.ended.lock().unwrap().push(room.to_string());
        Ok(())
    }
}
