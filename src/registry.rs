//! Session Registry
//!
//! Explicit map from room name to live `Session`, owned by the agent for
//! the lifetime of the process. Sessions are created on the first event
//! for a room and removed when the call closes. Events are processed
//! sequentially, so no locking is involved.

use crate::session::Session;
use std::collections::HashMap;

pub struct SessionRegistry {
    sessions: HashMap<String, Session>,
    language: String,
}

impl SessionRegistry {
    pub fn new(language: &str) -> Self {
        Self {
            sessions: HashMap::new(),
            language: language.to_string(),
        }
    }

    /// Get the session for a room, creating it on first contact
    pub fn open(&mut self, room: &str) -> &mut Session {
        self.sessions
            .entry(room.to_string())
            .or_insert_with(|| Session::new(room, &self.language))
    }

    pub fn get(&self, room: &str) -> Option<&Session> {
        self.sessions.get(room)
    }

    pub fn get_mut(&mut self, room: &str) -> Option<&mut Session> {
        self.sessions.get_mut(room)
    }

    /// Remove and return a session once its call has ended
    pub fn close(&mut self, room: &str) -> Option<Session> {
        self.sessions.remove(room)
    }

    /// Remove and return every remaining session (process shutdown)
    pub fn drain(&mut self) -> Vec<Session> {
        self.sessions.drain().map(|(_, session)| session).collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DialogState;

    #[test]
    fn test_open_creates_once() {
        let mut registry = SessionRegistry::new("pt-PT");
        {
            let session = registry.open("room-a");
            assert_eq!(session.state, DialogState::Greeting);
            session.state = DialogState::MainMenu;
        }
        // Same room returns the same session
        assert_eq!(registry.open("room-a").state, DialogState::MainMenu);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut registry = SessionRegistry::new("pt-PT");
        registry.open("room-a").state = DialogState::AwaitingDate;
        assert_eq!(registry.open("room-b").state, DialogState::Greeting);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_close_removes() {
        let mut registry = SessionRegistry::new("pt-PT");
        registry.open("room-a");
        let closed = registry.close("room-a");
        assert!(closed.is_some());
        assert!(registry.is_empty());
        assert!(registry.close("room-a").is_none());
    }
}
