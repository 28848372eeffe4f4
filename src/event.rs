//! Event Model
//!
//! JSON-serializable input events and response directives exchanged with
//! the transport layer. Events are consumed immediately and never stored;
//! directives are rendered (spoken / acted on) and discarded.

use crate::session::DialogState;
use serde::{Deserialize, Serialize};

/// Input delivered by the transport for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// A transcribed user utterance in pt-PT
    #[serde(rename = "utterance")]
    Utterance { text: String },

    /// A touch-tone keypad digit
    #[serde(rename = "dtmf")]
    DtmfDigit { digit: char },

    /// The underlying call was connected
    #[serde(rename = "call_connected")]
    CallConnected,

    /// A participant joined the room
    #[serde(rename = "participant_joined")]
    ParticipantJoined { identity: String },

    /// The participant left or the call dropped
    #[serde(rename = "disconnected")]
    Disconnected,
}

/// Directive emitted by the controller towards the transport
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ResponseDirective {
    /// Synthesize and play this text
    #[serde(rename = "speak")]
    Speak { text: String },

    /// The dialog moved to a new state
    #[serde(rename = "transfer_state")]
    TransferState { state: DialogState },

    /// Hang up the call
    #[serde(rename = "end_call")]
    EndCall,
}

impl ResponseDirective {
    /// Convenience accessor for the spoken text, if any
    pub fn spoken_text(&self) -> Option<&str> {
        match self {
            ResponseDirective::Speak { text } => Some(text),
            _ => None,
        }
    }
}
