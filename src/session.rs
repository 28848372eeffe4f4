//! Session State Machine
//!
//! One `Session` per connected call, owned exclusively by the registry.
//! The `SessionController` is a pure transition function: given the
//! session and one input event it updates the dialog state and returns
//! the directives to render. Nothing here blocks or talks to providers.

use crate::config::Dtmf3Action;
use crate::event::{InputEvent, ResponseDirective};
use crate::extract;
use crate::intent::{Intent, IntentClassifier};
use crate::prompts;
use crate::transcript::Transcript;
use serde::{Deserialize, Serialize};

/// Dialog states of one call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogState {
    Greeting,
    MainMenu,
    MenuInfo,
    AwaitingDate,
    AwaitingTime,
    AwaitingPartySize,
    ReservationConfirmed,
    Closed,
}

/// Reservation fields, filled incrementally and never reset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub date: Option<String>,
    pub time: Option<String>,
    pub party_size: Option<u32>,
}

impl Reservation {
    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.time.is_some() && self.party_size.is_some()
    }

    /// Spoken/exported summary of whatever has been collected
    pub fn summary(&self) -> String {
        if self.date.is_none() && self.time.is_none() && self.party_size.is_none() {
            return "Nenhuma reserva foi registada.".to_string();
        }
        let mut parts = Vec::new();
        if let Some(date) = &self.date {
            parts.push(format!("dia {}", date));
        }
        if let Some(time) = &self.time {
            parts.push(format!("às {}", time));
        }
        if let Some(n) = self.party_size {
            parts.push(format!("para {} pessoas", n));
        }
        format!("Resumo da reserva: {}.", parts.join(", "))
    }
}

/// Per-call conversation context
#[derive(Debug, Clone)]
pub struct Session {
    pub room: String,
    pub state: DialogState,
    pub reservation: Reservation,
    pub language: String,
    pub transcript: Transcript,
}

impl Session {
    pub fn new(room: &str, language: &str) -> Self {
        Self {
            room: room.to_string(),
            state: DialogState::Greeting,
            reservation: Reservation::default(),
            language: language.to_string(),
            transcript: Transcript::default(),
        }
    }
}

/// Deterministic mapping from (state, event) to (next state, directives)
pub struct SessionController {
    classifier: Box<dyn IntentClassifier>,
    dtmf_three: Dtmf3Action,
}

impl SessionController {
    pub fn new(classifier: Box<dyn IntentClassifier>, dtmf_three: Dtmf3Action) -> Self {
        Self {
            classifier,
            dtmf_three,
        }
    }

    /// Process one event against the session. Closed sessions ignore
    /// everything; a disconnect closes from any state without speech.
    pub fn handle(&self, session: &mut Session, event: &InputEvent) -> Vec<ResponseDirective> {
        if session.state == DialogState::Closed {
            return Vec::new();
        }

        match event {
            InputEvent::Disconnected => {
                session.state = DialogState::Closed;
                vec![ResponseDirective::TransferState {
                    state: DialogState::Closed,
                }]
            }
            InputEvent::ParticipantJoined { .. } => {
                // Replayed joins must not reset reservation progress
                if session.state == DialogState::Greeting {
                    Self::enter(session, DialogState::MainMenu, prompts::welcome())
                } else {
                    Vec::new()
                }
            }
            InputEvent::CallConnected => Vec::new(),
            InputEvent::DtmfDigit { digit } => self.handle_dtmf(session, *digit),
            InputEvent::Utterance { text } => self.handle_utterance(session, text),
        }
    }

    fn handle_dtmf(&self, session: &mut Session, digit: char) -> Vec<ResponseDirective> {
        // 0 hangs up from anywhere
        if digit == '0' {
            return Self::hang_up(session);
        }

        match session.state {
            DialogState::MainMenu | DialogState::MenuInfo => match digit {
                '1' => Self::enter(session, DialogState::MenuInfo, prompts::MENU.to_string()),
                '2' => Self::enter(
                    session,
                    DialogState::AwaitingDate,
                    prompts::ASK_DATE.to_string(),
                ),
                '3' => match self.dtmf_three {
                    Dtmf3Action::Transfer => Self::enter(
                        session,
                        DialogState::MainMenu,
                        prompts::TRANSFER.to_string(),
                    ),
                    Dtmf3Action::EndCall => Self::hang_up(session),
                },
                _ => Vec::new(),
            },
            DialogState::AwaitingDate => Self::bounce(prompts::ASK_DATE),
            DialogState::AwaitingTime => Self::bounce(prompts::ASK_TIME),
            DialogState::AwaitingPartySize => Self::bounce(prompts::ASK_PARTY_SIZE),
            DialogState::ReservationConfirmed => vec![ResponseDirective::Speak {
                text: prompts::confirmation(&session.reservation),
            }],
            DialogState::Greeting | DialogState::Closed => Vec::new(),
        }
    }

    fn handle_utterance(&self, session: &mut Session, text: &str) -> Vec<ResponseDirective> {
        let intent = self.classifier.classify(text);

        if intent == Intent::Goodbye {
            return Self::hang_up(session);
        }

        match session.state {
            // Nobody has been greeted yet; wait for the join event
            DialogState::Greeting => Vec::new(),

            DialogState::MainMenu | DialogState::MenuInfo => match intent {
                Intent::Reserve => Self::enter(
                    session,
                    DialogState::AwaitingDate,
                    prompts::ASK_DATE.to_string(),
                ),
                Intent::ShowMenu => {
                    Self::enter(session, DialogState::MenuInfo, prompts::MENU.to_string())
                }
                Intent::WineList => Self::enter(
                    session,
                    DialogState::MenuInfo,
                    prompts::WINE_LIST.to_string(),
                ),
                Intent::DessertList => Self::enter(
                    session,
                    DialogState::MenuInfo,
                    prompts::DESSERT_MENU.to_string(),
                ),
                Intent::Goodbye | Intent::Unknown => vec![ResponseDirective::Speak {
                    text: format!("{} {}", prompts::apology(), prompts::MENU_HINT),
                }],
            },

            DialogState::AwaitingDate => match extract::date(text) {
                Some(date) => {
                    session.reservation.date = Some(date);
                    Self::enter(
                        session,
                        DialogState::AwaitingTime,
                        prompts::ASK_TIME.to_string(),
                    )
                }
                None => Self::bounce(prompts::ASK_DATE),
            },

            DialogState::AwaitingTime => match extract::time(text) {
                Some(time) => {
                    session.reservation.time = Some(time);
                    Self::enter(
                        session,
                        DialogState::AwaitingPartySize,
                        prompts::ASK_PARTY_SIZE.to_string(),
                    )
                }
                None => Self::bounce(prompts::ASK_TIME),
            },

            DialogState::AwaitingPartySize => match extract::party_size(text) {
                Some(n) => {
                    session.reservation.party_size = Some(n);
                    let confirmation = prompts::confirmation(&session.reservation);
                    Self::enter(session, DialogState::ReservationConfirmed, confirmation)
                }
                None => Self::bounce(prompts::ASK_PARTY_SIZE),
            },

            DialogState::ReservationConfirmed => vec![ResponseDirective::Speak {
                text: prompts::confirmation(&session.reservation),
            }],

            DialogState::Closed => Vec::new(),
        }
    }

    /// Speak and move to `next`, announcing the transition when the state
    /// actually changes.
    fn enter(session: &mut Session, next: DialogState, text: String) -> Vec<ResponseDirective> {
        let mut out = vec![ResponseDirective::Speak { text }];
        if session.state != next {
            session.state = next;
            out.push(ResponseDirective::TransferState { state: next });
        }
        out
    }

    /// Re-ask the current question without changing state
    fn bounce(question: &str) -> Vec<ResponseDirective> {
        vec![ResponseDirective::Speak {
            text: prompts::reprompt(question),
        }]
    }

    /// Farewell, close and hang up
    fn hang_up(session: &mut Session) -> Vec<ResponseDirective> {
        session.state = DialogState::Closed;
        vec![
            ResponseDirective::Speak {
                text: prompts::FAREWELL.to_string(),
            },
            ResponseDirective::TransferState {
                state: DialogState::Closed,
            },
            ResponseDirective::EndCall,
        ]
    }
}
