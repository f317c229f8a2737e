//! Per-seat conversational context.

use serde::Serialize;

use crate::domain::SeatId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Text sent by the engine (prompt or correction)
    Master,
    /// Raw text returned by the agent
    Agent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn master(content: impl Into<String>) -> Self {
        Self {
            role: Role::Master,
            content: content.into(),
        }
    }

    pub fn agent(content: impl Into<String>) -> Self {
        Self {
            role: Role::Agent,
            content: content.into(),
        }
    }
}

/// Messages of the exchange currently in flight for one seat.
///
/// Emptied when the exchange finishes, so no seat ever sees context from a
/// previous exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    seat: SeatId,
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new(seat: SeatId) -> Self {
        Self {
            seat,
            messages: Vec::new(),
        }
    }

    pub fn seat(&self) -> SeatId {
        self.seat
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Take the transcript and leave the context empty.
    pub fn finish(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }
}
