//! Agent trait definition.

use thiserror::Error;

use crate::agent::SeatView;
use crate::answer::{AnswerGrammar, AnswerKind};
use crate::exchange::conversation::Message;

/// Transport-level failures of an agent call.
///
/// These are not answers: the exchange loop never reprompts on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    /// Backend could not be reached or refused the request
    #[error("agent unavailable: {0}")]
    Unavailable(String),
    /// Scripted agent ran out of answers
    #[error("agent has no answers left")]
    Exhausted,
    /// Agent encountered an internal error
    #[error("agent internal error: {0}")]
    Internal(String),
}

/// Everything an agent may look at when answering.
///
/// Conversational backends read `messages`; programmatic agents read the
/// structured `view` and answer through `grammar`.
#[derive(Debug, Clone, Copy)]
pub struct AgentRequest<'a> {
    pub kind: AnswerKind,
    pub messages: &'a [Message],
    pub view: &'a SeatView,
    pub grammar: &'a AnswerGrammar,
}

impl AgentRequest<'_> {
    /// Latest engine message (the prompt or the most recent correction).
    pub fn latest_prompt(&self) -> Option<&str> {
        self.messages.last().map(|m| m.content.as_str())
    }
}

/// Anything that can answer a prompt with raw text.
///
/// Calls are blocking request/response; the engine keeps exactly one call
/// outstanding at a time.
pub trait Agent: Send + Sync {
    fn ask(&self, request: &AgentRequest<'_>) -> Result<String, AgentError>;
}
