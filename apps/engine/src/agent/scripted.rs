//! Scripted agent: replays a fixed queue of answers.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::trait_def::{Agent, AgentError, AgentRequest};

pub struct ScriptedAgent {
    answers: Mutex<VecDeque<String>>,
}

impl ScriptedAgent {
    pub const NAME: &'static str = "scripted";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
        }
    }

    /// Answers not yet handed out.
    pub fn remaining(&self) -> usize {
        self.answers.lock().map(|q| q.len()).unwrap_or(0)
    }
}

impl Agent for ScriptedAgent {
    fn ask(&self, _request: &AgentRequest<'_>) -> Result<String, AgentError> {
        let mut queue = self
            .answers
            .lock()
            .map_err(|e| AgentError::Internal(format!("script lock poisoned: {e}")))?;
        queue.pop_front().ok_or(AgentError::Exhausted)
    }
}
