//! Adapter for live backends: wraps a closure as an [`Agent`].

use std::fmt;

use super::trait_def::{Agent, AgentError, AgentRequest};

type AskFn = dyn Fn(&AgentRequest<'_>) -> Result<String, AgentError> + Send + Sync;

pub struct CallbackAgent {
    label: String,
    ask: Box<AskFn>,
}

impl CallbackAgent {
    pub fn new<F>(label: impl Into<String>, ask: F) -> Self
    where
        F: Fn(&AgentRequest<'_>) -> Result<String, AgentError> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            ask: Box::new(ask),
        }
    }
}

impl fmt::Debug for CallbackAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackAgent")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl Agent for CallbackAgent {
    fn ask(&self, request: &AgentRequest<'_>) -> Result<String, AgentError> {
        (self.ask)(request)
    }
}
