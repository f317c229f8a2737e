//! Random agent: answers uniformly at random among legal moves.
//!
//! Mirrors a careless but well-formed player: it never breaks the grammar and
//! follows suit whenever it must.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{Agent, AgentError, AgentRequest};
use crate::answer::AnswerKind;

pub struct RandomAgent {
    /// `Agent::ask` takes `&self`; the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomAgent {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` gives reproducible answers; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Agent for RandomAgent {
    fn ask(&self, request: &AgentRequest<'_>) -> Result<String, AgentError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AgentError::Internal(format!("RNG lock poisoned: {e}")))?;

        match request.kind {
            AnswerKind::Prediction => {
                let legal = request.view.legal_predictions();
                let choice = legal
                    .choose(&mut *rng)
                    .copied()
                    .ok_or_else(|| AgentError::Internal("no legal predictions".into()))?;
                Ok(request.grammar.render_prediction(choice))
            }
            AnswerKind::Card => {
                let legal = request.view.legal_plays();
                let choice = legal
                    .choose(&mut *rng)
                    .copied()
                    .ok_or_else(|| AgentError::Internal("no legal plays".into()))?;
                Ok(request.grammar.render_play(choice))
            }
        }
    }
}
