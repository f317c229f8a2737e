//! Rules engine and turn orchestrator for Wizard's Apprentice, a
//! prediction-based trick-taking game played by conversational agents.
//!
//! - [`domain`]: cards, trick evaluation, seating rotation, scoring, state
//! - [`answer`]: answer grammar and legality checks
//! - [`exchange`]: bounded reprompt loop around one agent call
//! - [`agent`]: the agent interface and built-in agents
//! - [`game`]: the round/game state machine

pub mod agent;
pub mod answer;
pub mod config;
pub mod domain;
pub mod errors;
pub mod exchange;
pub mod game;
pub mod telemetry;

pub use agent::{Agent, AgentError, AgentRequest, SeatView};
pub use answer::{Answer, AnswerGrammar, AnswerKind, Violation};
pub use config::{ConfigError, EngineConfig};
pub use errors::DomainError;
pub use exchange::{AbortReason, PlainPrompts, PromptSource, RepromptPolicy};
pub use game::{
    EventLog, EventSink, GameEvent, GameInstance, GameMaster, GameOutcome, GameStatus, RoundDeal,
    TracingSink,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::test_logging::init();
}
