//! Agents: anything that answers a prompt with raw text.
//!
//! - [`ScriptedAgent`]: fixed answer queue (tests, replays)
//! - [`RandomAgent`]: uniform over legal moves, seedable
//! - [`HeuristicAgent`]: deterministic baseline
//! - [`CallbackAgent`]: closure adapter for live backends
//!
//! The engine only depends on the [`Agent`] trait.

mod callback;
pub mod config;
mod heuristic;
mod random;
pub mod registry;
mod scripted;
mod trait_def;
mod view;

pub use callback::CallbackAgent;
pub use config::AgentConfig;
pub use heuristic::HeuristicAgent;
pub use random::RandomAgent;
pub use scripted::ScriptedAgent;
use serde_json::Value as JsonValue;
pub use trait_def::{Agent, AgentError, AgentRequest};
pub use view::SeatView;

/// Create a registered agent from its kind name and optional JSON config.
///
/// Returns `None` if the kind is unknown.
pub fn create_agent(kind: &str, config: Option<&JsonValue>) -> Option<Box<dyn Agent>> {
    let factory = registry::by_name(kind)?;
    let config = AgentConfig::from_json(config);
    Some((factory.make)(&config))
}
