//! Registered agent kinds, looked up by name.
//!
//! Keep ordering stable; constructors must be free of side effects.

use super::config::AgentConfig;
use super::heuristic::HeuristicAgent;
use super::random::RandomAgent;
use super::scripted::ScriptedAgent;
use super::trait_def::Agent;

pub struct AgentFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &AgentConfig) -> Box<dyn Agent>,
}

static AGENT_FACTORIES: &[AgentFactory] = &[
    AgentFactory {
        name: RandomAgent::NAME,
        version: RandomAgent::VERSION,
        make: make_random,
    },
    AgentFactory {
        name: HeuristicAgent::NAME,
        version: HeuristicAgent::VERSION,
        make: make_heuristic,
    },
    AgentFactory {
        name: ScriptedAgent::NAME,
        version: ScriptedAgent::VERSION,
        make: make_scripted,
    },
];

pub fn registered_agents() -> &'static [AgentFactory] {
    AGENT_FACTORIES
}

pub fn by_name(name: &str) -> Option<&'static AgentFactory> {
    registered_agents().iter().find(|f| f.name == name)
}

fn make_random(config: &AgentConfig) -> Box<dyn Agent> {
    Box::new(RandomAgent::new(config.seed()))
}

fn make_heuristic(_config: &AgentConfig) -> Box<dyn Agent> {
    Box::new(HeuristicAgent::new())
}

fn make_scripted(config: &AgentConfig) -> Box<dyn Agent> {
    Box::new(ScriptedAgent::new(config.custom_strings("answers")))
}
