//! Engine configuration.
//!
//! Values come from serde (missing fields take defaults) or from the
//! environment via [`EngineConfig::from_env`].

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::CardAlphabet;
use crate::exchange::RepromptPolicy;

pub const ENV_MAX_ATTEMPTS: &str = "APPRENTICE_MAX_ATTEMPTS";
pub const ENV_LIBERAL: &str = "APPRENTICE_LIBERAL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be true or false, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Corrections allowed per exchange after the first answer.
    pub max_attempts: u32,
    /// Whether violations are corrected at all.
    pub liberal: bool,
    pub alphabet: CardAlphabet,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            liberal: true,
            alphabet: CardAlphabet::STANDARD,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `APPRENTICE_MAX_ATTEMPTS` and `APPRENTICE_LIBERAL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_MAX_ATTEMPTS) {
            config.max_attempts =
                raw.trim()
                    .parse::<u32>()
                    .map_err(|_| ConfigError::InvalidNumber {
                        var: ENV_MAX_ATTEMPTS,
                        value: raw.clone(),
                    })?;
        }
        if let Some(raw) = lookup(ENV_LIBERAL) {
            config.liberal = parse_bool(&raw).ok_or_else(|| ConfigError::InvalidBool {
                var: ENV_LIBERAL,
                value: raw.clone(),
            })?;
        }
        Ok(config)
    }

    pub fn reprompt_policy(&self) -> RepromptPolicy {
        RepromptPolicy {
            max_attempts: self.max_attempts,
            liberal: self.liberal,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
