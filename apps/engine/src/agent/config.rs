//! Agent configuration handling.
//!
//! Extracts the standard fields shared by registry-built agents while
//! keeping agent-specific fields in `custom`.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for registry-built agents.
///
/// ```json
/// {"seed": 12345}
/// {"answers": ["PREDICTION: 1", "I PLAY: G2"]}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// RNG seed for reproducible answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Agent-specific fields (e.g. `answers` for the scripted agent).
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AgentConfig {
    /// Build from optional JSON; malformed input yields an empty config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_default()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    /// String list under `key`; non-string entries are skipped.
    pub fn custom_strings(&self, key: &str) -> Vec<String> {
        self.get_custom(key)
            .and_then(JsonValue::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn empty() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::empty()
    }
}
