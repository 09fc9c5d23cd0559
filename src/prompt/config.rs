//! Prompt Configuration Module
//!
//! Rendering and input-loop settings shared by every question.

use serde::{Deserialize, Serialize};

/// Configuration for prompt rendering and the auto-complete loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Candidates shown per auto-complete iteration.
    pub max_visible_candidates: usize,
    /// Uppercase the option token matching the current default.
    pub uppercase_default: bool,
    /// Separator between the rendered question and the input cursor.
    pub prompt_separator: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            max_visible_candidates: 10,
            uppercase_default: true,
            prompt_separator: ": ".to_string(),
        }
    }
}

impl PromptConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON document; missing fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
