//! Gemini (LLM generation) configuration.

use serde::{Deserialize, Serialize};

/// Value shipped in sample `.env` files; treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GEMINI_API_KEY";

fn default_model() -> String {
    "gemini-2.5-flash-preview-04-17".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

const fn default_summary_temperature() -> f32 {
    0.6
}

const fn default_custom_temperature() -> f32 {
    0.5
}

const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key. Also read from the legacy `GEMINI_API_KEY` / `API_KEY` variables.
    #[serde(default)]
    pub api_key: String,

    /// Model name used for `generateContent`.
    #[serde(default = "default_model")]
    pub model: String,

    /// API root, without the `/models/...` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature for full retrospective generation.
    #[serde(default = "default_summary_temperature")]
    pub summary_temperature: f32,

    /// Sampling temperature for single custom insights. Lower keeps the JSON
    /// structure more reliable.
    #[serde(default = "default_custom_temperature")]
    pub custom_temperature: f32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            summary_temperature: default_summary_temperature(),
            custom_temperature: default_custom_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Check if a usable (non-empty, non-placeholder) API key is present.
    pub fn is_configured(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && key != PLACEHOLDER_API_KEY
    }
}
