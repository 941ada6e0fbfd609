//! General application configuration.

use retro_core::enums::DisplayMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which collaborator produces retrospectives and custom insights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// REST backend: narrative-only retrospectives, daily-summary submissions.
    #[default]
    Backend,
    /// Gemini LLM: full retrospectives, generated custom insights.
    Gemini,
    /// Canned data, no network.
    Mock,
}

impl SourceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Gemini => "gemini",
            Self::Mock => "mock",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "backend" => Ok(Self::Backend),
            "gemini" | "llm" => Ok(Self::Gemini),
            "mock" => Ok(Self::Mock),
            other => Err(format!("unknown source '{other}' (expected backend, gemini or mock)")),
        }
    }
}

/// Default count for the mock listing endpoints.
const fn default_mock_count() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Source used for retrospectives and custom insights.
    #[serde(default)]
    pub source: SourceKind,

    /// Initial display mode of the dashboard session.
    #[serde(default)]
    pub display_mode: DisplayMode,

    /// Default `count` for the mock listing endpoints.
    #[serde(default = "default_mock_count")]
    pub mock_count: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            display_mode: DisplayMode::default(),
            mock_count: default_mock_count(),
        }
    }
}
