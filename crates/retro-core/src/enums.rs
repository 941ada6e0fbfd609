//! Severity, display mode, tab, item type, and load-phase enums.
//!
//! Wire-facing enums keep the spelling the backend and LLM contract use
//! (`Critical`, `Warning`, `Info`); session enums use `snake_case`.
//! [`LoadPhase`] carries a state machine via `allowed_next_states()`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity attached to an individual alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DisplayMode
// ---------------------------------------------------------------------------

/// Where insight detail is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Detail opens in a side panel for one selected insight.
    #[default]
    Sidebar,
    /// Each card expands in place; there is no shared selection.
    Inline,
}

impl DisplayMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Sidebar => Self::Inline,
            Self::Inline => Self::Sidebar,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sidebar => "sidebar",
            Self::Inline => "inline",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sidebar" => Ok(Self::Sidebar),
            "inline" => Ok(Self::Inline),
            other => Err(format!("unknown display mode '{other}' (expected sidebar or inline)")),
        }
    }
}

// ---------------------------------------------------------------------------
// AppTab
// ---------------------------------------------------------------------------

/// Top-level dashboard tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AppTab {
    #[default]
    RetrospectiveSummary,
    StatisticalInsights,
}

impl AppTab {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RetrospectiveSummary => "retrospective_summary",
            Self::StatisticalInsights => "statistical_insights",
        }
    }
}

impl fmt::Display for AppTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ItemType
// ---------------------------------------------------------------------------

/// Kind of oncall item counted by the statistics view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ItemType {
    Incidents,
    Alerts,
    Tasks,
    Notes,
}

impl ItemType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incidents => "Incidents",
            Self::Alerts => "Alerts",
            Self::Tasks => "Tasks",
            Self::Notes => "Notes",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LoadPhase
// ---------------------------------------------------------------------------

/// Phase of the retrospective fetch controller.
///
/// ```text
/// idle → loading → succeeded
///                → failed
/// succeeded | failed → loading   (reload / retry)
/// loading → loading              (overlapping request supersedes)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl LoadPhase {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle | Self::Succeeded | Self::Failed => &[Self::Loading],
            Self::Loading => &[Self::Loading, Self::Succeeded, Self::Failed],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn display_mode_toggles_both_ways() {
        assert_eq!(DisplayMode::Sidebar.toggled(), DisplayMode::Inline);
        assert_eq!(DisplayMode::Inline.toggled(), DisplayMode::Sidebar);
        assert_eq!(DisplayMode::default(), DisplayMode::Sidebar);
    }

    #[rstest]
    #[case("sidebar", DisplayMode::Sidebar)]
    #[case("Inline", DisplayMode::Inline)]
    #[case(" inline ", DisplayMode::Inline)]
    fn display_mode_parses(#[case] input: &str, #[case] expected: DisplayMode) {
        assert_eq!(input.parse::<DisplayMode>().unwrap(), expected);
    }

    #[test]
    fn display_mode_rejects_unknown() {
        assert!("drawer".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn severity_uses_wire_spelling() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"Critical\"");
        let parsed: Severity = serde_json::from_str("\"Info\"").unwrap();
        assert_eq!(parsed, Severity::Info);
        assert!(serde_json::from_str::<Severity>("\"critical\"").is_err());
    }

    #[rstest]
    #[case(LoadPhase::Idle, LoadPhase::Loading, true)]
    #[case(LoadPhase::Idle, LoadPhase::Succeeded, false)]
    #[case(LoadPhase::Loading, LoadPhase::Succeeded, true)]
    #[case(LoadPhase::Loading, LoadPhase::Failed, true)]
    #[case(LoadPhase::Loading, LoadPhase::Loading, true)]
    #[case(LoadPhase::Succeeded, LoadPhase::Loading, true)]
    #[case(LoadPhase::Failed, LoadPhase::Loading, true)]
    #[case(LoadPhase::Failed, LoadPhase::Succeeded, false)]
    fn load_phase_transitions(
        #[case] from: LoadPhase,
        #[case] to: LoadPhase,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(to), allowed);
    }
}
