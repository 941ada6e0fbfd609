use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AlertRecord;

/// One point of an insight's chronological trend.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrendPoint {
    /// Day identifier (`Mon`, `Day 1`, `Jul 10`, ...). Named `date` on the wire.
    #[serde(rename = "date")]
    pub label: String,
    pub count: u32,
}

/// A follow-up the user can take from an insight.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAction {
    pub display_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}

/// Alerts sharing a tag combination, summarized.
///
/// `id` is optional on the wire; the insight store assigns one at ingestion.
/// An empty string is treated the same as an absent ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsightRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_alert_titles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_data: Option<Vec<TrendPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_notes_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_alerts: Option<Vec<AlertRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<SuggestedAction>,
}

impl InsightRecord {
    /// The record's ID, if it has a non-empty one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Set the ID only if the record does not already carry a usable one.
    pub fn ensure_id(&mut self, make: impl FnOnce(&[String]) -> String) {
        if self.id().is_none() {
            self.id = Some(make(&self.tags));
        }
    }
}
