//! Request and response envelopes exchanged with the retrospective backend
//! and the LLM generation contract.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::InsightRecord;

/// Body of `POST /submit_daily`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DailySummaryPayload {
    pub text: String,
}

/// Body of a successful `GET /retrospective`.
///
/// A body carrying `error` is a failure even with a 2xx status; the client
/// checks for it before decoding into this type.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RetrospectiveResponse {
    pub summary: String,
    pub source_summary_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of a successful `POST /submit_daily`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubmitDailyResponse {
    pub message: String,
    pub current_summary_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Full retrospective as produced by the LLM generation contract.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RetrospectiveSummary {
    pub overall_summary_text: String,
    pub top_insights: Vec<InsightRecord>,
    pub detailed_insights: Vec<InsightRecord>,
}
