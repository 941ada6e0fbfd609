use retro_core::entities::InsightRecord;
use retro_core::errors::ErrorKind;
use serde::Serialize;

/// Turn a stored dashboard error into the command's failure.
pub fn error_state(operation: &str, message: &str, kind: Option<ErrorKind>) -> anyhow::Error {
    let hint = match kind {
        Some(kind) if kind.is_retryable() => "\nhint: run the command again, or pass --retry",
        _ => "",
    };
    anyhow::anyhow!("{operation} failed: {message}{hint}")
}

/// Compact insight view for listings.
#[derive(Debug, Serialize)]
pub struct InsightRow<'a> {
    pub id: &'a str,
    pub tags: &'a [String],
    pub count: u32,
    pub summary: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<&'a str>,
}

impl<'a> From<&'a InsightRecord> for InsightRow<'a> {
    fn from(insight: &'a InsightRecord) -> Self {
        Self {
            id: insight.id().unwrap_or("-"),
            tags: &insight.tags,
            count: insight.count,
            summary: &insight.summary,
            recommendation: insight.recommendation.as_deref(),
        }
    }
}
