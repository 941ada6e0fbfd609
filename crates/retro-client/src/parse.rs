//! Parsing and shape validation of LLM output.
//!
//! The model is asked for bare JSON but sometimes wraps it in a Markdown code
//! fence. Text is unfenced, parsed into a [`serde_json::Value`], checked for
//! the fields the dashboard relies on (with messages naming the offending
//! path), and only then decoded into typed records.

use retro_core::entities::InsightRecord;
use retro_core::responses::RetrospectiveSummary;
use serde_json::Value;

use crate::error::ClientError;

/// Remove a surrounding Markdown code fence (with optional language tag).
///
/// Text that is not fenced is returned trimmed but otherwise unchanged.
#[must_use]
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };
    inner
        .trim_start_matches(|c: char| c.is_alphanumeric() || c == '_')
        .trim()
}

/// Parse raw model text as JSON.
///
/// # Errors
///
/// Returns [`ClientError::Malformed`] if the (unfenced) text is not JSON. The
/// raw text is logged at `error` level.
pub fn parse_json_text(raw: &str) -> Result<Value, ClientError> {
    serde_json::from_str(strip_code_fence(raw)).map_err(|error| {
        tracing::error!(%error, raw, "model output is not valid JSON");
        ClientError::Malformed(
            "Invalid JSON response from API. The AI may have returned an unexpected format."
                .into(),
        )
    })
}

/// Validate and decode a full retrospective.
///
/// # Errors
///
/// Returns [`ClientError::Malformed`] naming the first structural problem.
pub fn parse_retrospective(raw: &str) -> Result<RetrospectiveSummary, ClientError> {
    let value = parse_json_text(raw)?;
    check_retrospective_shape(&value).inspect_err(|_| {
        tracing::error!(raw, "model output has the wrong retrospective shape");
    })?;
    serde_json::from_value(value).map_err(|error| {
        tracing::error!(%error, raw, "retrospective did not decode");
        ClientError::Malformed(format!("retrospective did not decode: {error}"))
    })
}

/// Validate and decode a single custom insight.
///
/// # Errors
///
/// Returns [`ClientError::Malformed`] if `tags`, `count` or `summary` is
/// missing or has the wrong type.
pub fn parse_custom_insight(raw: &str) -> Result<InsightRecord, ClientError> {
    let value = parse_json_text(raw)?;
    let well_formed = value.get("tags").is_some_and(Value::is_array)
        && value.get("count").is_some_and(Value::is_number)
        && value.get("summary").is_some_and(Value::is_string);
    if !well_formed {
        tracing::error!(raw, "model output has the wrong custom insight shape");
        return Err(ClientError::Malformed(
            "Parsed JSON does not match expected custom insight structure.".into(),
        ));
    }
    serde_json::from_value(value).map_err(|error| {
        tracing::error!(%error, raw, "custom insight did not decode");
        ClientError::Malformed(format!("custom insight did not decode: {error}"))
    })
}

fn check_retrospective_shape(value: &Value) -> Result<(), ClientError> {
    let top_level_ok = value.get("overallSummaryText").is_some_and(Value::is_string)
        && value.get("topInsights").is_some_and(Value::is_array)
        && value.get("detailedInsights").is_some_and(Value::is_array);
    if !top_level_ok {
        return Err(ClientError::Malformed(
            "Parsed JSON does not match expected retrospective structure.".into(),
        ));
    }

    for list in ["topInsights", "detailedInsights"] {
        let insights = value.get(list).and_then(Value::as_array).into_iter().flatten();
        for (index, insight) in insights.enumerate() {
            check_insight_shape(insight, list, index)?;
        }
    }
    Ok(())
}

fn check_insight_shape(insight: &Value, list: &str, index: usize) -> Result<(), ClientError> {
    let tags_ok = insight
        .get("tags")
        .and_then(Value::as_array)
        .is_some_and(|tags| tags.iter().all(Value::is_string));
    if !tags_ok {
        return Err(ClientError::Malformed(format!(
            "Missing or invalid tags in {list}[{index}]."
        )));
    }

    if let Some(alerts) = insight.get("detailedAlerts") {
        let alerts_ok = alerts.as_array().is_some_and(|alerts| {
            alerts.iter().all(|alert| {
                ["id", "title", "timestamp"]
                    .iter()
                    .all(|field| alert.get(field).is_some_and(Value::is_string))
            })
        });
        if !alerts_ok {
            return Err(ClientError::Malformed(format!(
                "Invalid detailedAlerts in {list}[{index}]."
            )));
        }
    }
    Ok(())
}
