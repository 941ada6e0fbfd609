//! REST client for the retrospective backend.
//!
//! Endpoints (relative to the configured base URL):
//! - `GET  /retrospective`           narrative retrospective
//! - `POST /submit_daily`            add a daily summary
//! - `GET  /mock/daily_summaries`    sample daily summaries
//! - `GET  /mock/retrospective_summaries`

use std::time::Duration;

use retro_config::BackendConfig;
use retro_core::entities::InsightRecord;
use retro_core::responses::{DailySummaryPayload, RetrospectiveResponse, SubmitDailyResponse};
use serde_json::Value;

use crate::error::ClientError;
use crate::http::{check_response, read_envelope, read_json};
use crate::source::{
    CustomInsightOutcome, CustomInsightSource, InsightOrigin, LoadedRetrospective,
    RetrospectiveSource,
};

const SUBMISSION_RECOMMENDATION: &str =
    "This has been added to the backend for the next retrospective generation.";

/// HTTP client for the retrospective backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for `config.base_url`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("retro/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: config.normalized_base_url().to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current narrative retrospective.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] on a non-success status,
    /// [`ClientError::Backend`] if a 2xx body carries `error`, and
    /// [`ClientError::Malformed`] if the body is not JSON or lacks
    /// `summary` / `source_summary_count`.
    pub async fn retrospective(&self) -> Result<RetrospectiveResponse, ClientError> {
        let url = format!("{}/retrospective", self.base_url);
        tracing::debug!(%url, "fetching retrospective");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        read_envelope(resp).await
    }

    /// Submit one daily summary.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::retrospective`].
    pub async fn submit_daily(&self, text: &str) -> Result<SubmitDailyResponse, ClientError> {
        let url = format!("{}/submit_daily", self.base_url);
        let payload = DailySummaryPayload {
            text: text.to_string(),
        };
        let resp = check_response(self.http.post(&url).json(&payload).send().await?).await?;
        let body: SubmitDailyResponse = read_envelope(resp).await?;
        tracing::info!(count = body.current_summary_count, "daily summary submitted");
        Ok(body)
    }

    /// Sample daily summaries from the backend's mock endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Malformed`] if the body is not a JSON array.
    pub async fn mock_daily_summaries(&self, count: Option<u32>) -> Result<Vec<Value>, ClientError> {
        self.mock_listing("daily_summaries", count).await
    }

    /// Sample retrospective summaries from the backend's mock endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Malformed`] if the body is not a JSON array.
    pub async fn mock_retrospective_summaries(
        &self,
        count: Option<u32>,
    ) -> Result<Vec<Value>, ClientError> {
        self.mock_listing("retrospective_summaries", count).await
    }

    async fn mock_listing(&self, path: &str, count: Option<u32>) -> Result<Vec<Value>, ClientError> {
        let url = match count {
            Some(count) => format!("{}/mock/{path}?count={count}", self.base_url),
            None => format!("{}/mock/{path}", self.base_url),
        };
        let resp = check_response(self.http.get(&url).send().await?).await?;
        match read_json::<Value>(resp).await? {
            Value::Array(items) => Ok(items),
            Value::Object(map) => match map.get("error").and_then(Value::as_str) {
                Some(error) => Err(ClientError::Backend(error.to_string())),
                None => Err(ClientError::Malformed(format!(
                    "expected a JSON array from /mock/{path}"
                ))),
            },
            _ => Err(ClientError::Malformed(format!(
                "expected a JSON array from /mock/{path}"
            ))),
        }
    }
}

/// Text submitted for a tag selection.
#[must_use]
pub fn submission_text(tags: &[String]) -> String {
    format!("Daily notes based on tags: {}.", tags.join(", "))
}

impl RetrospectiveSource for BackendClient {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn fetch_retrospective(&self) -> Result<LoadedRetrospective, ClientError> {
        let body = self.retrospective().await?;
        Ok(LoadedRetrospective {
            summary_text: body.summary,
            source_summary_count: Some(body.source_summary_count),
            insights: None,
        })
    }
}

impl CustomInsightSource for BackendClient {
    /// Submit the selection as a daily summary and describe the submission as
    /// an insight. The caller is expected to reload the retrospective.
    async fn generate_custom_insight(
        &self,
        tags: &[String],
    ) -> Result<CustomInsightOutcome, ClientError> {
        let text = submission_text(tags);
        let response = self.submit_daily(&text).await?;
        let insight = InsightRecord {
            tags: tags.to_vec(),
            count: 1,
            summary: format!(
                "Submitted: \"{text}\" (Count: {})",
                response.current_summary_count
            ),
            recommendation: Some(SUBMISSION_RECOMMENDATION.to_string()),
            ..InsightRecord::default()
        };
        Ok(CustomInsightOutcome {
            insight,
            origin: InsightOrigin::Submitted,
        })
    }
}
