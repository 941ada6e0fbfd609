//! Gemini `generateContent` client.
//!
//! Sends a single-turn prompt with `responseMimeType: application/json` and
//! feeds the first candidate's text through [`crate::parse`].

use std::time::Duration;

use retro_config::GeminiConfig;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::http::{check_response, read_json};
use crate::parse::{parse_custom_insight, parse_retrospective};
use crate::prompts::{custom_insight_prompt, retrospective_prompt};
use crate::source::{
    CustomInsightOutcome, CustomInsightSource, InsightOrigin, LoadedRetrospective,
    RetrospectiveInsights, RetrospectiveSource,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Client for the Gemini generative language API.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotConfigured`] if the API key is empty or the
    /// placeholder value.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, ClientError> {
        if !config.is_configured() {
            return Err(ClientError::NotConfigured(
                "Gemini API key is not configured. Set RETRO_GEMINI__API_KEY or API_KEY.".into(),
            ));
        }
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("retro/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            config: config.clone(),
        })
    }

    /// Generate a full retrospective.
    ///
    /// # Errors
    ///
    /// Transport failures and malformed model output, wrapped as
    /// [`ClientError::Gemini`] with operation `Main Summary`.
    pub async fn generate_retrospective(
        &self,
    ) -> Result<retro_core::responses::RetrospectiveSummary, ClientError> {
        self.generate_text(&retrospective_prompt(), self.config.summary_temperature)
            .await
            .and_then(|text| parse_retrospective(&text))
            .map_err(|error| error.during("Main Summary"))
    }

    /// Generate one insight for `tags`, returned as the model wrote it
    /// (including whatever `tags` it echoed back).
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidRequest`] for an empty selection, otherwise
    /// transport failures and malformed model output wrapped as
    /// [`ClientError::Gemini`] with operation `Custom Insight`.
    pub async fn generate_insight(
        &self,
        tags: &[String],
    ) -> Result<retro_core::entities::InsightRecord, ClientError> {
        if tags.is_empty() {
            return Err(ClientError::InvalidRequest(
                "Cannot generate custom insight with no tags selected.".into(),
            ));
        }
        self.generate_text(&custom_insight_prompt(tags), self.config.custom_temperature)
            .await
            .and_then(|text| parse_custom_insight(&text))
            .map_err(|error| error.during("Custom Insight"))
    }

    async fn generate_text(&self, prompt: &str, temperature: f32) -> Result<String, ClientError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.config.model),
            urlencoding::encode(&self.config.api_key),
        );
        let request = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                temperature,
            },
        };

        tracing::debug!(model = %self.config.model, temperature, "calling generateContent");
        let resp = check_response(self.http.post(&url).json(&request).send().await?).await?;
        let body: GenerateResponse = read_json(resp).await?;

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().map(|part| part.text).collect())
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Err(ClientError::Malformed(
                "Received an empty response from the model.".into(),
            ));
        }
        Ok(text)
    }
}

impl RetrospectiveSource for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn fetch_retrospective(&self) -> Result<LoadedRetrospective, ClientError> {
        let summary = self.generate_retrospective().await?;
        Ok(LoadedRetrospective {
            summary_text: summary.overall_summary_text,
            source_summary_count: None,
            insights: Some(RetrospectiveInsights {
                top: summary.top_insights,
                detailed: summary.detailed_insights,
            }),
        })
    }
}

impl CustomInsightSource for GeminiClient {
    async fn generate_custom_insight(
        &self,
        tags: &[String],
    ) -> Result<CustomInsightOutcome, ClientError> {
        Ok(CustomInsightOutcome {
            insight: self.generate_insight(tags).await?,
            origin: InsightOrigin::Generated,
        })
    }
}
