//! Source abstraction shared by the backend, the LLM and the mock.
//!
//! The dashboard is generic over these traits so tests can substitute
//! counting fakes. [`ConfiguredSource`] picks a concrete source at runtime.

use retro_config::{RetroConfig, SourceKind};
use retro_core::entities::InsightRecord;

use crate::backend::BackendClient;
use crate::error::ClientError;
use crate::gemini::GeminiClient;
use crate::mock::MockSource;

/// Structured insights that came with a retrospective.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetrospectiveInsights {
    pub top: Vec<InsightRecord>,
    pub detailed: Vec<InsightRecord>,
}

/// A successfully loaded retrospective.
///
/// `insights` is `None` for narrative-only sources (the REST backend).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedRetrospective {
    pub summary_text: String,
    pub source_summary_count: Option<u32>,
    pub insights: Option<RetrospectiveInsights>,
}

/// How a custom insight came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightOrigin {
    /// Produced directly by a generator.
    Generated,
    /// Submitted to the backend; the retrospective should be reloaded.
    Submitted,
}

/// Result of a custom insight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomInsightOutcome {
    pub insight: InsightRecord,
    pub origin: InsightOrigin,
}

pub trait RetrospectiveSource {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Load the current retrospective.
    fn fetch_retrospective(
        &self,
    ) -> impl Future<Output = Result<LoadedRetrospective, ClientError>> + Send;
}

pub trait CustomInsightSource {
    /// Produce an insight for `tags`. `tags` is never empty.
    fn generate_custom_insight(
        &self,
        tags: &[String],
    ) -> impl Future<Output = Result<CustomInsightOutcome, ClientError>> + Send;
}

/// The source selected by configuration.
#[derive(Debug)]
pub enum ConfiguredSource {
    Backend(BackendClient),
    Gemini(GeminiClient),
    Mock(MockSource),
}

impl ConfiguredSource {
    /// Build the source named by `config.general.source`.
    ///
    /// A Gemini source without a usable key degrades to [`MockSource`] with a
    /// warning instead of failing.
    #[must_use]
    pub fn from_config(config: &RetroConfig) -> Self {
        match config.general.source {
            SourceKind::Backend => Self::Backend(BackendClient::new(&config.backend)),
            SourceKind::Gemini => match GeminiClient::from_config(&config.gemini) {
                Ok(client) => Self::Gemini(client),
                Err(error) => {
                    tracing::warn!(%error, "Gemini is not configured, using mock data");
                    Self::Mock(MockSource::new())
                }
            },
            SourceKind::Mock => Self::Mock(MockSource::new()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> SourceKind {
        match self {
            Self::Backend(_) => SourceKind::Backend,
            Self::Gemini(_) => SourceKind::Gemini,
            Self::Mock(_) => SourceKind::Mock,
        }
    }
}

impl RetrospectiveSource for ConfiguredSource {
    fn name(&self) -> &'static str {
        match self {
            Self::Backend(source) => source.name(),
            Self::Gemini(source) => source.name(),
            Self::Mock(source) => source.name(),
        }
    }

    async fn fetch_retrospective(&self) -> Result<LoadedRetrospective, ClientError> {
        match self {
            Self::Backend(source) => source.fetch_retrospective().await,
            Self::Gemini(source) => source.fetch_retrospective().await,
            Self::Mock(source) => source.fetch_retrospective().await,
        }
    }
}

impl CustomInsightSource for ConfiguredSource {
    async fn generate_custom_insight(
        &self,
        tags: &[String],
    ) -> Result<CustomInsightOutcome, ClientError> {
        match self {
            Self::Backend(source) => source.generate_custom_insight(tags).await,
            Self::Gemini(source) => source.generate_custom_insight(tags).await,
            Self::Mock(source) => source.generate_custom_insight(tags).await,
        }
    }
}
