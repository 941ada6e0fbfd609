//! Custom insight requests for a user-chosen tag selection.

use chrono::Utc;
use retro_client::{CustomInsightSource, InsightOrigin};
use retro_core::entities::InsightRecord;
use retro_core::ids::{PREFIX_CUSTOM, insight_id};
use retro_core::tags::reconcile_tags;

use crate::busy::BusyFlag;
use crate::error::DashboardError;

pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one tag.";

/// Custom insights, most recent first, plus the state of the request in
/// flight. Custom insights are never partitioned by promotion.
#[derive(Debug, Default)]
pub struct CustomInsightSubmitter {
    insights: Vec<InsightRecord>,
    busy: BusyFlag,
    error: Option<String>,
    last_sequence: u64,
}

impl CustomInsightSubmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request an insight for `tags` and prepend it on success.
    ///
    /// The returned origin tells the caller whether the retrospective needs
    /// reloading ([`InsightOrigin::Submitted`]). On failure the message is
    /// also kept in [`Self::error`] and the list is left untouched.
    ///
    /// # Errors
    ///
    /// [`DashboardError::Validation`] for an empty selection (no request is
    /// made), otherwise the client failure.
    pub async fn generate<S: CustomInsightSource>(
        &mut self,
        source: &S,
        tags: &[String],
    ) -> Result<InsightOrigin, DashboardError> {
        let _busy = self.busy.acquire();
        self.error = None;

        if tags.is_empty() {
            return Err(self.fail(DashboardError::Validation(EMPTY_SELECTION_MESSAGE.into())));
        }

        match source.generate_custom_insight(tags).await {
            Ok(outcome) => {
                self.accept(tags, outcome.insight);
                Ok(outcome.origin)
            }
            Err(error) => {
                tracing::warn!(%error, tags = ?tags, "custom insight request failed");
                Err(self.fail(error.into()))
            }
        }
    }

    #[must_use]
    pub fn insights(&self) -> &[InsightRecord] {
        &self.insights
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// A handle that observes the busy flag from elsewhere.
    #[must_use]
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    fn accept(&mut self, requested: &[String], mut insight: InsightRecord) {
        let reconciled = reconcile_tags(requested, &insight.tags);
        if !reconciled.matched {
            tracing::warn!(
                requested = ?requested,
                echoed = ?insight.tags,
                "generated insight tags differ from the selection, keeping the selection"
            );
        }
        insight.tags = reconciled.tags;

        let sequence = self.next_sequence();
        insight.ensure_id(|tags| insight_id(tags, PREFIX_CUSTOM, sequence));
        self.insights.insert(0, insight);
    }

    fn fail(&mut self, error: DashboardError) -> DashboardError {
        self.error = Some(error.user_message());
        error
    }

    /// Millisecond timestamp, bumped when two requests land in the same
    /// millisecond.
    fn next_sequence(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        self.last_sequence = now.max(self.last_sequence + 1);
        self.last_sequence
    }
}
