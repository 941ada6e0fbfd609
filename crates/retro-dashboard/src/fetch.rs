//! Retrospective loading.
//!
//! Each load is identified by a [`LoadTicket`]. Only the most recent ticket
//! may apply its result; results for older tickets, or any result after
//! [`RetrospectiveFetchController::detach`], are dropped with a log line.

use retro_client::{ClientError, LoadedRetrospective, RetrospectiveSource};
use retro_core::enums::LoadPhase;
use retro_core::errors::{CoreError, ErrorKind};

use crate::error::DashboardError;
use crate::store::InsightStore;

/// Handle for one load, returned by [`RetrospectiveFetchController::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a load only completes when its ticket is passed to finish_load"]
pub struct LoadTicket {
    generation: u64,
}

/// What happened to a finished load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Succeeded,
    Failed,
    /// A newer load started, or the controller was detached.
    Superseded,
}

#[derive(Debug, Default)]
pub struct RetrospectiveFetchController {
    phase: LoadPhase,
    narrative: String,
    source_summary_count: Option<u32>,
    error: Option<String>,
    error_kind: Option<ErrorKind>,
    generation: u64,
    detached: bool,
}

impl RetrospectiveFetchController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load: enter `loading`, clear the error and the insights.
    pub fn begin_load(&mut self, store: &mut InsightStore) -> LoadTicket {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.error = None;
        self.error_kind = None;
        store.clear();
        tracing::debug!(generation = self.generation, "retrospective load started");
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Apply the result of the load identified by `ticket`.
    ///
    /// On success the narrative is stored and the store is refilled: a
    /// structured response replaces insights and promotions, a narrative-only
    /// response clears both. On failure the narrative and the store are
    /// cleared and the message is kept.
    ///
    /// # Errors
    ///
    /// [`DashboardError::Core`] if the controller is not loading, which means
    /// `ticket` did not come from [`Self::begin_load`].
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<LoadedRetrospective, ClientError>,
        store: &mut InsightStore,
    ) -> Result<LoadOutcome, DashboardError> {
        if self.detached || ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                detached = self.detached,
                "dropping superseded retrospective result"
            );
            return Ok(LoadOutcome::Superseded);
        }

        match result {
            Ok(loaded) => {
                self.transition(LoadPhase::Succeeded)?;
                self.narrative = loaded.summary_text;
                self.source_summary_count = loaded.source_summary_count;
                match loaded.insights {
                    Some(insights) => store.ingest_retrospective(insights.top, insights.detailed),
                    None => store.clear(),
                }
                tracing::info!(insights = store.all().len(), "retrospective loaded");
                Ok(LoadOutcome::Succeeded)
            }
            Err(error) => {
                self.transition(LoadPhase::Failed)?;
                tracing::warn!(%error, "retrospective load failed");
                self.narrative.clear();
                self.source_summary_count = None;
                self.error = Some(error.user_message());
                self.error_kind = Some(error.kind());
                store.clear();
                Ok(LoadOutcome::Failed)
            }
        }
    }

    /// Run one complete load against `source`.
    ///
    /// # Errors
    ///
    /// Only for an internal phase inconsistency; load failures are recorded
    /// in [`Self::error`] and reported as [`LoadOutcome::Failed`].
    pub async fn load<S: RetrospectiveSource>(
        &mut self,
        source: &S,
        store: &mut InsightStore,
    ) -> Result<LoadOutcome, DashboardError> {
        let ticket = self.begin_load(store);
        tracing::debug!(source = source.name(), "fetching retrospective");
        let result = source.fetch_retrospective().await;
        self.finish_load(ticket, result, store)
    }

    /// Stop applying results. Used when the owning view goes away while a
    /// load may still be in flight.
    pub fn detach(&mut self) {
        self.generation += 1;
        self.detached = true;
    }

    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    #[must_use]
    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    #[must_use]
    pub const fn source_summary_count(&self) -> Option<u32> {
        self.source_summary_count
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        self.error_kind
    }

    fn transition(&mut self, next: LoadPhase) -> Result<(), CoreError> {
        if !self.phase.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                from: self.phase.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }
        self.phase = next;
        Ok(())
    }
}
