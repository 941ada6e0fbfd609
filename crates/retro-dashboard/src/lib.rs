//! # retro-dashboard
//!
//! Session state of the oncall retrospective dashboard:
//! - [`store::InsightStore`]: API-sourced insights and the promoted-ID set
//! - [`submitter::CustomInsightSubmitter`]: custom insights for a tag selection
//! - [`display::DisplayModeController`]: sidebar vs inline detail
//! - [`fetch::RetrospectiveFetchController`]: load phase, narrative, error
//! - [`stats`]: the statistical snapshot
//!
//! [`Dashboard`] wires them together around one source.

pub mod busy;
pub mod display;
pub mod fetch;
pub mod stats;
pub mod store;
pub mod submitter;

mod error;

pub use error::DashboardError;

use retro_client::{CustomInsightSource, InsightOrigin, RetrospectiveSource};
use retro_core::entities::{InsightRecord, StatisticalSnapshot};
use retro_core::enums::{AppTab, DisplayMode};
use retro_core::tags::TagSelection;

use crate::display::DisplayModeController;
use crate::fetch::{LoadOutcome, RetrospectiveFetchController};
use crate::store::InsightStore;
use crate::submitter::CustomInsightSubmitter;

/// An operation a manual retry can re-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailedOperation {
    Load,
    CustomInsight(Vec<String>),
}

/// What a retry re-ran, and how it went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryOutcome {
    Load(LoadOutcome),
    CustomInsight(InsightOrigin),
}

/// One user session over a retrospective source.
#[derive(Debug)]
pub struct Dashboard<S> {
    source: S,
    store: InsightStore,
    fetch: RetrospectiveFetchController,
    submitter: CustomInsightSubmitter,
    display: DisplayModeController,
    selection: TagSelection,
    active_tab: AppTab,
    stats: Option<StatisticalSnapshot>,
    failed_custom_tags: Option<Vec<String>>,
}

impl<S> Dashboard<S>
where
    S: RetrospectiveSource + CustomInsightSource,
{
    #[must_use]
    pub fn new(source: S, display_mode: DisplayMode) -> Self {
        Self {
            source,
            store: InsightStore::new(),
            fetch: RetrospectiveFetchController::new(),
            submitter: CustomInsightSubmitter::new(),
            display: DisplayModeController::new(display_mode),
            selection: TagSelection::new(),
            active_tab: AppTab::default(),
            stats: None,
            failed_custom_tags: None,
        }
    }

    /// Load (or reload) the retrospective. Failures are recorded on the fetch
    /// controller, not returned.
    ///
    /// # Errors
    ///
    /// Only for an internal phase inconsistency.
    pub async fn load(&mut self) -> Result<LoadOutcome, DashboardError> {
        let outcome = self.fetch.load(&self.source, &mut self.store).await?;
        if outcome != LoadOutcome::Superseded {
            self.stats = Some(stats::canned_snapshot());
        }
        Ok(outcome)
    }

    /// Request a custom insight for the current tag selection.
    ///
    /// # Errors
    ///
    /// See [`Self::generate_custom_insight_for`].
    pub async fn generate_custom_insight(&mut self) -> Result<InsightOrigin, DashboardError> {
        let tags = self.selection.as_slice().to_vec();
        self.generate_custom_insight_for(tags).await
    }

    /// Request a custom insight for `tags`. Closes the sidebar first. A
    /// submission (rather than a generation) reloads the retrospective once.
    ///
    /// # Errors
    ///
    /// [`DashboardError::Validation`] for an empty selection, otherwise the
    /// client failure. The message is also kept on the submitter.
    pub async fn generate_custom_insight_for(
        &mut self,
        tags: Vec<String>,
    ) -> Result<InsightOrigin, DashboardError> {
        self.display.close_sidebar();

        let origin = match self.submitter.generate(&self.source, &tags).await {
            Ok(origin) => origin,
            Err(error) => {
                if error.kind().is_retryable() {
                    self.failed_custom_tags = Some(tags);
                }
                return Err(error);
            }
        };
        self.failed_custom_tags = None;

        if origin == InsightOrigin::Submitted {
            tracing::debug!("submission accepted, reloading retrospective");
            self.load().await?;
        }
        Ok(origin)
    }

    /// Reload if the last load failed. `None` if the fetch controller holds
    /// no error.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub async fn retry_load(&mut self) -> Result<Option<LoadOutcome>, DashboardError> {
        if self.fetch.error().is_none() {
            return Ok(None);
        }
        self.load().await.map(Some)
    }

    /// Re-send the tags of the last failed custom insight request. `None` if
    /// the last request did not fail.
    ///
    /// # Errors
    ///
    /// See [`Self::generate_custom_insight_for`].
    pub async fn retry_custom_insight(&mut self) -> Result<Option<InsightOrigin>, DashboardError> {
        match self.failed_custom_tags.take() {
            Some(tags) => self.generate_custom_insight_for(tags).await.map(Some),
            None => Ok(None),
        }
    }

    /// Re-run every failed operation, the load first. Empty if nothing failed.
    ///
    /// # Errors
    ///
    /// The custom insight failure, after the load has been re-run.
    pub async fn retry(&mut self) -> Result<Vec<RetryOutcome>, DashboardError> {
        let mut outcomes = Vec::new();
        if let Some(outcome) = self.retry_load().await? {
            outcomes.push(RetryOutcome::Load(outcome));
        }
        if let Some(origin) = self.retry_custom_insight().await? {
            outcomes.push(RetryOutcome::CustomInsight(origin));
        }
        Ok(outcomes)
    }

    pub fn toggle_promotion(&mut self, id: &str) -> bool {
        self.store.toggle_promotion(id)
    }

    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.selection.toggle(tag)
    }

    pub fn clear_tags(&mut self) {
        self.selection.clear();
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display.toggle()
    }

    /// Open the insight with `id` (API-sourced or custom) in the sidebar.
    /// Returns `false` if there is no such insight or the mode is inline.
    pub fn select_for_sidebar(&mut self, id: &str) -> bool {
        let found = self
            .store
            .get(id)
            .or_else(|| self.submitter.insights().iter().find(|i| i.id() == Some(id)))
            .cloned();
        found.is_some_and(|insight| self.display.select_for_sidebar(insight))
    }

    pub fn close_sidebar(&mut self) {
        self.display.close_sidebar();
    }

    pub fn set_active_tab(&mut self, tab: AppTab) {
        self.active_tab = tab;
    }

    /// Stop applying in-flight results.
    pub fn detach(&mut self) {
        self.fetch.detach();
    }

    #[must_use]
    pub const fn store(&self) -> &InsightStore {
        &self.store
    }

    #[must_use]
    pub const fn fetch(&self) -> &RetrospectiveFetchController {
        &self.fetch
    }

    #[must_use]
    pub const fn submitter(&self) -> &CustomInsightSubmitter {
        &self.submitter
    }

    #[must_use]
    pub const fn display(&self) -> &DisplayModeController {
        &self.display
    }

    #[must_use]
    pub const fn selection(&self) -> &TagSelection {
        &self.selection
    }

    #[must_use]
    pub const fn active_tab(&self) -> AppTab {
        self.active_tab
    }

    #[must_use]
    pub const fn stats(&self) -> Option<&StatisticalSnapshot> {
        self.stats.as_ref()
    }

    /// Operations [`Self::retry`] would re-run, in that order.
    #[must_use]
    pub fn failed_operations(&self) -> Vec<FailedOperation> {
        let load = self.fetch.error().map(|_| FailedOperation::Load);
        let custom = self
            .failed_custom_tags
            .clone()
            .map(FailedOperation::CustomInsight);
        load.into_iter().chain(custom).collect()
    }

    #[must_use]
    pub fn custom_insights(&self) -> &[InsightRecord] {
        self.submitter.insights()
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }
}
