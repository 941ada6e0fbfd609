//! API-sourced insights and the promoted-ID set.
//!
//! Promotion is pure set membership: an insight is in the promoted view iff
//! its ID is in the set. The set is not tied to the collection, so stale IDs
//! are harmless and IDs may be promoted before any insight carries them.
//! Both views are cached as index lists and rebuilt whenever the collection
//! or the set changes.

use std::collections::HashSet;

use retro_core::entities::InsightRecord;
use retro_core::ids::{PREFIX_API_DETAILED, PREFIX_API_TOP, insight_id};

#[derive(Debug, Default)]
pub struct InsightStore {
    all: Vec<InsightRecord>,
    promoted_ids: HashSet<String>,
    promoted_idx: Vec<usize>,
    detailed_idx: Vec<usize>,
}

impl InsightStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection. Records without an ID get
    /// `{prefix}-{tag-slug}-{position}`. The promoted set is left alone.
    pub fn set_all(&mut self, insights: Vec<InsightRecord>, prefix: &str) {
        self.all = with_ids(insights, prefix);
        self.rebuild_views();
    }

    /// Replace the collection from a structured retrospective. Top insights
    /// become the initial promoted set; everything else starts detailed.
    pub fn ingest_retrospective(&mut self, top: Vec<InsightRecord>, detailed: Vec<InsightRecord>) {
        let top = with_ids(top, PREFIX_API_TOP);
        let detailed = with_ids(detailed, PREFIX_API_DETAILED);

        self.promoted_ids = top
            .iter()
            .filter_map(InsightRecord::id)
            .map(str::to_string)
            .collect();
        self.all = top.into_iter().chain(detailed).collect();
        self.rebuild_views();
    }

    /// Drop every insight and every promoted ID.
    pub fn clear(&mut self) {
        self.all.clear();
        self.promoted_ids.clear();
        self.rebuild_views();
    }

    /// Flip membership of `id`. Returns whether `id` is promoted afterwards.
    pub fn toggle_promotion(&mut self, id: &str) -> bool {
        let promoted = if self.promoted_ids.remove(id) {
            false
        } else {
            self.promoted_ids.insert(id.to_string());
            true
        };
        self.rebuild_views();
        promoted
    }

    #[must_use]
    pub fn is_promoted(&self, id: &str) -> bool {
        self.promoted_ids.contains(id)
    }

    #[must_use]
    pub fn promoted_view(&self) -> Vec<&InsightRecord> {
        self.promoted_idx.iter().map(|&i| &self.all[i]).collect()
    }

    #[must_use]
    pub fn detailed_view(&self) -> Vec<&InsightRecord> {
        self.detailed_idx.iter().map(|&i| &self.all[i]).collect()
    }

    #[must_use]
    pub fn all(&self) -> &[InsightRecord] {
        &self.all
    }

    #[must_use]
    pub const fn promoted_ids(&self) -> &HashSet<String> {
        &self.promoted_ids
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&InsightRecord> {
        self.all.iter().find(|insight| insight.id() == Some(id))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    fn rebuild_views(&mut self) {
        let (promoted, detailed): (Vec<usize>, Vec<usize>) = (0..self.all.len())
            .partition(|&i| {
                self.all[i]
                    .id()
                    .is_some_and(|id| self.promoted_ids.contains(id))
            });
        self.promoted_idx = promoted;
        self.detailed_idx = detailed;
    }
}

fn with_ids(insights: Vec<InsightRecord>, prefix: &str) -> Vec<InsightRecord> {
    insights
        .into_iter()
        .enumerate()
        .map(|(position, mut insight)| {
            let sequence = u64::try_from(position).unwrap_or(u64::MAX);
            insight.ensure_id(|tags| insight_id(tags, prefix, sequence));
            insight
        })
        .collect()
}
