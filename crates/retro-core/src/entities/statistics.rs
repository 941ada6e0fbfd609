use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemType;

/// A tag and how many items carried it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopTagCount {
    pub tag: String,
    pub count: u32,
}

/// How many items of one type were seen.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ItemTypeCount {
    pub item_type: ItemType,
    pub count: u32,
}

/// Per-day counts for the weekly multi-series trend.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DailyTrend {
    pub day: String,
    pub incidents: u32,
    pub alerts: u32,
    pub tasks: u32,
    pub notes: u32,
}

/// One named, colored slice of the oncall load distribution.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoadSlice {
    pub name: String,
    pub value: u32,
    /// Hex color, e.g. `#8b5cf6`.
    pub color: String,
}

/// Aggregate numbers behind the statistics tab.
///
/// `total_oncall_time` always equals the sum of the load distribution; the
/// only way to change the distribution is [`StatisticalSnapshot::with_distribution`],
/// which recomputes it.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct StatisticalSnapshot {
    top_tags_by_count: Vec<TopTagCount>,
    item_counts_by_type: Vec<ItemTypeCount>,
    weekly_trend: Vec<DailyTrend>,
    oncall_load_distribution: Vec<LoadSlice>,
    total_oncall_time: u32,
}

impl StatisticalSnapshot {
    /// Number of tags the top-tags section shows.
    pub const TOP_TAG_LIMIT: usize = 5;

    /// Build a snapshot. Top tags beyond [`Self::TOP_TAG_LIMIT`] are dropped.
    #[must_use]
    pub fn new(
        mut top_tags_by_count: Vec<TopTagCount>,
        item_counts_by_type: Vec<ItemTypeCount>,
        weekly_trend: Vec<DailyTrend>,
        oncall_load_distribution: Vec<LoadSlice>,
    ) -> Self {
        top_tags_by_count.truncate(Self::TOP_TAG_LIMIT);
        let total_oncall_time = Self::sum(&oncall_load_distribution);
        Self {
            top_tags_by_count,
            item_counts_by_type,
            weekly_trend,
            oncall_load_distribution,
            total_oncall_time,
        }
    }

    /// Replace the load distribution and recompute the total.
    #[must_use]
    pub fn with_distribution(mut self, distribution: Vec<LoadSlice>) -> Self {
        self.total_oncall_time = Self::sum(&distribution);
        self.oncall_load_distribution = distribution;
        self
    }

    fn sum(distribution: &[LoadSlice]) -> u32 {
        distribution
            .iter()
            .fold(0, |total, slice| total.saturating_add(slice.value))
    }

    #[must_use]
    pub fn top_tags_by_count(&self) -> &[TopTagCount] {
        &self.top_tags_by_count
    }

    #[must_use]
    pub fn item_counts_by_type(&self) -> &[ItemTypeCount] {
        &self.item_counts_by_type
    }

    #[must_use]
    pub fn weekly_trend(&self) -> &[DailyTrend] {
        &self.weekly_trend
    }

    #[must_use]
    pub fn oncall_load_distribution(&self) -> &[LoadSlice] {
        &self.oncall_load_distribution
    }

    #[must_use]
    pub const fn total_oncall_time(&self) -> u32 {
        self.total_oncall_time
    }
}
