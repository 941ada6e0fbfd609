//! Canned statistics shown on the statistical insights tab.

use retro_core::entities::{DailyTrend, ItemTypeCount, LoadSlice, StatisticalSnapshot, TopTagCount};
use retro_core::enums::ItemType;

const TOP_TAGS: [(&str, u32); 5] = [
    ("Suppressed", 15),
    ("Hadoop", 15),
    ("JVM", 15),
    ("Network", 15),
    ("Uncategorized", 13),
];

const ITEM_COUNTS: [(ItemType, u32); 4] = [
    (ItemType::Incidents, 73),
    (ItemType::Alerts, 0),
    (ItemType::Tasks, 1),
    (ItemType::Notes, 1),
];

// day, incidents, alerts, tasks, notes
const WEEK: [(&str, u32, u32, u32, u32); 7] = [
    ("Mon", 5, 2, 1, 0),
    ("Tue", 17, 5, 0, 1),
    ("Wed", 10, 7, 2, 0),
    ("Thu", 12, 3, 1, 1),
    ("Fri", 15, 6, 0, 0),
    ("Sat", 3, 2, 1, 1),
    ("Sun", 2, 1, 0, 0),
];

const LOAD: [(&str, u32, &str); 5] = [
    ("Category A", 20, "#8b5cf6"),
    ("Category B", 15, "#f97316"),
    ("Category C", 12, "#3b82f6"),
    ("Category D", 10, "#10b981"),
    ("Category E", 8, "#ef4444"),
];

#[must_use]
pub fn canned_snapshot() -> StatisticalSnapshot {
    StatisticalSnapshot::new(
        TOP_TAGS
            .iter()
            .map(|&(tag, count)| TopTagCount {
                tag: tag.to_string(),
                count,
            })
            .collect(),
        ITEM_COUNTS
            .iter()
            .map(|&(item_type, count)| ItemTypeCount { item_type, count })
            .collect(),
        WEEK.iter()
            .map(|&(day, incidents, alerts, tasks, notes)| DailyTrend {
                day: day.to_string(),
                incidents,
                alerts,
                tasks,
                notes,
            })
            .collect(),
        LOAD.iter()
            .map(|&(name, value, color)| LoadSlice {
                name: name.to_string(),
                value,
                color: color.to_string(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_total_matches_distribution() {
        let snapshot = canned_snapshot();
        assert_eq!(snapshot.total_oncall_time(), 65);
        assert_eq!(snapshot.top_tags_by_count().len(), 5);
        assert_eq!(snapshot.weekly_trend()[1].incidents, 17);
        assert_eq!(snapshot.item_counts_by_type()[0].count, 73);
    }
}
