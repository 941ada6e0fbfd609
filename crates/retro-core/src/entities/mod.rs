mod alert;
mod insight;
mod statistics;

pub use alert::AlertRecord;
pub use insight::{InsightRecord, SuggestedAction, TrendPoint};
pub use statistics::{DailyTrend, ItemTypeCount, LoadSlice, StatisticalSnapshot, TopTagCount};
