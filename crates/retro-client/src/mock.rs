//! Offline source returning canned data.
//!
//! Used when no backend is reachable or no LLM key is configured. Output is
//! deterministic apart from alert timestamps, which count back from now.

use chrono::{Duration, Utc};
use retro_core::entities::{AlertRecord, InsightRecord, SuggestedAction, TrendPoint};
use retro_core::enums::Severity;

use crate::error::ClientError;
use crate::source::{
    CustomInsightOutcome, CustomInsightSource, InsightOrigin, LoadedRetrospective,
    RetrospectiveInsights, RetrospectiveSource,
};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Percent offsets applied to the daily average, Monday first.
const WEEKLY_SHAPE: [i64; 7] = [-25, 10, 0, 25, -10, 5, -5];

const MOCK_SUMMARY: &str = "A noisy week dominated by suppressed Hadoop alerts and \
JVM memory pressure on the ingestion tier. Network flaps on Tuesday and Thursday \
accounted for most pages outside business hours.";

#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

impl MockSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The canned retrospective.
    #[must_use]
    pub fn retrospective(&self) -> LoadedRetrospective {
        let top = vec![
            mock_insight(
                &["Suppressed", "Hadoop"],
                15,
                "HDFS datanode heartbeat alerts fired repeatedly while suppressed for maintenance.",
                "Align maintenance windows with suppression expiry.",
                "Datanode heartbeat lost",
                Severity::Warning,
            ),
            mock_insight(
                &["JVM", "Memory Leak"],
                9,
                "Ingestion workers hit old-gen exhaustion after each deploy.",
                "Capture a heap dump on the next occurrence and compare against the previous release.",
                "Old gen usage above 95%",
                Severity::Critical,
            ),
        ];
        let detailed = vec![
            mock_insight(
                &["Network", "Cloud Provider"],
                7,
                "Cross-zone packet loss triggered connection resets between brokers.",
                "Open a ticket with the provider including the loss graphs.",
                "Packet loss above threshold",
                Severity::Warning,
            ),
            mock_insight(
                &["Database", "Performance"],
                5,
                "Slow query alerts clustered around the nightly compaction job.",
                "Move compaction out of the reporting window.",
                "Query latency p99 high",
                Severity::Info,
            ),
            mock_insight(
                &["Uncategorized"],
                13,
                "Alerts without routing tags, mostly from legacy cron hosts.",
                "Tag the remaining legacy checks so they route correctly.",
                "Cron job exited non-zero",
                Severity::Info,
            ),
        ];
        LoadedRetrospective {
            summary_text: MOCK_SUMMARY.to_string(),
            source_summary_count: None,
            insights: Some(RetrospectiveInsights { top, detailed }),
        }
    }

    /// A deterministic insight for `tags`.
    #[must_use]
    pub fn custom_insight(&self, tags: &[String]) -> InsightRecord {
        let count = u32::try_from(3 + 2 * tags.len()).unwrap_or(u32::MAX);
        let joined = tags.join(" + ");
        let title = format!("{joined} threshold exceeded");
        InsightRecord {
            id: None,
            tags: tags.to_vec(),
            count,
            summary: format!(
                "{count} alerts carried {joined} this week, most of them during deploy windows."
            ),
            recommendation: Some(format!("Review the runbook for {joined} alerts.")),
            example_alert_titles: Some(vec![title.clone()]),
            trend_data: Some(weekly_trend(count)),
            detailed_alerts: Some(mock_alerts(&title, 3, Severity::Warning, tags)),
            ..InsightRecord::default()
        }
    }
}

fn mock_insight(
    tags: &[&str],
    count: u32,
    summary: &str,
    recommendation: &str,
    alert_title: &str,
    severity: Severity,
) -> InsightRecord {
    let tags: Vec<String> = tags.iter().map(ToString::to_string).collect();
    InsightRecord {
        id: None,
        count,
        summary: summary.to_string(),
        recommendation: Some(recommendation.to_string()),
        example_alert_titles: Some(vec![alert_title.to_string()]),
        trend_data: Some(weekly_trend(count)),
        alert_notes_summary: Some(format!("Responders noted {count} occurrences.")),
        detailed_alerts: Some(mock_alerts(alert_title, 3, severity, &tags)),
        suggested_action: Some(SuggestedAction {
            display_text: "Open runbook".to_string(),
            action_url: None,
        }),
        tags,
    }
}

/// Spread `total` over a week following [`WEEKLY_SHAPE`].
fn weekly_trend(total: u32) -> Vec<TrendPoint> {
    let average = i64::from(total) / 7;
    WEEKDAYS
        .iter()
        .zip(WEEKLY_SHAPE)
        .map(|(day, percent)| {
            let count = (average + average * percent / 100).max(0);
            TrendPoint {
                label: (*day).to_string(),
                count: u32::try_from(count).unwrap_or(0),
            }
        })
        .collect()
}

fn mock_alerts(base_title: &str, n: usize, severity: Severity, tags: &[String]) -> Vec<AlertRecord> {
    let now = Utc::now();
    (0..n)
        .map(|i| {
            let minutes = i64::try_from(i + 1).unwrap_or(1) * 37;
            AlertRecord {
                id: format!("MOCK-{}-{}", base_title.replace(' ', "-"), i + 1000),
                title: format!("{base_title} Instance #{}", i + 1),
                timestamp: (now - Duration::minutes(minutes))
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
                severity: Some(severity),
                description: Some(format!("Automated alert: {base_title}.")),
                tags: Some(tags.to_vec()),
                notes: None,
            }
        })
        .collect()
}

impl RetrospectiveSource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_retrospective(&self) -> Result<LoadedRetrospective, ClientError> {
        Ok(self.retrospective())
    }
}

impl CustomInsightSource for MockSource {
    async fn generate_custom_insight(
        &self,
        tags: &[String],
    ) -> Result<CustomInsightOutcome, ClientError> {
        if tags.is_empty() {
            return Err(ClientError::InvalidRequest(
                "Cannot generate custom insight with no tags selected.".into(),
            ));
        }
        Ok(CustomInsightOutcome {
            insight: self.custom_insight(tags),
            origin: InsightOrigin::Generated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn retrospective_has_both_lists() {
        let retro = MockSource::new().retrospective();
        let insights = retro.insights.unwrap();
        assert_eq!(insights.top.len(), 2);
        assert_eq!(insights.detailed.len(), 3);
        assert!(insights.top.iter().all(|i| i.id.is_none()));
    }

    #[test]
    fn alert_ids_follow_title() {
        let alerts = mock_alerts("Disk full", 2, Severity::Info, &[]);
        assert_eq!(alerts[0].id, "MOCK-Disk-full-1000");
        assert_eq!(alerts[1].title, "Disk full Instance #2");
    }

    #[test]
    fn weekly_trend_has_seven_days() {
        let trend = weekly_trend(70);
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0].label, "Mon");
        assert_eq!(trend[0].count, 8);
        assert_eq!(trend[3].count, 12);
    }

    #[test]
    fn custom_insight_echoes_tags() {
        let tags = vec!["Network".to_string(), "Flaky".to_string()];
        let insight = MockSource::new().custom_insight(&tags);
        assert_eq!(insight.tags, tags);
        assert_eq!(insight.count, 7);
        assert_eq!(insight.detailed_alerts.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn empty_selection_rejected() {
        let err = MockSource::new().generate_custom_insight(&[]).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
