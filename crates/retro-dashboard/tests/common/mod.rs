#![allow(dead_code)]

use std::future;
use std::sync::atomic::{AtomicUsize, Ordering};

use retro_client::{
    ClientError, CustomInsightOutcome, CustomInsightSource, InsightOrigin, LoadedRetrospective,
    RetrospectiveInsights, RetrospectiveSource,
};
use retro_core::entities::InsightRecord;

type RetroReply = Box<dyn Fn(usize) -> Result<LoadedRetrospective, ClientError> + Send + Sync>;
type InsightReply =
    Box<dyn Fn(&[String]) -> Result<CustomInsightOutcome, ClientError> + Send + Sync>;

/// Source with scripted replies that counts its calls.
pub struct FakeSource {
    pub retro_calls: AtomicUsize,
    pub insight_calls: AtomicUsize,
    retro: RetroReply,
    insight: InsightReply,
}

impl FakeSource {
    pub fn new(
        retro: impl Fn(usize) -> Result<LoadedRetrospective, ClientError> + Send + Sync + 'static,
        insight: impl Fn(&[String]) -> Result<CustomInsightOutcome, ClientError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            retro_calls: AtomicUsize::new(0),
            insight_calls: AtomicUsize::new(0),
            retro: Box::new(retro),
            insight: Box::new(insight),
        }
    }

    /// Narrative-only retrospective, insights echoing the request.
    pub fn narrative(text: &'static str) -> Self {
        Self::new(move |_| Ok(narrative(text)), |tags| Ok(generated(tags)))
    }

    pub fn retro_calls(&self) -> usize {
        self.retro_calls.load(Ordering::SeqCst)
    }

    pub fn insight_calls(&self) -> usize {
        self.insight_calls.load(Ordering::SeqCst)
    }
}

impl RetrospectiveSource for FakeSource {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn fetch_retrospective(&self) -> Result<LoadedRetrospective, ClientError> {
        let call = self.retro_calls.fetch_add(1, Ordering::SeqCst);
        (self.retro)(call)
    }
}

impl CustomInsightSource for FakeSource {
    async fn generate_custom_insight(
        &self,
        tags: &[String],
    ) -> Result<CustomInsightOutcome, ClientError> {
        self.insight_calls.fetch_add(1, Ordering::SeqCst);
        (self.insight)(tags)
    }
}

/// Source whose requests never complete.
pub struct PendingSource;

impl RetrospectiveSource for PendingSource {
    fn name(&self) -> &'static str {
        "pending"
    }

    async fn fetch_retrospective(&self) -> Result<LoadedRetrospective, ClientError> {
        future::pending().await
    }
}

impl CustomInsightSource for PendingSource {
    async fn generate_custom_insight(
        &self,
        _tags: &[String],
    ) -> Result<CustomInsightOutcome, ClientError> {
        future::pending().await
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

pub fn insight(tags: &[&str]) -> InsightRecord {
    InsightRecord {
        tags: strings(tags),
        count: 2,
        summary: "summary".into(),
        ..InsightRecord::default()
    }
}

pub fn narrative(text: &str) -> LoadedRetrospective {
    LoadedRetrospective {
        summary_text: text.into(),
        source_summary_count: Some(3),
        insights: None,
    }
}

pub fn structured(top: &[&[&str]], detailed: &[&[&str]]) -> LoadedRetrospective {
    LoadedRetrospective {
        summary_text: "structured".into(),
        source_summary_count: None,
        insights: Some(RetrospectiveInsights {
            top: top.iter().map(|tags| insight(tags)).collect(),
            detailed: detailed.iter().map(|tags| insight(tags)).collect(),
        }),
    }
}

pub fn generated(tags: &[String]) -> CustomInsightOutcome {
    CustomInsightOutcome {
        insight: InsightRecord {
            tags: tags.to_vec(),
            count: 4,
            summary: "generated".into(),
            ..InsightRecord::default()
        },
        origin: InsightOrigin::Generated,
    }
}

pub fn echoing(echo: &'static [&'static str]) -> impl Fn(&[String]) -> Result<CustomInsightOutcome, ClientError> {
    move |_| {
        Ok(CustomInsightOutcome {
            insight: InsightRecord {
                tags: strings(echo),
                count: 1,
                ..InsightRecord::default()
            },
            origin: InsightOrigin::Generated,
        })
    }
}
