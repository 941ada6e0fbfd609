use retro_client::{ConfiguredSource, RetrospectiveSource};
use retro_core::entities::InsightRecord;
use retro_core::enums::{DisplayMode, LoadPhase};
use retro_dashboard::Dashboard;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SummaryArgs;
use crate::commands::shared::{InsightRow, error_state};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SummaryResponse<'a> {
    source: &'static str,
    phase: LoadPhase,
    narrative: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_summary_count: Option<u32>,
    display_mode: DisplayMode,
    top_insights: Vec<InsightRow<'a>>,
    detailed_insights: Vec<InsightRow<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sidebar: Option<&'a InsightRecord>,
}

/// Handle `retro summary`.
pub async fn handle(args: &SummaryArgs, ctx: AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut dashboard = ctx.into_dashboard(args.display_mode);

    dashboard.load().await?;
    if args.retry && dashboard.fetch().error().is_some() {
        tracing::info!("load failed, retrying once");
        dashboard.retry_load().await?;
    }
    if let Some(message) = dashboard.fetch().error() {
        return Err(error_state("load", message, dashboard.fetch().error_kind()));
    }

    for id in &args.promote {
        let promoted = dashboard.toggle_promotion(id);
        if dashboard.store().get(id).is_none() {
            tracing::warn!(id, promoted, "no loaded insight has this id");
        }
    }
    if let Some(id) = &args.select {
        if !dashboard.select_for_sidebar(id) {
            tracing::warn!(id, mode = %dashboard.display().mode(), "insight not opened in sidebar");
        }
    }

    output(&summary_response(&dashboard), flags.format)
}

fn summary_response(dashboard: &Dashboard<ConfiguredSource>) -> SummaryResponse<'_> {
    SummaryResponse {
        source: dashboard.source().name(),
        phase: dashboard.fetch().phase(),
        narrative: dashboard.fetch().narrative(),
        source_summary_count: dashboard.fetch().source_summary_count(),
        display_mode: dashboard.display().mode(),
        top_insights: dashboard.store().promoted_view().into_iter().map(InsightRow::from).collect(),
        detailed_insights: dashboard.store().detailed_view().into_iter().map(InsightRow::from).collect(),
        sidebar: dashboard.display().selected(),
    }
}
