use retro_client::{InsightOrigin, RetrospectiveSource};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InsightArgs;
use crate::commands::shared::{InsightRow, error_state};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InsightResponse<'a> {
    source: &'static str,
    submitted: bool,
    custom_insights: Vec<InsightRow<'a>>,
    narrative: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_summary_count: Option<u32>,
}

/// Handle `retro insight`.
pub async fn handle(args: &InsightArgs, ctx: AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut dashboard = ctx.into_dashboard(None);
    dashboard.load().await?;
    if let Some(message) = dashboard.fetch().error() {
        tracing::warn!(message, "retrospective unavailable, continuing with the insight request");
    }

    for tag in &args.tags {
        dashboard.toggle_tag(tag);
    }

    let mut result = dashboard.generate_custom_insight().await;
    if args.retry && result.as_ref().is_err_and(|error| error.kind().is_retryable()) {
        tracing::info!("insight request failed, retrying once");
        result = match dashboard.retry_custom_insight().await {
            Ok(Some(origin)) => Ok(origin),
            Ok(None) => result,
            Err(error) => Err(error),
        };
    }
    let origin = match result {
        Ok(origin) => origin,
        Err(error) => {
            let message = dashboard
                .submitter()
                .error()
                .map_or_else(|| error.user_message(), str::to_string);
            return Err(error_state("insight", &message, Some(error.kind())));
        }
    };

    output(
        &InsightResponse {
            source: dashboard.source().name(),
            submitted: origin == InsightOrigin::Submitted,
            custom_insights: dashboard.custom_insights().iter().map(InsightRow::from).collect(),
            narrative: dashboard.fetch().narrative(),
            source_summary_count: dashboard.fetch().source_summary_count(),
        },
        flags.format,
    )
}
