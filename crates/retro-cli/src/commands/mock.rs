use crate::cli::GlobalFlags;
use crate::cli::root_commands::MockCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `retro mock`.
pub async fn handle(action: &MockCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let backend = ctx.backend();
    let default_count = ctx.config.general.mock_count;
    let items = match action {
        MockCommands::Daily { count } => {
            backend
                .mock_daily_summaries(Some(count.unwrap_or(default_count)))
                .await?
        }
        MockCommands::Retrospectives { count } => {
            backend
                .mock_retrospective_summaries(Some(count.unwrap_or(default_count)))
                .await?
        }
    };
    output(&items, flags.format)
}
