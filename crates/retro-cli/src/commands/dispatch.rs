use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Summary(args) => commands::summary::handle(&args, ctx, flags).await,
        Commands::Insight(args) => commands::insight::handle(&args, ctx, flags).await,
        Commands::Mock { action } => commands::mock::handle(&action, &ctx, flags).await,
        Commands::Submit(args) => commands::submit::handle(&args, &ctx, flags).await,
        Commands::Tags | Commands::Schema(_) | Commands::Stats => {
            unreachable!("tags/schema/stats are pre-dispatched in main")
        }
    }
}
