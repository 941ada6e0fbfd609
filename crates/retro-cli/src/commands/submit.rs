use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubmitArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `retro submit`.
pub async fn handle(args: &SubmitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.text.trim().is_empty() {
        anyhow::bail!("summary text must not be empty");
    }
    let response = ctx
        .backend()
        .submit_daily(&args.text)
        .await
        .context("daily summary submission failed")?;
    output(&response, flags.format)
}
