use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `retro stats`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&retro_dashboard::stats::canned_snapshot(), flags.format)
}
