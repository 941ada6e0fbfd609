use retro_core::tags::EXAMPLE_ALERT_TAGS;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `retro tags`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&EXAMPLE_ALERT_TAGS, flags.format)
}
