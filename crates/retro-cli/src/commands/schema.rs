use retro_core::entities::InsightRecord;
use retro_core::responses::RetrospectiveSummary;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaKind};
use crate::output::output;

/// Handle `retro schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.kind {
        SchemaKind::Insight => schemars::schema_for!(InsightRecord),
        SchemaKind::Retrospective => schemars::schema_for!(RetrospectiveSummary),
    };
    output(&schema, flags.format)
}
