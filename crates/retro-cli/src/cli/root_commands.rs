use clap::{Args, Subcommand, ValueEnum};
use retro_core::enums::DisplayMode;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load the retrospective and show narrative, top and detailed insights.
    Summary(SummaryArgs),
    /// Request a custom insight for a tag selection.
    Insight(InsightArgs),
    /// Show the statistical snapshot.
    Stats,
    /// Sample data from the backend's mock endpoints.
    Mock {
        #[command(subcommand)]
        action: MockCommands,
    },
    /// Submit a daily summary to the backend.
    Submit(SubmitArgs),
    /// List the example alert tags offered for selection.
    Tags,
    /// Print the JSON schema of an LLM response shape.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SummaryArgs {
    /// Toggle promotion of an insight ID (repeatable).
    #[arg(long = "promote", value_name = "ID")]
    pub promote: Vec<String>,

    /// Detail display mode (defaults to `general.display_mode`).
    #[arg(long)]
    pub display_mode: Option<DisplayMode>,

    /// Open this insight in the sidebar.
    #[arg(long, value_name = "ID")]
    pub select: Option<String>,

    /// Try once more if loading fails.
    #[arg(long)]
    pub retry: bool,
}

#[derive(Clone, Debug, Args)]
pub struct InsightArgs {
    /// Tag to include in the selection (repeatable, order is kept).
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Try once more if the request fails.
    #[arg(long)]
    pub retry: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    /// Summary text.
    #[arg(long)]
    pub text: String,
}

#[derive(Clone, Debug, Subcommand)]
pub enum MockCommands {
    /// Sample daily summaries.
    Daily {
        /// Number of records (defaults to `general.mock_count`).
        #[arg(long)]
        count: Option<u32>,
    },
    /// Sample generated retrospectives.
    Retrospectives {
        /// Number of records (defaults to `general.mock_count`).
        #[arg(long)]
        count: Option<u32>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    /// A single insight record.
    Insight,
    /// A full retrospective.
    Retrospective,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub kind: SchemaKind,
}
