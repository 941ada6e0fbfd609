use clap::Parser;
use retro_config::SourceKind;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `retro` binary.
#[derive(Debug, Parser)]
#[command(name = "retro", version, about = "Oncall retrospective dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Source override: backend, gemini, mock
    #[arg(short, long, global = true)]
    pub source: Option<SourceKind>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            source: self.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use retro_config::SourceKind;
    use retro_core::enums::DisplayMode;

    use super::root_commands::{MockCommands, SchemaKind};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["retro", "--format", "table", "--verbose", "stats"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["retro", "tags", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Tags));
    }

    #[test]
    fn source_override_accepts_alias() {
        let cli = Cli::try_parse_from(["retro", "--source", "llm", "summary"])
            .expect("cli should parse");
        assert_eq!(cli.global_flags().source, Some(SourceKind::Gemini));
    }

    #[test]
    fn source_override_rejects_unknown() {
        assert!(Cli::try_parse_from(["retro", "--source", "ftp", "summary"]).is_err());
    }

    #[test]
    fn summary_collects_promotions() {
        let cli = Cli::try_parse_from([
            "retro",
            "summary",
            "--promote",
            "api-top-a-0",
            "--promote",
            "api-detailed-b-0",
            "--display-mode",
            "inline",
        ])
        .expect("cli should parse");

        let Commands::Summary(args) = cli.command else {
            panic!("expected summary");
        };
        assert_eq!(args.promote, vec!["api-top-a-0", "api-detailed-b-0"]);
        assert_eq!(args.display_mode, Some(DisplayMode::Inline));
        assert!(!args.retry);
    }

    #[test]
    fn insight_keeps_tag_order() {
        let cli = Cli::try_parse_from(["retro", "insight", "--tag", "JVM", "--tag", "Hadoop"])
            .expect("cli should parse");
        let Commands::Insight(args) = cli.command else {
            panic!("expected insight");
        };
        assert_eq!(args.tags, vec!["JVM", "Hadoop"]);
    }

    #[test]
    fn mock_count_is_optional() {
        let cli = Cli::try_parse_from(["retro", "mock", "daily"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Mock {
                action: MockCommands::Daily { count: None }
            }
        ));
    }

    #[test]
    fn schema_kind_parses() {
        let cli = Cli::try_parse_from(["retro", "schema", "retrospective"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Schema(ref args) if args.kind == SchemaKind::Retrospective
        ));
    }
}
