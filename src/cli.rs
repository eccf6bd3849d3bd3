//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::model::ArchivePeriod;

/// Top-level CLI parser for `canonical`.
#[derive(Debug, Parser)]
#[command(name = "canonical", version, about = "Resolve canonical URLs for content")]
pub struct Cli {
    /// Log resolution details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve the canonical URL of one content item.
    Resolve(ResolveArgs),
    /// Resolve every case in a YAML file and compare with the expected URL.
    Check {
        /// YAML file containing a list of cases.
        file: PathBuf,
        /// Site configuration file.
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

/// Arguments describing the item and page for `resolve`.
#[derive(Debug, Default, Args)]
pub struct ResolveArgs {
    /// Site configuration file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Author-provided canonical URL.
    #[arg(long = "override", value_name = "URL")]
    pub canonical_override: Option<String>,
    /// Stored permalink of the item.
    #[arg(long, value_name = "URL")]
    pub permalink: Option<String>,
    /// Item slug, for dynamic permalinks.
    #[arg(long)]
    pub slug: Option<String>,
    /// Item ID, for dynamic permalinks.
    #[arg(long)]
    pub id: Option<u64>,
    /// Publish date, for dynamic permalinks.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub published: Option<NaiveDate>,
    /// Enable dynamic permalinks regardless of configuration.
    #[arg(long)]
    pub dynamic: bool,
    /// Treat the request as the date archive for PERIOD (YYYY[/MM[/DD]]).
    #[arg(long, value_name = "PERIOD")]
    pub date_archive: Option<ArchivePeriod>,
    /// Treat the request as an attachment page requested at PATH.
    #[arg(long, value_name = "PATH")]
    pub attachment: Option<String>,
    /// Print which rule produced the URL.
    #[arg(long)]
    pub explain: bool,
    /// Answer lookups from a recorded lookup log. The site config is not
    /// read; dynamic permalinks apply only with `--dynamic`.
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_resolve_flags() {
        let cli = Cli::parse_from([
            "canonical",
            "resolve",
            "--permalink",
            "https://example.com/permalink/",
            "--date-archive",
            "2022/06",
            "--explain",
        ]);
        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.permalink.as_deref(), Some("https://example.com/permalink/"));
        assert_eq!(args.date_archive.map(|p| p.to_string()).as_deref(), Some("2022/06"));
        assert!(args.explain);
        assert!(!args.dynamic);
    }

    #[test]
    fn rejects_invalid_period() {
        assert!(Cli::try_parse_from(["canonical", "resolve", "--date-archive", "2022/13"]).is_err());
    }

    #[test]
    fn parses_check_with_global_verbose() {
        let cli = Cli::parse_from(["canonical", "check", "cases.yaml", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Check { .. }));
    }
}
