//! CLI mode implementation
//!
//! Provides command-line access to ranking and single-pair scoring

use crate::search::BonusKeying;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// settings-search CLI
#[derive(Parser, Debug)]
#[command(name = "settings-search")]
#[command(about = "Fuzzy search over a settings schema", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank the settings of a schema file against a query
    Rank(RankArgs),
    /// Score one reference text against a query
    Score(ScoreArgs),
}

/// Rank command arguments
#[derive(Parser, Debug, Clone)]
pub struct RankArgs {
    /// Settings schema (JSON)
    #[arg(short = 's', long)]
    pub schema: PathBuf,

    /// Search text (case-insensitive)
    #[arg(short = 'q', long)]
    pub query: String,

    /// Only list results scoring strictly above this (overrides config)
    #[arg(short = 'm', long, env = "SETTINGS_SEARCH_MIN_SCORE")]
    pub min_score: Option<f64>,

    /// Which field each perfect-match bonus is keyed on (overrides config)
    #[arg(short = 'k', long, value_enum)]
    pub keying: Option<BonusKeying>,

    /// Maximum number of results to print
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,

    /// Print JSON instead of Markdown
    #[arg(long)]
    pub json: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

/// Score command arguments
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// Text the query is scored against
    #[arg(short = 'r', long)]
    pub reference: String,

    /// Search text
    #[arg(short = 'q', long)]
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_args() {
        let cli = Cli::parse_from([
            "settings-search",
            "rank",
            "--schema",
            "schema.json",
            "-q",
            "font",
            "--min-score",
            "1.5",
            "--keying",
            "per-field-keyed-bonus",
        ]);
        match cli.command {
            Commands::Rank(args) => {
                assert_eq!(args.schema, PathBuf::from("schema.json"));
                assert_eq!(args.query, "font");
                assert_eq!(args.min_score, Some(1.5));
                assert_eq!(args.keying, Some(BonusKeying::PerFieldKeyedBonus));
                assert!(!args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_score_args_with_global_flag() {
        let cli = Cli::parse_from([
            "settings-search",
            "score",
            "-r",
            "settings-view",
            "-q",
            "view",
            "--verbose",
        ]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Score(ref a) if a.reference == "settings-view"));
    }

    #[test]
    fn test_missing_query_is_error() {
        let result = Cli::try_parse_from(["settings-search", "rank", "--schema", "s.json"]);
        assert!(result.is_err());
    }
}
