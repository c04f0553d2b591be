//! settings-search CLI
//!
//! Implements two commands:
//! - `rank --schema <file> --query <q>` - Rank every setting of a schema
//! - `score --reference <r> --query <q>` - Score a single text pair

use anyhow::{Context, Result};
use clap::Parser;
use settings_search::cli::{Cli, Commands, RankArgs, ScoreArgs};
use settings_search::{config, format, schema, search};
use tracing::info;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let json_output = matches!(&cli.command, Commands::Rank(args) if args.json);

    let result = match cli.command {
        Commands::Rank(args) => execute_rank(args),
        Commands::Score(args) => Ok(execute_score(args)),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            if json_output {
                println!("{}", format::format_json_error(&e));
            } else {
                eprintln!("Error: {:#}", e);
            }
            std::process::exit(1);
        }
    }
}

/// Execute the rank command
fn execute_rank(args: RankArgs) -> Result<String> {
    let mut config = config::load_config(args.config.as_deref())?;
    if let Some(min_score) = args.min_score {
        config.min_score = min_score;
    }
    if let Some(keying) = args.keying {
        config.bonus_keying = keying;
    }
    config.validate()?;

    let candidates = schema::load_schema(&args.schema)
        .with_context(|| format!("Failed to load schema {}", args.schema.display()))?;
    let total = candidates.len();

    let mut ranked = config
        .engine()
        .rank(&args.query, candidates, config.min_score);
    if let Some(limit) = args.limit {
        ranked.truncate(limit);
    }

    info!(
        "{} of {} settings matched '{}'",
        ranked.len(),
        total,
        args.query
    );

    if args.json {
        Ok(format::format_json(&ranked)?)
    } else {
        Ok(format::format_markdown(&ranked, &args.query))
    }
}

/// Execute the score command
fn execute_score(args: ScoreArgs) -> String {
    let result = search::score(&args.reference.to_lowercase(), &args.query.to_lowercase());
    format!(
        "score: {:.4}\nmatched: {}",
        result.score, result.matched_sequence
    )
}
