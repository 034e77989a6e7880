use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::model::SpeedgolfScore;

#[derive(Parser, Debug)]
#[command(author, version, about = "Speedgolf score arithmetic", long_about = None)]
pub struct Cli {
    /// Optional TOML file with defaults (`par`, `json`)
    #[arg(long, global = true)]
    pub config_toml: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render a score in canonical form
    Show {
        #[arg(allow_hyphen_values = true)]
        score: String,
    },
    /// Sum one or more scores
    Add {
        #[arg(required = true, allow_hyphen_values = true)]
        scores: Vec<String>,
    },
    /// Score relative to par (score minus par)
    VsPar {
        #[arg(long)]
        par: Option<String>,
        #[arg(allow_hyphen_values = true)]
        score: String,
    },
    /// Elapsed time between two RFC 3339 instants
    Duration { start: String, finish: String },
    /// Compare two scores
    Compare {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    par: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone)]
pub enum Operation {
    Show(SpeedgolfScore),
    Add(Vec<SpeedgolfScore>),
    VsPar {
        par: SpeedgolfScore,
        score: SpeedgolfScore,
    },
    Duration(SpeedgolfScore),
    Compare(SpeedgolfScore, SpeedgolfScore),
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub operation: Operation,
    pub json: bool,
    pub verbose: bool,
}

fn parse_score(text: &str) -> Result<SpeedgolfScore> {
    text.trim()
        .parse()
        .with_context(|| format!("parse score {text:?}"))
}

/// Merge CLI values over the optional TOML file and parse every score argument.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, a score does
/// not parse, `vs-par` has no par from either source, or the instants given to
/// `duration` are malformed or out of order.
pub fn load_config(cli: Cli) -> Result<CleanArgs> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))?
        }
        None => FileConfig::default(),
    };

    let operation = match cli.command {
        Command::Show { score } => Operation::Show(parse_score(&score)?),
        Command::Add { scores } => Operation::Add(
            scores
                .iter()
                .map(String::as_str)
                .map(parse_score)
                .collect::<Result<Vec<_>>>()?,
        ),
        Command::VsPar { par, score } => {
            let par = par
                .or(file_config.par)
                .ok_or_else(|| anyhow!("missing --par"))?;
            Operation::VsPar {
                par: parse_score(&par)?,
                score: parse_score(&score)?,
            }
        }
        Command::Duration { start, finish } => Operation::Duration(
            SpeedgolfScore::try_from_rfc3339_instants(&start, &finish)
                .with_context(|| format!("duration from {start} to {finish}"))?,
        ),
        Command::Compare { left, right } => {
            Operation::Compare(parse_score(&left)?, parse_score(&right)?)
        }
    };

    Ok(CleanArgs {
        operation,
        json: cli.json || file_config.json.unwrap_or(false),
        verbose: cli.verbose,
    })
}

#[must_use]
pub fn args_checks() -> Cli {
    Cli::parse()
}
