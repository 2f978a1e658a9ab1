use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use norid_gen::SexFilter;
use norid_types::parse_norwegian_date;

#[derive(Parser)]
#[command(
    name = "norid",
    about = "Inspect, classify and generate Norwegian identity numbers",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Generator configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show kind, sex and birthdate of an identity number
    Inspect(InspectArgs),
    /// Print the short kind code of each argument
    Classify(ClassifyArgs),
    /// Generate birth numbers matching a wildcard pattern
    Generate(GenerateArgs),
    /// Generate birth numbers born within a date range
    Range(RangeArgs),
}

#[derive(Args)]
pub struct InspectArgs {
    pub number: String,
}

#[derive(Args)]
pub struct ClassifyArgs {
    #[arg(required = true)]
    pub numbers: Vec<String>,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// 11 characters of digits and '?' wildcards
    #[arg(short, long, default_value = "???????????")]
    pub pattern: String,
    /// Attempts per number; defaults to the configured value
    #[arg(short, long, allow_negative_numbers = true)]
    pub attempts: Option<i64>,
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct RangeArgs {
    /// Earliest birthdate (YYYY-MM-DD or dd.MM.yyyy)
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,
    /// Latest birthdate (YYYY-MM-DD or dd.MM.yyyy)
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,
    #[arg(long, default_value = "any")]
    pub sex: SexArg,
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SexArg {
    Any,
    Female,
    Male,
}

impl From<SexArg> for SexFilter {
    fn from(value: SexArg) -> Self {
        match value {
            SexArg::Any => SexFilter::Any,
            SexArg::Female => SexFilter::Female,
            SexArg::Male => SexFilter::Male,
        }
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, String> {
    text.parse::<NaiveDate>()
        .or_else(|_| parse_norwegian_date(text))
        .map_err(|e| e.to_string())
}
