use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lead-score",
    version,
    about = "Lead scoring and classification CLI for automation pipelines"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Score(ScoreCommand),
    Zapier(ZapierCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Lead record JSON (category -> value); "-" or omitted reads stdin
    pub input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,

    /// Criteria table JSON replacing the built-in defaults for this run
    #[arg(long)]
    pub criteria: Option<PathBuf>,
}

#[derive(Args)]
pub struct ZapierCommand {
    /// Zapier lead record JSON; "-" or omitted reads stdin
    pub input: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
