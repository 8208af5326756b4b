mod cli;
mod criteria;
mod engine;
mod error;
mod report;
mod zapier;

use crate::error::{Result, ScoreError};
use clap::Parser;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(cli: &cli::Cli) {
    let level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads one record from the given path, or from stdin for "-" / no path.
fn read_record(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn load_criteria(path: &Path) -> Result<criteria::CriteriaTable> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|error| ScoreError::CriteriaParse(format!("{}: {error}", path.display())))
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(&cli);
    tracing::debug!("lead-score v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        cli::Commands::Score(cmd) => {
            let raw = read_record(cmd.input.as_deref())?;
            let lead: engine::LeadInput = serde_json::from_str(&raw)?;

            let scorer = match &cmd.criteria {
                Some(path) => engine::ScoreEngine::with_criteria(load_criteria(path)?),
                None => engine::ScoreEngine::new(),
            };
            let result = scorer.calculate_score(&lead)?;

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&result, output_format)?;
            println!("{rendered}");

            // breakdown only omits categories the criteria table does not know
            if result.breakdown.len() < lead.len() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Zapier(cmd) => {
            let raw = read_record(cmd.input.as_deref())?;
            let lead: zapier::ZapierLead = serde_json::from_str(&raw)?;
            let result = zapier::process_zapier_lead(&lead)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
