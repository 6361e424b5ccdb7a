//! Rentboard quote CLI
//!
//! Prices contract drafts read from a JSON file and prints the quotes.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use rentboard_core::{ContractDraft, ContractPricer, ContractQuote};
use rentboard_shared::{AppError, AppResult, EngineConfig};
use serde_json::Value;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "rentboard-quote")]
#[command(version, about = "Quote billboard rental contract drafts", long_about = None)]
struct Args {
    /// Fail when an installment schedule does not reconcile with its grand total
    #[arg(long)]
    strict: bool,

    /// JSON file holding one draft or an array of drafts
    draft_path: PathBuf,
}

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version print to stdout and exit 0
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            err.print().ok();
            std::process::exit(usage_error(&err).exit_code());
        }
    };

    // Logs go to stderr, stdout carries the quote
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rentboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(&args) {
        let app_error = err.downcast_ref::<AppError>();
        error!(error_code = app_error.map(AppError::error_code), "{err:#}");
        std::process::exit(app_error.map_or(1, AppError::exit_code));
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = EngineConfig::load().map_err(AppError::from)?;
    let pricer = ContractPricer::new(&config);

    let document = read_document(&args.draft_path)
        .with_context(|| format!("loading draft {}", args.draft_path.display()))?;

    let (quotes, is_batch) = match document {
        Value::Array(items) => {
            let drafts = items
                .into_iter()
                .map(parse_draft)
                .collect::<AppResult<Vec<_>>>()?;
            info!(drafts = drafts.len(), "Quoting draft batch");
            let quotes = pricer
                .quote_drafts(&drafts)
                .into_iter()
                .enumerate()
                .map(|(index, quote)| {
                    quote.map_err(|e| AppError::Input(format!("draft #{index}: {e}")))
                })
                .collect::<AppResult<Vec<_>>>()?;
            (quotes, true)
        }
        other => {
            let draft = parse_draft(other)?;
            let quote = pricer
                .quote_draft(&draft)
                .map_err(|e| AppError::Input(e.to_string()))?;
            (vec![quote], false)
        }
    };

    let output = if is_batch {
        serde_json::to_string_pretty(&quotes)
    } else {
        serde_json::to_string_pretty(&quotes[0])
    }
    .map_err(|e| AppError::Internal(format!("failed to serialize quote: {e}")))?;
    println!("{output}");

    let unreconciled = unreconciled_count(&quotes);
    if unreconciled > 0 {
        warn!(unreconciled, "Some installment schedules do not reconcile");
        if args.strict {
            return Err(AppError::Validation(format!(
                "{unreconciled} quote(s) have an installment schedule that does not reconcile"
            ))
            .into());
        }
    }

    Ok(())
}

/// Command-line usage mistakes are input errors.
fn usage_error(err: &clap::Error) -> AppError {
    AppError::Input(err.to_string().trim_end().to_string())
}

fn read_document(path: &Path) -> AppResult<Value> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::Input(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::Input(format!("{} is not valid JSON: {e}", path.display())))
}

fn parse_draft(value: Value) -> AppResult<ContractDraft> {
    serde_json::from_value(value).map_err(|e| AppError::Input(format!("invalid draft: {e}")))
}

fn unreconciled_count(quotes: &[ContractQuote]) -> usize {
    quotes
        .iter()
        .filter(|quote| !quote.schedule_check.is_valid)
        .count()
}
