//! correl CLI: correlation matrix CSV to sparse upper-triangle JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use correl_core::tracing::{init_tracing, init_tracing_with_filter};
use correl_core::{load_and_convert, CliOverrides, ConversionSummary, CorrelErrorCode};

#[derive(Parser)]
#[command(name = "correl")]
#[command(about = "Convert a correlation matrix CSV into upper-triangle JSON")]
#[command(version)]
struct Cli {
    /// Input matrix (CSV, header row of node names). Defaults to `correl.csv`.
    input: Option<PathBuf>,

    /// Output document (JSON). Defaults to `correl_data.json`.
    output: Option<PathBuf>,

    /// Config file to use instead of `./correl.toml`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log verbosity level (trace, debug, info, warn, error). Overrides CORREL_LOG.
    #[arg(long)]
    log_level: Option<tracing::Level>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.log_level {
        Some(level) => init_tracing_with_filter(&level.as_str().to_ascii_lowercase()),
        None => init_tracing(),
    }

    match run(&cli) {
        Ok(summary) => {
            for line in summary.console_lines() {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ConversionSummary> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let overrides = CliOverrides {
        input_path: cli.input.clone(),
        output_path: cli.output.clone(),
    };

    tracing::info!(root = %cwd.display(), "starting conversion");

    load_and_convert(&cwd, cli.config.as_deref(), Some(&overrides))
        .map_err(|e| anyhow!(e.report_string()))
}
