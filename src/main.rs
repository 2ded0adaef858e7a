//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `exam_calendar` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Ctrl-C cancellation
//! - User-facing output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tokio_util::sync::CancellationToken;

use exam_calendar::config::{Command, Opt};
use exam_calendar::export::{write_ics, write_json};
use exam_calendar::initialization::init_logger_with;
use exam_calendar::run::{calendar_view, extract_snapshot, run_watch};
use exam_calendar::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // .env may set RUST_LOG; a missing file is fine
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    let config = opt.to_config();
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Interrupted, stopping...");
            ctrl_c.cancel();
        }
    });

    if let Err(e) = run(&opt.command, &config, cancel).await {
        eprintln!("exam_calendar error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(command: &Command, config: &Config, cancel: CancellationToken) -> Result<()> {
    match command {
        Command::Extract { output, .. } => {
            let extraction = extract_snapshot(config, &cancel).await?;
            write_json(&extraction, output.as_deref())
        }
        Command::Events { output, .. } => {
            let extraction = extract_snapshot(config, &cancel).await?;
            write_json(&calendar_view(&extraction, config), output.as_deref())
        }
        Command::ExportIcs { output, .. } => {
            let extraction = extract_snapshot(config, &cancel).await?;
            let count = write_ics(&extraction, output)?;
            if output.as_os_str() != "-" {
                println!(
                    "Exported {} exam session{} to {}",
                    count,
                    if count == 1 { "" } else { "s" },
                    output.display()
                );
            }
            Ok(())
        }
        Command::Watch { .. } => {
            let report = run_watch(config, cancel).await?;
            println!(
                "Watch finished: {} pass{} written, {} skipped",
                report.passes,
                if report.passes == 1 { "" } else { "es" },
                report.skipped
            );
            Ok(())
        }
    }
}
