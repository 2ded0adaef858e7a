//! Process-wide `env_logger` setup for the CLI.

use std::io::Write;

use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Installs the global logger.
///
/// `RUST_LOG` seeds the filters and `level` then takes over for this crate, so
/// `--log-level` always wins over the environment. Parser internals stay quiet
/// unless they report a real problem.
///
/// ```bash
/// RUST_LOG=debug exam_calendar extract page.html --log-level warn
/// exam_calendar watch page.html --log-format json
/// ```
///
/// # Errors
///
/// `InitializationError::LoggerError` when a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level)
        .filter_module("html5ever", LevelFilter::Error)
        .filter_module("selectors", LevelFilter::Warn)
        .filter_module("exam_calendar", level);

    match format {
        LogFormat::Json => builder.format(write_json_line),
        LogFormat::Plain => builder.format(write_plain_line),
    };

    builder.try_init()?;
    Ok(())
}

/// `{"ts":<epoch millis>,"level":..,"target":..,"msg":..}`
fn write_json_line(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let msg = serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into());
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        msg
    )
}

/// `HH:MM:SS target [LEVEL] message`, coloured.
fn write_plain_line(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    writeln!(
        buf,
        "{} {} [{}] {}",
        chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
        record.target().cyan(),
        level_label(record.level()),
        record.args()
    )
}

fn level_label(level: Level) -> ColoredString {
    let label = level.to_string();
    match level {
        Level::Error => label.red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}
