//! Configuration types.
//!
//! This module defines the library configuration, log options, and the
//! retry policy used while waiting for the page to render.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use url::Url;

use crate::config::constants::{
    DEFAULT_DEBOUNCE, DEFAULT_POLL_INTERVAL, DEFAULT_RETRY_DELAY, DEFAULT_SETTINGS_PATH,
};
use crate::config::settings::LinkType;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How long to keep retrying a page that has not rendered its tab panel.
///
/// `max_attempts = None` retries until the page is ready or the wait is
/// cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub delay: Duration,
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: DEFAULT_RETRY_DELAY,
            max_attempts: None,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use exam_calendar::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("page.html"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTML snapshot of the portal page (`-` reads stdin)
    pub input: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Settings file holding the `linkType` key
    pub settings_path: PathBuf,

    /// Link type forced from the command line (ignores the settings file)
    pub link_type: Option<LinkType>,

    /// Directory receiving the outputs of watch mode
    pub out_dir: PathBuf,

    /// Page URL used to resolve relative card links
    pub base_url: Option<Url>,

    /// Retry policy while the page is not ready
    pub retry: RetryPolicy,

    /// Debounce window for change triggers in watch mode
    pub debounce: Duration,

    /// Change detection interval in watch mode
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("page.html"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            link_type: None,
            out_dir: PathBuf::from("."),
            base_url: None,
            retry: RetryPolicy::default(),
            debounce: DEFAULT_DEBOUNCE,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}
