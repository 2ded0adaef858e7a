//! Command-line options.
//!
//! The CLI is a thin layer over [`Config`]: each subcommand fills the
//! fields it cares about and leaves the rest at their defaults.
//!
//! # Examples
//!
//! ```bash
//! # Print the exams found on a saved portal page
//! exam_calendar extract page.html
//!
//! # Calendar events linking to the countdown display
//! exam_calendar events page.html --link-type anxious-display
//!
//! # Export enrolled sessions
//! exam_calendar export-ics page.html -o registered_exams.ics
//!
//! # Keep outputs in sync with a page dump that is rewritten over time
//! exam_calendar watch page.html --out-dir ./calendar
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::config::constants::{DEFAULT_SETTINGS_PATH, ICS_FILE_NAME};
use crate::config::settings::LinkType;
use crate::config::types::{Config, LogFormat, LogLevel, RetryPolicy};

#[derive(Debug, Parser)]
#[command(
    name = "exam_calendar",
    version,
    about = "Turns exam portal page snapshots into calendar events and iCalendar files."
)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand that reads a page snapshot.
#[derive(Debug, Args)]
pub struct PageArgs {
    /// HTML snapshot of the portal page (`-` reads stdin)
    #[arg(value_parser)]
    pub input: PathBuf,

    /// URL the snapshot was taken from, used to resolve relative card links
    #[arg(long)]
    pub base_url: Option<Url>,

    /// Milliseconds between attempts while the page has no visible tab panel
    #[arg(long, default_value_t = 1000)]
    pub retry_delay_ms: u64,

    /// Give up after this many attempts (default: keep retrying)
    #[arg(long)]
    pub max_attempts: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the extracted exams as JSON
    Extract {
        #[command(flatten)]
        page: PageArgs,

        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print calendar events and the colour legend as JSON
    Events {
        #[command(flatten)]
        page: PageArgs,

        /// Settings file holding the `linkType` key
        #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
        settings: PathBuf,

        /// Override the link type from the settings file
        #[arg(long, value_enum)]
        link_type: Option<LinkType>,

        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Write the sessions you are enrolled in to an iCalendar file
    ExportIcs {
        #[command(flatten)]
        page: PageArgs,

        /// Target file (`-` writes to stdout)
        #[arg(long, short, default_value = ICS_FILE_NAME)]
        output: PathBuf,
    },

    /// Rewrite all outputs whenever the snapshot or settings file changes
    Watch {
        #[command(flatten)]
        page: PageArgs,

        /// Settings file holding the `linkType` key
        #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
        settings: PathBuf,

        /// Override the link type from the settings file
        #[arg(long, value_enum)]
        link_type: Option<LinkType>,

        /// Directory for exams.json, events.json and the iCalendar file
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Milliseconds to wait for further changes before re-extracting
        #[arg(long, default_value_t = 250)]
        debounce_ms: u64,

        /// Milliseconds between file change checks
        #[arg(long, default_value_t = 500)]
        poll_interval_ms: u64,
    },
}

impl Command {
    /// Page options of the subcommand.
    pub fn page(&self) -> &PageArgs {
        match self {
            Command::Extract { page, .. }
            | Command::Events { page, .. }
            | Command::ExportIcs { page, .. }
            | Command::Watch { page, .. } => page,
        }
    }
}

impl Opt {
    /// Builds the library configuration for the selected subcommand.
    pub fn to_config(&self) -> Config {
        let page = self.command.page();
        let mut config = Config {
            input: page.input.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            base_url: page.base_url.clone(),
            retry: RetryPolicy {
                delay: Duration::from_millis(page.retry_delay_ms),
                max_attempts: page.max_attempts,
            },
            ..Default::default()
        };

        match &self.command {
            Command::Events {
                settings,
                link_type,
                ..
            } => {
                config.settings_path = settings.clone();
                config.link_type = *link_type;
            }
            Command::Watch {
                settings,
                link_type,
                out_dir,
                debounce_ms,
                poll_interval_ms,
                ..
            } => {
                config.settings_path = settings.clone();
                config.link_type = *link_type;
                config.out_dir = out_dir.clone();
                config.debounce = Duration::from_millis(*debounce_ms);
                config.poll_interval = Duration::from_millis(*poll_interval_ms);
            }
            Command::Extract { .. } | Command::ExportIcs { .. } => {}
        }
        config
    }
}
