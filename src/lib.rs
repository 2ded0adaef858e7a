//! exam_calendar library: exam sessions from portal page snapshots
//!
//! This library reads a saved page of a university exam-registration portal,
//! reconstructs the exams and their sessions (dates, enrollment, results,
//! rejection deadlines), and shapes them into calendar events and an
//! iCalendar export.
//!
//! # Example
//!
//! ```no_run
//! use exam_calendar::{extract_snapshot, render_ics, Config};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     input: std::path::PathBuf::from("page.html"),
//!     ..Default::default()
//! };
//!
//! let extraction = extract_snapshot(&config, &CancellationToken::new()).await?;
//! println!("{} exams on the {:?} tab", extraction.exams.len(), extraction.tab);
//! print!("{}", render_ics(&extraction));
//! # Ok(())
//! # }
//! ```
//!
//! The extraction engine itself is synchronous; see [`extract::extract_page`]
//! for use without a runtime.

pub mod calendar;
pub mod config;
pub mod date;
pub mod dom;
pub mod error_handling;
pub mod export;
pub mod extract;
pub mod initialization;
pub mod language;
pub mod layout;
pub mod model;
pub mod run;
mod utils;

// Re-export public API
pub use calendar::{build_events, build_view, CalendarEvent, CalendarView};
pub use config::{Config, LinkType, LogFormat, LogLevel, RetryPolicy, Settings};
pub use dom::{DomNode, Page};
pub use error_handling::{ExtractionStats, PollError, SettingsError};
pub use export::{render_ics, write_ics};
pub use extract::{extract_exams, extract_page, ExtractContext};
pub use language::Language;
pub use layout::{ActiveTab, LayoutProfile};
pub use model::{Exam, ExamShot, Extraction};
pub use run::{extract_snapshot, run_watch, WatchReport};
