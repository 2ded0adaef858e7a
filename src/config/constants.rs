//! Configuration constants.
//!
//! Defaults for the orchestration loop and fixed values of the output
//! contracts (file names, external URLs).

use std::time::Duration;

/// Delay between attempts while the page has no visible tab panel.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);
/// Window in which successive change triggers collapse into one pass.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);
/// How often watch mode checks the input files for changes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// File name used for the iCalendar export.
pub const ICS_FILE_NAME: &str = "registered_exams.ics";
/// File name for the extracted exam list in watch mode.
pub const EXAMS_FILE_NAME: &str = "exams.json";
/// File name for the calendar event list in watch mode.
pub const EVENTS_FILE_NAME: &str = "events.json";
/// Default settings file looked up next to the working directory.
pub const DEFAULT_SETTINGS_PATH: &str = "./settings.json";

/// Countdown display service used by the `anxious-display` link type.
pub const ANXIOUS_DISPLAY_URL: &str = "https://the-anxious-display.vercel.app/";
/// Description attached to countdowns created from exam events.
pub const COUNTDOWN_DESCRIPTION: &str = "imported from polimi-exam-calendar";
/// `PRODID` of generated calendar files.
pub const ICS_PRODUCT_ID: &str = "-//exam_calendar//Exam Calendar//EN";
