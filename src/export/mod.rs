//! Export of extraction results.
//!
//! This module writes extraction results to files or stdout:
//! - iCalendar (`.ics`) with one event per enrolled session
//! - JSON for exams and calendar views

mod ics;
mod json;
mod writer;

pub use ics::{escape_text, render_ics, write_ics};
pub use json::write_json;
pub use writer::open_output;
