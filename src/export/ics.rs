//! iCalendar export of enrolled sessions.
//!
//! Every enrolled shot becomes one `VEVENT` starting at midnight UTC on the
//! session date and lasting one hour. Lines end with CRLF and are folded at
//! 75 octets.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::io::Write;
use std::path::Path;

use super::writer::open_output;
use crate::config::ICS_PRODUCT_ID;
use crate::model::{Exam, ExamShot, Extraction};

const CRLF: &str = "\r\n";
const MAX_LINE_OCTETS: usize = 75;
const ICS_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Escapes a TEXT property value.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Splits a content line into 75-octet chunks joined by CRLF + space.
fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }
    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut width = 0;
    for c in line.chars() {
        // Continuation lines start with a space, which counts toward the limit
        if width + c.len_utf8() > MAX_LINE_OCTETS {
            folded.push_str(CRLF);
            folded.push(' ');
            width = 1;
        }
        folded.push(c);
        width += c.len_utf8();
    }
    folded
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(&fold_line(line));
    out.push_str(CRLF);
}

fn push_event(out: &mut String, exam: &Exam, shot: &ExamShot) {
    let start = start_of_day(shot.date);
    let end = start + Duration::hours(1);
    push_line(out, "BEGIN:VEVENT");
    push_line(
        out,
        &format!(
            "UID:{}-{}@exam-calendar",
            shot.date.format("%Y%m%d"),
            exam.article_index
        ),
    );
    push_line(out, &format!("SUMMARY:{}", escape_text(&exam.title)));
    push_line(out, &format!("DTSTART:{}", start.format(ICS_TIME_FORMAT)));
    push_line(out, &format!("DTEND:{}", end.format(ICS_TIME_FORMAT)));
    push_line(out, "END:VEVENT");
}

/// Renders the enrolled shots of an extraction as an iCalendar document.
pub fn render_ics(extraction: &Extraction) -> String {
    let mut out = String::new();
    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, &format!("PRODID:{}", ICS_PRODUCT_ID));
    for (exam, shot) in extraction.enrolled_shots() {
        push_event(&mut out, exam, shot);
    }
    push_line(&mut out, "END:VCALENDAR");
    out
}

/// Writes the iCalendar document to `output` (stdout for `-`).
///
/// Returns the number of events written.
pub fn write_ics(extraction: &Extraction, output: &Path) -> Result<usize> {
    let count = extraction.enrolled_shots().count();
    if count == 0 {
        log::warn!("{}", extraction.language.translations().no_enrollments);
    }
    let mut writer = open_output(Some(output))?;
    writer
        .write_all(render_ics(extraction).as_bytes())
        .with_context(|| format!("Failed to write calendar file: {}", output.display()))?;
    writer.flush().context("Failed to flush calendar file")?;
    log::info!("Exported {} enrolled sessions to {}", count, output.display());
    Ok(count)
}
