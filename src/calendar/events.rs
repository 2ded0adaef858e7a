//! Calendar event records for the rendering collaborator.

use chrono::NaiveDate;
use serde::Serialize;

use super::legend::{legend, EventCategory, LegendEntry};
use super::links::event_url;
use crate::config::LinkType;
use crate::model::{Exam, ExamShot, Extraction};

/// Metadata carried along with an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventProps {
    pub article_index: usize,
    pub result: Option<u32>,
    pub rejectable: bool,
    pub awaiting_results: bool,
    pub enrolled: bool,
}

/// One all-day calendar entry per exam session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    /// Serialized as `YYYY-MM-DD`
    pub start: NaiveDate,
    pub all_day: bool,
    pub category: EventCategory,
    pub color: &'static str,
    pub url: String,
    pub extended_props: EventProps,
}

impl CalendarEvent {
    pub fn from_shot(exam: &Exam, shot: &ExamShot, link_type: LinkType) -> Self {
        let category = EventCategory::for_shot(shot);
        Self {
            title: exam.title.clone(),
            start: shot.date,
            all_day: true,
            category,
            color: category.color(),
            url: event_url(link_type, &exam.title, exam.article_index, shot.date),
            extended_props: EventProps {
                article_index: exam.article_index,
                result: shot.result,
                rejectable: shot.is_rejectable(),
                awaiting_results: shot.awaiting_results,
                enrolled: shot.enrolled,
            },
        }
    }
}

/// Everything the calendar widget needs for one extraction pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub initial_date: NaiveDate,
    pub events: Vec<CalendarEvent>,
    pub legend: Vec<LegendEntry>,
    /// Label of the export action, present when something can be exported
    pub export_label: Option<&'static str>,
    /// Shown instead of the export action when nothing is enrolled
    pub notice: Option<&'static str>,
}

/// Events for every shot of every exam, in extraction order.
pub fn build_events(extraction: &Extraction, link_type: LinkType) -> Vec<CalendarEvent> {
    extraction
        .exams
        .iter()
        .flat_map(|exam| {
            exam.shots
                .iter()
                .map(move |shot| CalendarEvent::from_shot(exam, shot, link_type))
        })
        .collect()
}

/// Month the calendar opens on: the first shot of the first exam, else `today`.
pub fn initial_date(extraction: &Extraction, today: NaiveDate) -> NaiveDate {
    extraction.first_date().unwrap_or(today)
}

/// Builds the full calendar view for one extraction pass.
pub fn build_view(extraction: &Extraction, link_type: LinkType, today: NaiveDate) -> CalendarView {
    let translations = extraction.language.translations();
    let (export_label, notice) = if extraction.has_enrollments() {
        (Some(translations.export_button), None)
    } else {
        (None, Some(translations.no_enrollments))
    };
    let events = build_events(extraction, link_type);
    log::debug!(
        "Built {} calendar events ({:?} links)",
        events.len(),
        link_type
    );

    CalendarView {
        initial_date: initial_date(extraction, today),
        events,
        legend: legend(extraction.language),
        export_label,
        notice,
    }
}
