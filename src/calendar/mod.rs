//! Calendar view shaping.
//!
//! Turns an [`Extraction`](crate::model::Extraction) into the event list,
//! legend, and initial date consumed by a calendar widget. Nothing here
//! renders; the output is plain serializable data.

mod events;
mod legend;
mod links;

pub use events::{build_events, build_view, initial_date, CalendarEvent, CalendarView, EventProps};
pub use legend::{legend, EventCategory, LegendEntry};
pub use links::{article_anchor, countdown_url, event_url};
