//! Navigation URLs attached to calendar events.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{NaiveDate, NaiveTime, SecondsFormat};
use serde::Serialize;

use crate::config::{LinkType, ANXIOUS_DISPLAY_URL, COUNTDOWN_DESCRIPTION};

#[derive(Serialize)]
struct Countdown<'a> {
    title: &'a str,
    description: &'a str,
    date: String,
}

/// In-page anchor of the exam card at `article_index`.
pub fn article_anchor(article_index: usize) -> String {
    format!("#article-{}", article_index)
}

/// Countdown display URL for one exam session.
///
/// The `countdowns` parameter is the standard base64 encoding of a JSON array
/// holding a single countdown, dated at midnight UTC.
pub fn countdown_url(title: &str, date: NaiveDate) -> Result<String, serde_json::Error> {
    let countdowns = [Countdown {
        title,
        description: COUNTDOWN_DESCRIPTION,
        date: date
            .and_time(NaiveTime::MIN)
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    }];
    let json = serde_json::to_string(&countdowns)?;
    Ok(format!(
        "{}?countdowns={}",
        ANXIOUS_DISPLAY_URL,
        STANDARD.encode(json)
    ))
}

/// URL of an event according to the configured link type.
pub fn event_url(link_type: LinkType, title: &str, article_index: usize, date: NaiveDate) -> String {
    match link_type {
        LinkType::ExamArticle => article_anchor(article_index),
        LinkType::AnxiousDisplay => match countdown_url(title, date) {
            Ok(url) => url,
            Err(e) => {
                log::warn!(
                    "Failed to encode countdown for '{}': {}. Linking to the exam card.",
                    title,
                    e
                );
                article_anchor(article_index)
            }
        },
    }
}
