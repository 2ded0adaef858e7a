//! Domain model produced by an extraction pass.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::layout::ActiveTab;

/// One offered course's exam entry as listed on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    /// Human-readable exam name (never empty)
    pub title: String,
    /// Best-effort deep link to the source card
    pub article_url: Option<String>,
    /// Position among all cards of the pass, including discarded ones
    pub article_index: usize,
    /// Sessions in document order
    pub shots: Vec<ExamShot>,
}

/// One concrete exam sitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamShot {
    pub date: NaiveDate,
    pub enrolled: bool,
    pub awaiting_results: bool,
    pub result: Option<u32>,
    pub result_status: Option<String>,
    pub rejectable: Option<bool>,
    pub rejection_deadline: Option<NaiveDateTime>,
}

impl ExamShot {
    /// A shot with only its date known.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            enrolled: false,
            awaiting_results: false,
            result: None,
            result_status: None,
            rejectable: None,
            rejection_deadline: None,
        }
    }

    /// True when a published result may still be declined.
    pub fn is_rejectable(&self) -> bool {
        self.result.is_some() && self.rejectable == Some(true)
    }
}

/// Result of one full extraction pass over a page snapshot.
///
/// Every pass is rebuilt from scratch; `article_index` values are only
/// meaningful against the snapshot they were extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub tab: ActiveTab,
    pub language: Language,
    pub exams: Vec<Exam>,
}

impl Extraction {
    /// Whether any shot of any exam is enrolled.
    pub fn has_enrollments(&self) -> bool {
        self.exams
            .iter()
            .any(|exam| exam.shots.iter().any(|shot| shot.enrolled))
    }

    /// `(exam, shot)` pairs for enrolled shots only, in document order.
    pub fn enrolled_shots(&self) -> impl Iterator<Item = (&Exam, &ExamShot)> {
        self.exams.iter().flat_map(|exam| {
            exam.shots
                .iter()
                .filter(|shot| shot.enrolled)
                .map(move |shot| (exam, shot))
        })
    }

    /// Date of the first shot of the first exam, if any.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.exams
            .first()
            .and_then(|exam| exam.shots.first())
            .map(|shot| shot.date)
    }
}
