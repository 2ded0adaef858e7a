//! Event categories, their colours, and the localized legend.

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

use crate::language::Language;
use crate::model::ExamShot;

/// Display category of a calendar event.
///
/// Variants are declared in precedence order: a shot that is both awaiting
/// and enrolled is shown as awaiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIterMacro)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    Awaiting,
    Rejectable,
    Result,
    Enrolled,
    Available,
}

impl EventCategory {
    /// Picks the category of a shot.
    pub fn for_shot(shot: &ExamShot) -> Self {
        if shot.awaiting_results {
            EventCategory::Awaiting
        } else if shot.is_rejectable() {
            EventCategory::Rejectable
        } else if shot.result.is_some() {
            EventCategory::Result
        } else if shot.enrolled {
            EventCategory::Enrolled
        } else {
            EventCategory::Available
        }
    }

    /// Hex colour code handed to the calendar widget.
    pub fn color(self) -> &'static str {
        match self {
            EventCategory::Awaiting => "#FF9800",
            EventCategory::Rejectable => "#9C27B0",
            EventCategory::Result => "#607D8B",
            EventCategory::Enrolled => "#4CAF50",
            EventCategory::Available => "#2196F3",
        }
    }

    /// Legend label in the page language.
    pub fn label(self, language: Language) -> &'static str {
        let t = language.translations();
        match self {
            EventCategory::Awaiting => t.legend_awaiting,
            EventCategory::Rejectable => t.legend_rejectable,
            EventCategory::Result => t.legend_result,
            EventCategory::Enrolled => t.legend_enrolled,
            EventCategory::Available => t.legend_available,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

/// One legend entry per category, in precedence order.
pub fn legend(language: Language) -> Vec<LegendEntry> {
    EventCategory::iter()
        .map(|category| LegendEntry {
            label: category.label(language),
            color: category.color(),
        })
        .collect()
}
