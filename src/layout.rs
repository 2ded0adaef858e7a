//! Layout profiles for the portal's tab variants.
//!
//! Each tab of the host page renders exam cards with a different nesting.
//! Instead of branching on the tab index at every lookup, each variant is a
//! static [`LayoutProfile`] and [`LayoutProfile::for_tab`] picks one.

use serde::{Deserialize, Serialize};

/// Class carried by the status icon of an enrolled session.
pub const ENROLLED_ICON_CLASS: &str = "pmi-line-check-circle";
/// Marker class of the auxiliary result region next to a session.
pub const RESULT_REGION_CLASS: &str = "result-info";
/// Child of the result region holding the numeric score.
pub const BIG_TEXT_SELECTOR: &str = ".big-text";
/// Child of the result region holding the status label.
pub const STATUS_SELECTOR: &str = ".result-status";

/// Which panel of the host page is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActiveTab {
    /// Tab 0: sessions open for enrollment
    Enrollments,
    /// Tab 2: results awaiting or published
    Results,
    /// Any other tab, or no tab highlighted
    Default,
}

impl ActiveTab {
    /// Maps the zero-based tab index (or `-1` when none is active).
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => ActiveTab::Enrollments,
            2 => ActiveTab::Results,
            _ => ActiveTab::Default,
        }
    }
}

/// How to reach the result region from a date element.
///
/// The region is also the only text searched for a rejection deadline, so a
/// time printed next to the session date is never mistaken for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionPath {
    /// The next element sibling of the date element's parent.
    ContainerNextSibling,
    /// The nearest ancestor carrying `ancestor`, then its next sibling if it
    /// carries `marker`.
    AncestorThenSibling {
        ancestor: &'static str,
        marker: &'static str,
    },
    /// The first following sibling of the date element carrying `marker`.
    FollowingSiblingWithClass { marker: &'static str },
}

/// Structural selectors for one tab variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutProfile {
    pub tab: ActiveTab,
    pub title: &'static str,
    pub dates: &'static str,
    /// Icons align with the date elements by position.
    pub icons: &'static str,
    /// Inline status chip next to the date element (looked up in its
    /// parent), if the layout has one.
    pub chip: Option<&'static str>,
    pub result_region: RegionPath,
}

static ENROLLMENTS_LAYOUT: LayoutProfile = LayoutProfile {
    tab: ActiveTab::Enrollments,
    title: "section div.mb-1",
    dates: "section div.exam-shot div.shot-date span.date",
    icons: "section div.exam-shot div.shot-date i",
    chip: Some(".p-chip"),
    result_region: RegionPath::AncestorThenSibling {
        ancestor: "shot-date",
        marker: RESULT_REGION_CLASS,
    },
};

static RESULTS_LAYOUT: LayoutProfile = LayoutProfile {
    tab: ActiveTab::Results,
    title: "section div.exam-title",
    dates: "section div.result-row span.date",
    icons: "section div.result-row i.pmi",
    chip: None,
    result_region: RegionPath::ContainerNextSibling,
};

static DEFAULT_LAYOUT: LayoutProfile = LayoutProfile {
    tab: ActiveTab::Default,
    title: "section div.mb-1",
    dates: "section > div:not(:first-child):not(.result-info)",
    icons: "section > div:not(:first-child):not(.result-info) i",
    chip: None,
    result_region: RegionPath::FollowingSiblingWithClass {
        marker: RESULT_REGION_CLASS,
    },
};

impl LayoutProfile {
    /// Returns the profile for a tab.
    pub fn for_tab(tab: ActiveTab) -> &'static LayoutProfile {
        match tab {
            ActiveTab::Enrollments => &ENROLLMENTS_LAYOUT,
            ActiveTab::Results => &RESULTS_LAYOUT,
            ActiveTab::Default => &DEFAULT_LAYOUT,
        }
    }
}
