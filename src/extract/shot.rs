//! Classification of a single exam session.
//!
//! Several textual signals overlap on the page: the tab the session is shown
//! in, an inline status chip, the status label of the result region, and the
//! rejectable marker. Precedence, highest first: a "published" status, the
//! tab's default awaiting state, the chip's awaiting text, not awaiting.

use chrono::{NaiveDate, NaiveDateTime};

use super::ExtractContext;
use crate::date::parse_deadline;
use crate::dom::DomNode;
use crate::error_handling::{ExtractionStats, InfoType, WarningType};
use crate::layout::{ActiveTab, RegionPath, BIG_TEXT_SELECTOR, ENROLLED_ICON_CLASS, STATUS_SELECTOR};
use crate::model::ExamShot;
use crate::utils::{leading_integer, normalize_whitespace};

/// Fields read from the result region next to a session.
#[derive(Debug, Default, PartialEq, Eq)]
struct ResultRegion {
    result: Option<u32>,
    status: Option<String>,
    rejectable: bool,
}

/// Builds one `ExamShot` for the surviving date at `index`.
///
/// `icons` is the card's icon collection; a missing icon at `index` means
/// not enrolled.
pub fn classify_shot<N: DomNode>(
    ctx: &ExtractContext,
    stats: &ExtractionStats,
    index: usize,
    date: NaiveDate,
    date_el: &N,
    icons: &[N],
) -> ExamShot {
    let mut shot = ExamShot::on(date);

    shot.enrolled = icons
        .get(index)
        .is_some_and(|icon| icon.has_class(ENROLLED_ICON_CLASS));

    shot.awaiting_results = ctx.tab == ActiveTab::Results;

    if ctx.tab == ActiveTab::Enrollments && !shot.awaiting_results {
        shot.awaiting_results = chip_says_awaiting(ctx, date_el);
    }

    let region_el = locate_result_region(ctx.layout.result_region, date_el);
    match &region_el {
        Some(region_el) => {
            let region = read_result_region(ctx, stats, region_el);
            shot.result = region.result;
            shot.rejectable = Some(region.rejectable);
            shot.result_status = region.status;
        }
        None => {
            log::debug!("No result region for session on {}", date);
            stats.increment_warning(WarningType::MissingResultRegion);
        }
    }

    if let Some(status) = &shot.result_status {
        if ctx.language.matches_any(status, |t| t.published_phrases) {
            shot.awaiting_results = false;
        }
    }

    // Only the enrollments layout lets a rejectable result clear a stale chip.
    if ctx.tab == ActiveTab::Enrollments && shot.is_rejectable() {
        shot.awaiting_results = false;
    }

    let wants_deadline = match ctx.tab {
        ActiveTab::Results => true,
        ActiveTab::Enrollments => shot.result.is_some(),
        ActiveTab::Default => false,
    };
    if wants_deadline {
        // The session's own date token may carry a start time.
        shot.rejection_deadline = region_el.as_ref().and_then(find_deadline);
        if shot.rejection_deadline.is_some() {
            stats.increment_info(InfoType::DeadlineFound);
        }
    }

    shot
}

fn chip_says_awaiting<N: DomNode>(ctx: &ExtractContext, date_el: &N) -> bool {
    ctx.layout
        .chip
        .and_then(|css| date_el.parent_element()?.select_first(css))
        .is_some_and(|chip| {
            ctx.language
                .matches_any(&chip.text_content(), |t| t.awaiting_phrases)
        })
}

/// Finds the auxiliary result region for a date element.
pub fn locate_result_region<N: DomNode>(path: RegionPath, date_el: &N) -> Option<N> {
    match path {
        RegionPath::ContainerNextSibling => date_el.parent_element()?.next_sibling_element(),
        RegionPath::AncestorThenSibling { ancestor, marker } => {
            std::iter::successors(date_el.parent_element(), |el| el.parent_element())
                .find(|el| el.has_class(ancestor))?
                .next_sibling_element()
                .filter(|el| el.has_class(marker))
        }
        RegionPath::FollowingSiblingWithClass { marker } => date_el
            .following_siblings()
            .into_iter()
            .find(|el| el.has_class(marker)),
    }
}

fn read_result_region<N: DomNode>(
    ctx: &ExtractContext,
    stats: &ExtractionStats,
    region: &N,
) -> ResultRegion {
    let result = region.select_first(BIG_TEXT_SELECTOR).and_then(|big| {
        let text = big.normalized_text();
        let parsed = leading_integer(&text);
        if parsed.is_none() && !text.is_empty() {
            log::debug!("Result text '{}' is not numeric", text);
            stats.increment_warning(WarningType::NonNumericResult);
        }
        parsed
    });

    let status = region
        .select_first(STATUS_SELECTOR)
        .map(|el| el.normalized_text())
        .filter(|text| !text.is_empty());

    let rejectable = ctx
        .language
        .matches_any(&region.text_content(), |t| t.rejectable_phrases);

    ResultRegion {
        result,
        status,
        rejectable,
    }
}

fn find_deadline<N: DomNode>(region: &N) -> Option<NaiveDateTime> {
    parse_deadline(&normalize_whitespace(&region.text_content()))
}
