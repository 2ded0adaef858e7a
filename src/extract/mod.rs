//! Exam extraction from the portal's exam cards.
//!
//! One pass walks every `article` card of the visible panel, reads the title
//! and date elements through the active tab's [`LayoutProfile`], and builds
//! an [`Exam`] per card that has a title and at least one valid date. Cards
//! are all-or-nothing: a card either yields a complete `Exam` or nothing.

mod shot;

pub use shot::{classify_shot, locate_result_region};

use url::Url;

use crate::date::parse_exam_date;
use crate::dom::{DomNode, Page};
use crate::error_handling::{ExtractionStats, InfoType, WarningType};
use crate::language::Language;
use crate::layout::{ActiveTab, LayoutProfile};
use crate::model::{Exam, Extraction};

/// CSS selector for exam cards.
pub const CARD_SELECTOR: &str = "article";
const CARD_LINK_SELECTOR: &str = "a[href]";

/// Page-level context shared by every card of a pass.
#[derive(Debug, Clone)]
pub struct ExtractContext {
    pub tab: ActiveTab,
    pub language: Language,
    pub layout: &'static LayoutProfile,
    /// Base for resolving relative card links
    pub base_url: Option<Url>,
}

impl ExtractContext {
    pub fn new(tab: ActiveTab, language: Language) -> Self {
        Self {
            tab,
            language,
            layout: LayoutProfile::for_tab(tab),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: Option<Url>) -> Self {
        self.base_url = base_url;
        self
    }
}

/// Extracts every exam below `panel`.
///
/// `article_index` is the card's position among all cards, including the ones
/// that were dropped, so it can be used to locate the card again.
pub fn extract_exams<N: DomNode>(
    panel: &N,
    ctx: &ExtractContext,
    stats: &ExtractionStats,
) -> Vec<Exam> {
    let exams: Vec<Exam> = panel
        .select_all(CARD_SELECTOR)
        .iter()
        .enumerate()
        .filter_map(|(article_index, card)| {
            stats.increment_info(InfoType::CardSeen);
            extract_card(card, article_index, ctx, stats)
        })
        .collect();

    log::debug!(
        "Extracted {} exams on {:?} tab ({:?})",
        exams.len(),
        ctx.tab,
        ctx.language
    );
    exams
}

fn extract_card<N: DomNode>(
    card: &N,
    article_index: usize,
    ctx: &ExtractContext,
    stats: &ExtractionStats,
) -> Option<Exam> {
    let layout = ctx.layout;

    let title = card
        .select_first(layout.title)
        .map(|el| el.normalized_text())
        .unwrap_or_default();
    if title.is_empty() {
        log::debug!("Skipping card {}: no title", article_index);
        stats.increment_warning(WarningType::MissingTitle);
        return None;
    }

    let dated: Vec<_> = card
        .select_all(layout.dates)
        .into_iter()
        .filter_map(|el| match parse_exam_date(&el.normalized_text()) {
            Some(date) => Some((el, date)),
            None => {
                log::debug!(
                    "Dropping unparseable date '{}' on '{}'",
                    el.normalized_text(),
                    title
                );
                stats.increment_warning(WarningType::UnparseableDate);
                None
            }
        })
        .collect();
    if dated.is_empty() {
        log::debug!("Skipping card '{}': no parseable dates", title);
        stats.increment_warning(WarningType::NoParseableDates);
        return None;
    }

    let icons = card.select_all(layout.icons);
    if icons.len() != dated.len() {
        log::debug!(
            "Card '{}' has {} icons for {} dates",
            title,
            icons.len(),
            dated.len()
        );
        stats.increment_warning(WarningType::IconCountMismatch);
    }

    let shots = dated
        .iter()
        .enumerate()
        .map(|(index, (el, date))| classify_shot(ctx, stats, index, *date, el, &icons))
        .collect::<Vec<_>>();

    stats.increment_info(InfoType::ExamExtracted);
    for _ in &shots {
        stats.increment_info(InfoType::ShotExtracted);
    }

    Some(Exam {
        title,
        article_url: card_link(card, ctx.base_url.as_ref()),
        article_index,
        shots,
    })
}

/// First link of the card, resolved against `base_url` when possible.
fn card_link<N: DomNode>(card: &N, base_url: Option<&Url>) -> Option<String> {
    let href = card.select_first(CARD_LINK_SELECTOR)?.attr("href")?;
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    match base_url.and_then(|base| base.join(href).ok()) {
        Some(resolved) => Some(resolved.to_string()),
        None => Some(href.to_string()),
    }
}

/// Runs a full extraction pass over a page snapshot.
///
/// Returns `None` while the page has no visible tab panel yet; callers treat
/// that as "not ready" and retry later.
pub fn extract_page(
    page: &Page,
    base_url: Option<&Url>,
    stats: &ExtractionStats,
) -> Option<Extraction> {
    let panel = page.active_panel()?;
    let tab = page.active_tab();
    let language = page.language();
    let ctx = ExtractContext::new(tab, language).with_base_url(base_url.cloned());

    Some(Extraction {
        tab,
        language,
        exams: extract_exams(&panel, &ctx, stats),
    })
}
