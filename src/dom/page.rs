//! Parsed page snapshot and its tab chrome.

use scraper::{ElementRef, Html};

use super::DomNode;
use crate::language::{detect_language, Language};
use crate::layout::ActiveTab;

/// Tab headers of the portal's tab view, in tab order.
pub const TAB_NAV_SELECTOR: &str = ".p-tabview-nav li";
/// The panel currently shown to the user.
pub const ACTIVE_PANEL_SELECTOR: &str = ".p-tabview-panel:not([aria-hidden=\"true\"])";

const HIGHLIGHT_CLASS: &str = "p-highlight";

/// A point-in-time snapshot of the host page.
pub struct Page {
    document: Html,
}

impl Page {
    /// Parses a full HTML document.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Root `<html>` element.
    pub fn root(&self) -> ElementRef<'_> {
        self.document.root_element()
    }

    /// Zero-based index of the highlighted tab header, or `-1` if none.
    ///
    /// A header counts as active when it carries `p-highlight` or when it (or
    /// its link) is marked `aria-selected="true"`.
    pub fn active_tab_index(&self) -> i32 {
        self.root()
            .select_all(TAB_NAV_SELECTOR)
            .iter()
            .position(is_selected_tab)
            .map(|idx| idx as i32)
            .unwrap_or(-1)
    }

    /// Active tab variant.
    pub fn active_tab(&self) -> ActiveTab {
        ActiveTab::from_index(self.active_tab_index())
    }

    /// The visible tab panel, or `None` while the page has not rendered it.
    pub fn active_panel(&self) -> Option<ElementRef<'_>> {
        self.root().select_first(ACTIVE_PANEL_SELECTOR)
    }

    /// Display language of the page chrome.
    pub fn language(&self) -> Language {
        detect_language(&self.root())
    }
}

fn is_selected_tab(tab: &ElementRef<'_>) -> bool {
    tab.has_class(HIGHLIGHT_CLASS)
        || tab.attr("aria-selected").as_deref() == Some("true")
        || tab.select_first("[aria-selected=\"true\"]").is_some()
}
