//! Narrow DOM capability used by the extraction engine.
//!
//! The extractor never touches a concrete tree type. Anything that can answer
//! a CSS query and navigate to parents and following siblings implements
//! [`DomNode`]; the `scraper` implementation lives in [`html`].

mod html;
mod page;

pub use page::{Page, ACTIVE_PANEL_SELECTOR, TAB_NAV_SELECTOR};

/// A navigable element of a DOM-like tree.
pub trait DomNode: Clone {
    /// All descendants matching a CSS selector, in document order.
    fn select_all(&self, css: &str) -> Vec<Self>;

    /// First descendant matching a CSS selector.
    fn select_first(&self, css: &str) -> Option<Self> {
        self.select_all(css).into_iter().next()
    }

    /// Concatenated text of the element and its descendants (untrimmed).
    fn text_content(&self) -> String;

    /// Value of an attribute, if present.
    fn attr(&self, name: &str) -> Option<String>;

    /// Whether the `class` attribute contains `class` as a whole token.
    fn has_class(&self, class: &str) -> bool;

    /// Parent element, if the parent is an element.
    fn parent_element(&self) -> Option<Self>;

    /// Following element siblings, nearest first.
    fn following_siblings(&self) -> Vec<Self>;

    /// Next element sibling.
    fn next_sibling_element(&self) -> Option<Self> {
        self.following_siblings().into_iter().next()
    }

    /// Trimmed text content with internal whitespace collapsed.
    fn normalized_text(&self) -> String {
        crate::utils::normalize_whitespace(&self.text_content())
    }
}
