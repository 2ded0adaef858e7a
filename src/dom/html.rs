//! `DomNode` over `scraper` parse trees.

use scraper::{ElementRef, Selector};
use std::cell::RefCell;
use std::collections::HashMap;

use super::DomNode;
use crate::utils::parse_selector_with_fallback;

thread_local! {
    // Layout selectors are few and reused on every card.
    static SELECTOR_CACHE: RefCell<HashMap<String, Selector>> = RefCell::new(HashMap::new());
}

fn with_selector<T>(css: &str, f: impl FnOnce(&Selector) -> T) -> T {
    SELECTOR_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        let selector = cache
            .entry(css.to_string())
            .or_insert_with(|| parse_selector_with_fallback(css, "DOM query"));
        f(selector)
    })
}

impl<'a> DomNode for ElementRef<'a> {
    fn select_all(&self, css: &str) -> Vec<Self> {
        with_selector(css, |selector| self.select(selector).collect())
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }

    fn has_class(&self, class: &str) -> bool {
        self.value().classes().any(|c| c == class)
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent().and_then(ElementRef::wrap)
    }

    fn following_siblings(&self) -> Vec<Self> {
        self.next_siblings().filter_map(ElementRef::wrap).collect()
    }
}
