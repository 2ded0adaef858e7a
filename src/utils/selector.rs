//! CSS selector parsing utilities.

use scraper::Selector;

const MATCH_NOTHING: &str = "*:not(*)";

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`). A broken layout selector then degrades to "element absent",
/// which every extraction step already tolerates.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "DOM query")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        Selector::parse(MATCH_NOTHING).unwrap_or_else(|e| {
            panic!("Fallback selector '{MATCH_NOTHING}' failed to parse: {e}. This is a programming error.")
        })
    })
}
