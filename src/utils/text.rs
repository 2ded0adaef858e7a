//! Text helpers for scraped element content.

/// Trims and collapses every run of whitespace into a single space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses the leading run of ASCII digits, ignoring surrounding whitespace.
///
/// `"30L"` yields 30 and `" 18 "` yields 18; text that does not start with a
/// digit (`"RT"`, `"-"`, `""`) yields `None`.
pub fn leading_integer(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}
