//! Small shared helpers.
//!
//! This module provides:
//! - CSS selector parsing with a never-matching fallback
//! - Text normalization used when reading element content

mod selector;
mod text;

pub use selector::parse_selector_with_fallback;
pub use text::{leading_integer, normalize_whitespace};
