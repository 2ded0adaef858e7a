// Shared test helpers for loading page fixtures.

use std::path::PathBuf;

use exam_calendar::{extract_page, Extraction, ExtractionStats, Page};

/// Path of a file under `tests/fixtures/`.
#[allow(dead_code)] // Not every test binary uses every helper
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Raw HTML of a fixture page.
#[allow(dead_code)]
pub fn fixture_html(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

/// Extraction of a fixture page that is expected to be ready.
#[allow(dead_code)]
pub fn extract_fixture(name: &str) -> (Extraction, ExtractionStats) {
    let page = Page::parse(&fixture_html(name));
    let stats = ExtractionStats::new();
    let extraction = extract_page(&page, None, &stats).expect("Fixture page should be ready");
    (extraction, stats)
}
