//! Orchestration around the extraction engine.
//!
//! This module provides:
//! - Snapshot loading (file or stdin)
//! - Polling a snapshot until its tab panel is rendered
//! - Debounced re-extraction on file changes (watch mode)

mod debounce;
mod poll;
mod snapshot;
mod watch;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;

use crate::calendar::{build_view, CalendarView};
use crate::config::{Config, LinkType, Settings};
use crate::error_handling::ExtractionStats;
use crate::model::Extraction;

pub use debounce::{Debouncer, Trigger};
pub use poll::poll_until_ready;
pub use snapshot::{attempt_extraction, SnapshotSource};
pub use watch::{run_watch, write_outputs, ChangeDetector, WatchReport};

/// Loads the configured snapshot and extracts it once it is ready.
///
/// Stdin cannot change between reads, so it gets a single attempt regardless
/// of the retry policy.
///
/// # Errors
///
/// Fails if stdin cannot be read, if the retry policy gives up, or if
/// `cancel` fires before the page is ready.
pub async fn extract_snapshot(config: &Config, cancel: &CancellationToken) -> Result<Extraction> {
    let source = SnapshotSource::open(&config.input)?;
    extract_from(&source, config, cancel).await
}

pub(crate) async fn extract_from(
    source: &SnapshotSource,
    config: &Config,
    cancel: &CancellationToken,
) -> Result<Extraction> {
    let mut policy = config.retry;
    if !source.can_change() {
        policy.max_attempts = Some(1);
    }

    let stats = ExtractionStats::new();
    let extraction = poll_until_ready(
        || attempt_extraction(source, config.base_url.as_ref(), &stats),
        &policy,
        cancel,
    )
    .await
    .with_context(|| {
        format!(
            "Page snapshot {} has no visible tab panel",
            config.input.display()
        )
    })?;

    stats.log_summary();
    log::info!(
        "Extracted {} exams from the {:?} tab ({:?}, {} warnings)",
        extraction.exams.len(),
        extraction.tab,
        extraction.language,
        stats.total_warnings()
    );
    Ok(extraction)
}

/// Link type from the command line, else from the settings file.
pub fn resolve_link_type(config: &Config) -> LinkType {
    config
        .link_type
        .unwrap_or_else(|| Settings::load_or_default(&config.settings_path).link_type)
}

/// Calendar view of an extraction, opening on today when it has no exams.
pub fn calendar_view(extraction: &Extraction, config: &Config) -> CalendarView {
    build_view(
        extraction,
        resolve_link_type(config),
        chrono::Local::now().date_naive(),
    )
}
