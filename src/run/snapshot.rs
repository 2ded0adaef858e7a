//! Reading page snapshots and running extraction passes over them.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use url::Url;

use crate::dom::Page;
use crate::error_handling::ExtractionStats;
use crate::extract::extract_page;
use crate::model::Extraction;

/// Where the page HTML comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    /// A file that may be rewritten between reads
    File(PathBuf),
    /// Standard input, already read in full
    Stdin(String),
}

impl SnapshotSource {
    /// Resolves a CLI input path; `-` reads all of stdin once.
    ///
    /// A file must exist when opened; later reads may still fail while it is
    /// being rewritten.
    pub fn open(input: &Path) -> Result<Self> {
        if input == Path::new("-") {
            let mut html = String::new();
            std::io::stdin()
                .read_to_string(&mut html)
                .context("Failed to read page snapshot from stdin")?;
            Ok(SnapshotSource::Stdin(html))
        } else {
            std::fs::metadata(input)
                .with_context(|| format!("Cannot open page snapshot: {}", input.display()))?;
            Ok(SnapshotSource::File(input.to_path_buf()))
        }
    }

    /// Whether re-reading can ever return different content.
    pub fn can_change(&self) -> bool {
        matches!(self, SnapshotSource::File(_))
    }

    /// Current HTML of the snapshot.
    pub fn read(&self) -> std::io::Result<String> {
        match self {
            SnapshotSource::File(path) => std::fs::read_to_string(path),
            SnapshotSource::Stdin(html) => Ok(html.clone()),
        }
    }
}

/// One extraction attempt: read, parse, extract.
///
/// A snapshot that cannot be read is treated like a page that is not ready,
/// since a dump in progress may be briefly missing or truncated.
pub fn attempt_extraction(
    source: &SnapshotSource,
    base_url: Option<&Url>,
    stats: &ExtractionStats,
) -> Option<Extraction> {
    let html = match source.read() {
        Ok(html) => html,
        Err(e) => {
            log::warn!("Failed to read page snapshot: {}", e);
            return None;
        }
    };
    let page = Page::parse(&html);
    extract_page(&page, base_url, stats)
}
