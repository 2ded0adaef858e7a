//! Extraction statistics tracking.
//!
//! Counts the warnings absorbed and the records produced during extraction
//! passes, so a run can report how much of the page was understood.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{InfoType, WarningType};

/// Thread-safe extraction statistics tracker.
///
/// Counters are atomic, so the tracker only needs `&self` while the extractor
/// walks the page. Every type starts at zero.
pub struct ExtractionStats {
    warnings: HashMap<WarningType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStats {
    pub fn new() -> Self {
        let warnings = WarningType::iter()
            .map(|w| (w, AtomicUsize::new(0)))
            .collect();
        let info = InfoType::iter().map(|i| (i, AtomicUsize::new(0))).collect();
        ExtractionStats { warnings, info }
    }

    /// Increment a warning counter.
    pub fn increment_warning(&self, warning: WarningType) {
        if let Some(counter) = self.warnings.get(&warning) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment warning counter for {:?} which is not in the map. \
                 This indicates a bug in ExtractionStats initialization.",
                warning
            );
        }
    }

    /// Increment an info counter.
    pub fn increment_info(&self, info_type: InfoType) {
        if let Some(counter) = self.info.get(&info_type) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment info counter for {:?} which is not in the map. \
                 This indicates a bug in ExtractionStats initialization.",
                info_type
            );
        }
    }

    /// Get the count for a warning type.
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings
            .get(&warning)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for an info type.
    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info
            .get(&info_type)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        WarningType::iter().map(|w| self.get_warning_count(w)).sum()
    }

    /// Logs non-zero counters at info level.
    pub fn log_summary(&self) {
        for info_type in InfoType::iter() {
            let count = self.get_info_count(info_type);
            if count > 0 {
                log::info!("{}: {}", info_type.as_str(), count);
            }
        }
        for warning in WarningType::iter() {
            let count = self.get_warning_count(warning);
            if count > 0 {
                log::info!("{}: {}", warning.as_str(), count);
            }
        }
    }
}
