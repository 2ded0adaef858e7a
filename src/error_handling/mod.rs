//! Error handling and extraction statistics.
//!
//! This module provides:
//! - Error type definitions for the ambient layers (logger, settings, polling)
//! - Warning/info categories absorbed by the extractor
//! - Extraction statistics tracking

mod stats;
mod types;

// Re-export public API
pub use stats::ExtractionStats;
pub use types::{InfoType, InitializationError, PollError, SettingsError, WarningType};
