//! Error type definitions.
//!
//! This module defines the error, warning, and info types used throughout the
//! application. Extraction itself never returns an error: problems with the
//! page degrade to missing fields and are counted as warnings instead.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for reading the settings file.
///
/// Only surfaced by `Settings::try_load`; the regular loader substitutes the
/// default link type and logs the error.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("Settings file read error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON or has an unknown link type.
    #[error("Settings file parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error types for waiting on a page snapshot to become ready.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PollError {
    /// The wait was cancelled before the page became ready.
    #[error("Polling cancelled before the page was ready")]
    Cancelled,

    /// The retry policy's attempt limit was reached.
    #[error("Page not ready after {attempts} attempts")]
    AttemptsExhausted {
        /// Number of load attempts made
        attempts: u32,
    },
}

/// Types of warnings that can occur while extracting exams.
///
/// Warnings indicate missing or malformed page data that was absorbed by the
/// extractor (a field left unset, a shot or card dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    MissingTitle,         // Card without a title; card dropped
    NoParseableDates,     // Card without any valid date; card dropped
    UnparseableDate,      // Single date token dropped
    IconCountMismatch,    // Icons and dates differ in count
    MissingResultRegion,  // No result region next to a session
    NonNumericResult,     // Result region present, score not a number
}

/// Types of informational metrics recorded during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    CardSeen,
    ExamExtracted,
    ShotExtracted,
    DeadlineFound,
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "Missing exam title",
            WarningType::NoParseableDates => "No parseable dates",
            WarningType::UnparseableDate => "Unparseable date token",
            WarningType::IconCountMismatch => "Icon/date count mismatch",
            WarningType::MissingResultRegion => "Missing result region",
            WarningType::NonNumericResult => "Non-numeric result",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::CardSeen => "Cards seen",
            InfoType::ExamExtracted => "Exams extracted",
            InfoType::ShotExtracted => "Shots extracted",
            InfoType::DeadlineFound => "Rejection deadlines found",
        }
    }
}
