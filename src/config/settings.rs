//! User settings persisted as a small JSON key-value file.
//!
//! The only key is `linkType`, which decides where a calendar event links to.
//! A missing, unreadable, or malformed file never stops a run: the default
//! link type is used and the problem is logged.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error_handling::SettingsError;

/// Target of a calendar event's URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LinkType {
    /// Internal anchor that scrolls to the exam card
    #[default]
    ExamArticle,
    /// External countdown display
    AnxiousDisplay,
}

/// Persisted user settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub link_type: LinkType,
}

impl Settings {
    /// Reads settings from `path`.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Io` if the file cannot be read and
    /// `SettingsError::Json` if it does not hold a valid settings object.
    pub fn try_load(path: &Path) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Reads settings, substituting the defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::debug!("Current link type setting: {:?}", settings.link_type);
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!(
                    "No settings file at {}, using defaults",
                    path.display()
                );
                Self::default()
            }
            Err(e) => {
                log::warn!(
                    "Failed to load settings from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
