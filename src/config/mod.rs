//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (retry delays, output file names, external URLs)
//! - Library configuration and log option types
//! - User settings (`linkType`) persistence
//! - CLI option types and parsing

mod cli;
mod constants;
mod settings;
mod types;

pub use cli::{Command, Opt, PageArgs};
pub use constants::*;
pub use settings::{LinkType, Settings};
pub use types::{Config, LogFormat, LogLevel, RetryPolicy};
