//! Application initialization.
//!
//! Logger setup for the CLI binary and for library users that want the same
//! output format.

mod logger;

pub use logger::init_logger_with;
