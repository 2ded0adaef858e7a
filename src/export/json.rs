//! JSON export of extraction results and calendar views.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use super::writer::open_output;

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(value: &T, output: Option<&Path>) -> Result<()> {
    let mut writer = open_output(output)?;
    serde_json::to_writer_pretty(&mut writer, value).context("Failed to serialize JSON output")?;
    writeln!(writer).context("Failed to write JSON output")?;
    writer.flush().context("Failed to flush JSON output")?;
    Ok(())
}
