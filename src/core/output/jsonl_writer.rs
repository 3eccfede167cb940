//! JSON Lines (JSONL) output writer.
//!
//! One entry per line, suitable for streaming consumers and line-oriented
//! tools like `jq -c`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::Entry;
use crate::core::models::{EntryRecord, OutputConfig};
use crate::error::HistoryError;

/// Writes entries to a JSONL file.
pub fn write_jsonl(
    entries: &[Entry],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), HistoryError> {
    config.validate()?;
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for entry in entries {
        serde_json::to_writer(&mut writer, &EntryRecord::new(entry, config)?)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts entries to a JSONL string, each line terminated by `\n`.
pub fn to_jsonl(entries: &[Entry], config: &OutputConfig) -> Result<String, HistoryError> {
    let mut output = String::new();
    for entry in entries {
        output.push_str(&serde_json::to_string(&EntryRecord::new(entry, config)?)?);
        output.push('\n');
    }
    Ok(output)
}
