//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Entry;
use crate::core::models::{EntryRecord, OutputConfig};
use crate::error::HistoryError;
use crate::message::{MESSAGE_COL, SPEAKER_COL, TIMESTAMP_COL};

/// Writes entries to a CSV file.
///
/// # Format
/// - Delimiter: [`OutputConfig::csv_delimiter`] (`,` by default)
/// - Columns: `timestamp`, `speaker`, `message`
/// - Multiline messages are quoted, newlines kept
pub fn write_csv(
    entries: &[Entry],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), HistoryError> {
    config.validate()?;
    let file = File::create(output_path)?;
    write_csv_to(entries, file, config)
}

/// Converts entries to a CSV string.
pub fn to_csv(entries: &[Entry], config: &OutputConfig) -> Result<String, HistoryError> {
    let mut buf = Vec::new();
    write_csv_to(entries, &mut buf, config)?;
    String::from_utf8(buf).map_err(|e| HistoryError::invalid_format("csv", e.to_string()))
}

fn write_csv_to<W: Write>(
    entries: &[Entry],
    out: W,
    config: &OutputConfig,
) -> Result<(), HistoryError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.csv_delimiter)
        .from_writer(out);

    writer.write_record([TIMESTAMP_COL, SPEAKER_COL, MESSAGE_COL])?;
    for entry in entries {
        let record = EntryRecord::new(entry, config)?;
        writer.write_record([record.timestamp.as_str(), record.speaker, record.message])?;
    }

    writer.flush()?;
    Ok(())
}
