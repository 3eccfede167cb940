//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Entry;
use crate::core::models::{EntryRecord, OutputConfig};
use crate::error::HistoryError;

/// Writes entries to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2024-01-01 09:00", "speaker": "Alice", "message": "Hello"}
/// ]
/// ```
pub fn write_json(
    entries: &[Entry],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), HistoryError> {
    let json = to_json(entries, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts entries to a pretty-printed JSON array.
pub fn to_json(entries: &[Entry], config: &OutputConfig) -> Result<String, HistoryError> {
    let records: Vec<EntryRecord<'_>> = entries
        .iter()
        .map(|e| EntryRecord::new(e, config))
        .collect::<Result<_, _>>()?;
    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entries() -> Vec<Entry> {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        vec![
            Entry::new(ts, "Alice", "Hello"),
            Entry::new(ts, "Bob", "\"quoted\"\nand more"),
        ]
    }

    #[test]
    fn test_to_json_array() {
        let json = to_json(&entries(), &OutputConfig::new()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["timestamp"], "2024-01-01 09:00");
        assert_eq!(arr[0]["speaker"], "Alice");
        assert_eq!(arr[1]["message"], "\"quoted\"\nand more");
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[], &OutputConfig::new()).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_file() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        write_json(&entries(), temp_file.path(), &OutputConfig::new()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("\"speaker\": \"Bob\""));
    }
}
