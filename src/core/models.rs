//! Output configuration and the flattened record shape shared by writers.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use serde::Serialize;

use crate::Entry;
use crate::error::HistoryError;

/// Default timestamp rendering, minute precision like the export itself.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Configuration for output writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// `chrono` format string for the timestamp column
    pub timestamp_format: String,
    /// Field delimiter for CSV output
    pub csv_delimiter: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            csv_delimiter: b',',
        }
    }
}

impl OutputConfig {
    /// Creates a new output config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders timestamps as RFC 3339 style `YYYY-MM-DDTHH:MM:SS`.
    #[must_use]
    pub fn with_iso_timestamps(self) -> Self {
        self.with_timestamp_format("%Y-%m-%dT%H:%M:%S")
    }

    /// Sets the timestamp format string.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Sets the CSV delimiter.
    #[must_use]
    pub fn with_csv_delimiter(mut self, delimiter: u8) -> Self {
        self.csv_delimiter = delimiter;
        self
    }

    /// Checks that the timestamp format only uses specifiers chrono knows.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidFormat`] for an unknown or incomplete
    /// specifier such as `%Q`.
    pub fn validate(&self) -> Result<(), HistoryError> {
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(invalid_timestamp_format(&self.timestamp_format));
        }
        Ok(())
    }
}

fn invalid_timestamp_format(format: &str) -> HistoryError {
    HistoryError::invalid_format("timestamp", format!("cannot render timestamps with '{}'", format))
}

/// One entry flattened for output, timestamp already rendered.
#[derive(Debug, Serialize)]
pub(crate) struct EntryRecord<'a> {
    pub timestamp: String,
    pub speaker: &'a str,
    pub message: &'a str,
}

impl<'a> EntryRecord<'a> {
    pub(crate) fn new(entry: &'a Entry, config: &OutputConfig) -> Result<Self, HistoryError> {
        let mut timestamp = String::new();
        write!(timestamp, "{}", entry.timestamp.format(&config.timestamp_format))
            .map_err(|_| invalid_timestamp_format(&config.timestamp_format))?;

        Ok(Self {
            timestamp,
            speaker: &entry.speaker,
            message: &entry.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry() -> Entry {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        Entry::new(ts, "Alice", "Hello")
    }

    #[test]
    fn test_output_config_default() {
        let config = OutputConfig::default();
        assert_eq!(config.timestamp_format, "%Y-%m-%d %H:%M");
        assert_eq!(config.csv_delimiter, b',');
    }

    #[test]
    fn test_output_config_builder() {
        let config = OutputConfig::new()
            .with_csv_delimiter(b';')
            .with_timestamp_format("%d.%m.%Y");
        assert_eq!(config.csv_delimiter, b';');
        assert_eq!(config.timestamp_format, "%d.%m.%Y");
    }

    #[test]
    fn test_record_renders_timestamp() {
        let e = entry();
        let record = EntryRecord::new(&e, &OutputConfig::default()).unwrap();
        assert_eq!(record.timestamp, "2024-06-15 12:30");
        assert_eq!(record.speaker, "Alice");

        let record = EntryRecord::new(&e, &OutputConfig::new().with_iso_timestamps()).unwrap();
        assert_eq!(record.timestamp, "2024-06-15T12:30:00");
    }

    #[test]
    fn test_bad_timestamp_format_is_error() {
        let e = entry();
        let config = OutputConfig::new().with_timestamp_format("%Q");
        assert!(config.validate().unwrap_err().is_invalid_format());
        assert!(EntryRecord::new(&e, &config).unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_validate_accepts_known_formats() {
        assert!(OutputConfig::new().validate().is_ok());
        assert!(OutputConfig::new().with_iso_timestamps().validate().is_ok());
        assert!(OutputConfig::new().with_timestamp_format("%d.%m.%Y %H:%M").validate().is_ok());
    }
}
