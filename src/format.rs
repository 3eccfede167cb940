//! Output formats for parsed histories.
//!
//! These types carry no CLI dependencies so library users can select a
//! writer by name or file extension.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> line_history::Result<()> {
//! use line_history::format::{OutputFormat, write_to_format};
//! use line_history::core::models::OutputConfig;
//! use line_history::parser::HistoryParser;
//!
//! let entries = HistoryParser::new().parse("chat_history.txt")?;
//!
//! let format = OutputFormat::from_path("history.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! write_to_format(&entries, "history.jsonl", format, &OutputConfig::new())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Entry;
use crate::core::models::OutputConfig;
use crate::error::HistoryError;

/// Serialization format for entries.
///
/// ```rust
/// use line_history::format::OutputFormat;
///
/// let format: OutputFormat = "ndjson".parse().unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Comma separated, one row per entry (default)
    #[default]
    Csv,

    /// A single pretty-printed JSON array
    Json,

    /// One JSON object per line, also known as NDJSON
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names, aliases included.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Picks a format from a file extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidFormat`] for a missing or unknown
    /// extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        ext.parse().map_err(|_| {
            HistoryError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: {}",
                    ext,
                    Self::all_names().join(", ")
                ),
            )
        })
    }

    #[allow(dead_code)]
    fn required_feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes entries to `path` in the given format.
///
/// # Errors
///
/// Fails if the writer for `format` was compiled out or the file cannot be
/// written.
#[allow(unused_variables)]
pub fn write_to_format(
    entries: &[Entry],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), HistoryError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(entries, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(entries, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(entries, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders entries to a string in the given format.
///
/// ```rust
/// # #[cfg(feature = "json-output")]
/// # fn main() -> line_history::Result<()> {
/// use line_history::format::{OutputFormat, to_format_string};
/// use line_history::core::models::OutputConfig;
/// use line_history::parser::HistoryParser;
///
/// let entries = HistoryParser::new().parse_str("2024/01/01(Mon)\n09:00\tAlice\tHi\n");
/// let jsonl = to_format_string(&entries, OutputFormat::Jsonl, &OutputConfig::new())?;
/// assert_eq!(jsonl.lines().count(), 1);
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "json-output"))]
/// # fn main() {}
/// ```
#[allow(unused_variables)]
pub fn to_format_string(
    entries: &[Entry],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, HistoryError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(entries, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(entries, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(entries, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> HistoryError {
    HistoryError::invalid_format(
        "output",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format,
            format.required_feature()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("ndjson".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_display_and_meta() {
        assert_eq!(OutputFormat::Jsonl.to_string(), "JSONL");
        assert_eq!(OutputFormat::Csv.mime_type(), "text/csv");
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::all().len(), 3);
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path("out.csv").unwrap(), OutputFormat::Csv);
        assert_eq!(
            OutputFormat::from_path("/tmp/dir.v2/out.JSONL").unwrap(),
            OutputFormat::Jsonl
        );

        let err = OutputFormat::from_path("out.txt").unwrap_err();
        assert!(err.is_invalid_format());
        assert!(OutputFormat::from_path("no_extension").is_err());
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Jsonl).unwrap();
        assert_eq!(json, "\"jsonl\"");
    }

    #[cfg(all(feature = "csv-output", feature = "json-output"))]
    #[test]
    fn test_to_format_string_dispatch() {
        let entries = crate::parser::HistoryParser::new()
            .parse_str("2024/01/01(Mon)\n09:00\tAlice\tHi\n");
        let config = OutputConfig::new();

        let csv = to_format_string(&entries, OutputFormat::Csv, &config).unwrap();
        assert!(csv.starts_with("timestamp,speaker,message"));
        let json = to_format_string(&entries, OutputFormat::Json, &config).unwrap();
        assert!(json.trim_start().starts_with('['));
    }
}
