//! Entry point for parsing LINE chat exports.
//!
//! [`HistoryParser`] bundles a [`ParserConfig`] with the ways input can reach
//! the assembler: a file path, any buffered reader, a string, or an iterator
//! of lines.
//!
//! # Example
//!
//! ```rust
//! use line_history::parser::HistoryParser;
//!
//! let parser = HistoryParser::new();
//! let entries = parser.parse_str("2024/01/01(Mon)\n09:00\tAlice\tHello\n");
//!
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].speaker, "Alice");
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::Entry;
use crate::config::ParserConfig;
use crate::error::Result;
use crate::streaming::{HistoryIterator, LineEntries};

/// Parser for LINE "export chat" text files.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryParser {
    config: ParserConfig,
}

impl HistoryParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses an export file and returns all entries.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Io`](crate::HistoryError::Io) if the file
    /// cannot be opened or read.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Vec<Entry>> {
        self.stream(path)?.collect()
    }

    /// Parses export content held in memory.
    pub fn parse_str(&self, content: &str) -> Vec<Entry> {
        self.parse_lines(content.split_inclusive('\n')).collect()
    }

    /// Lazily parses entries from lines that keep their terminators.
    pub fn parse_lines<I, S>(&self, lines: I) -> LineEntries<I::IntoIter>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        LineEntries::new(lines.into_iter(), self.config)
    }

    /// Opens an export file and returns a lazy iterator over its entries.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Io`](crate::HistoryError::Io) if the file
    /// cannot be opened.
    pub fn stream(&self, path: impl AsRef<Path>) -> Result<HistoryIterator<BufReader<File>>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();
        debug!(path = %path.display(), bytes = file_size, "opened export");

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        Ok(HistoryIterator::new(reader, self.config).with_total_bytes(file_size))
    }

    /// Returns a lazy iterator over entries read from `reader`.
    pub fn stream_reader<R: BufRead>(&self, reader: R) -> HistoryIterator<R> {
        HistoryIterator::new(reader, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeaderLayout;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "2024/01/01(Mon)\n09:00\tAlice\tHello\n09:05\tBob\tHi there\n";

    #[test]
    fn test_parse_str() {
        let entries = HistoryParser::new().parse_str(SAMPLE);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].speaker, "Bob");
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let entries = HistoryParser::new().parse(file.path()).unwrap();
        assert_eq!(entries, HistoryParser::new().parse_str(SAMPLE));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = HistoryParser::new()
            .parse("/definitely/not/here.txt")
            .unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_stream_reports_total_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let iter = HistoryParser::new().stream(file.path()).unwrap();
        assert_eq!(iter.total_bytes(), Some(SAMPLE.len() as u64));
    }

    #[test]
    fn test_stream_reader() {
        let entries: Vec<_> = HistoryParser::new()
            .stream_reader(Cursor::new(SAMPLE))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_parse_lines() {
        let lines = ["2024/01/01(Mon)\n", "09:00\tAlice\tHello\n"];
        let entries: Vec<_> = HistoryParser::new().parse_lines(lines).collect();
        assert_eq!(entries[0].message, "Hello");
    }

    #[test]
    fn test_config_layout_applies() {
        let parser = HistoryParser::with_config(
            ParserConfig::new().with_header_layout(HeaderLayout::SpeakerFirst),
        );
        assert_eq!(parser.config().header_layout, HeaderLayout::SpeakerFirst);
        assert!(parser.parse_str(SAMPLE).is_empty());
    }
}
