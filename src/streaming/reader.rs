//! Pull-based entry streams over line sources.

use std::io::BufRead;
use std::iter::FusedIterator;

use tracing::debug;

use crate::Entry;
use crate::config::ParserConfig;
use crate::error::Result;

use super::Assembler;

/// Lazily parses entries from a buffered reader.
///
/// Nothing is read until [`next`](Iterator::next) is called, and each call
/// reads only as many lines as it takes to complete one entry. A read error
/// is yielded once and ends the stream.
///
/// # Example
///
/// ```
/// use line_history::streaming::HistoryIterator;
/// use line_history::config::ParserConfig;
/// use std::io::Cursor;
///
/// let input = "2024/01/01(Mon)\n09:00\tAlice\tHello\n";
/// let mut iter = HistoryIterator::new(Cursor::new(input), ParserConfig::default());
///
/// let entry = iter.next().unwrap()?;
/// assert_eq!(entry.speaker, "Alice");
/// assert!(iter.next().is_none());
/// # Ok::<(), line_history::HistoryError>(())
/// ```
pub struct HistoryIterator<R: BufRead> {
    reader: R,
    assembler: Assembler,
    config: ParserConfig,
    line_buffer: String,
    bytes_read: u64,
    total_bytes: Option<u64>,
    lines_read: usize,
    entries_emitted: usize,
    finished: bool,
}

impl<R: BufRead> HistoryIterator<R> {
    /// Creates an iterator over `reader`.
    pub fn new(reader: R, config: ParserConfig) -> Self {
        Self {
            reader,
            assembler: Assembler::new(config.header_layout),
            config,
            line_buffer: String::with_capacity(4096),
            bytes_read: 0,
            total_bytes: None,
            lines_read: 0,
            entries_emitted: 0,
            finished: false,
        }
    }

    /// Records the total input size so [`progress`](Self::progress) can report a percentage.
    #[must_use]
    pub fn with_total_bytes(mut self, total: u64) -> Self {
        self.total_bytes = Some(total);
        self
    }

    /// Returns approximate progress as a percentage (0.0 to 100.0).
    ///
    /// Returns `None` if the total size is unknown or zero.
    pub fn progress(&self) -> Option<f64> {
        match self.total_bytes {
            Some(total) if total > 0 => Some((self.bytes_read as f64 / total as f64) * 100.0),
            _ => None,
        }
    }

    /// Returns the number of bytes consumed so far.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    /// Returns the total input size in bytes, if known.
    pub fn total_bytes(&self) -> Option<u64> {
        self.total_bytes
    }

    /// Returns the number of physical lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    fn read_line(&mut self) -> std::io::Result<bool> {
        self.line_buffer.clear();
        let bytes = self.reader.read_line(&mut self.line_buffer)?;
        if bytes == 0 {
            return Ok(false);
        }
        self.bytes_read += bytes as u64;
        self.lines_read += 1;

        if self.config.normalize_newlines && self.line_buffer.ends_with("\r\n") {
            let len = self.line_buffer.len();
            self.line_buffer.replace_range(len - 2.., "\n");
        }
        Ok(true)
    }

    fn emit(&mut self, entry: Entry) -> Option<Result<Entry>> {
        self.entries_emitted += 1;
        Some(Ok(entry))
    }
}

impl<R: BufRead> Iterator for HistoryIterator<R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.read_line() {
                Ok(true) => {
                    if let Some(entry) = self.assembler.push_line(&self.line_buffer) {
                        return self.emit(entry);
                    }
                }
                Ok(false) => {
                    self.finished = true;
                    let last = self.assembler.finish();
                    debug!(
                        lines = self.lines_read,
                        entries = self.entries_emitted + usize::from(last.is_some()),
                        "end of input"
                    );
                    return match last {
                        Some(entry) => self.emit(entry),
                        None => None,
                    };
                }
                Err(e) => {
                    self.finished = true;
                    debug!(error = %e, lines = self.lines_read, "read failed");
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for HistoryIterator<R> {}

/// Lazily parses entries from an iterator of lines that are already in memory.
///
/// Lines should keep their terminators (as produced by
/// [`str::split_inclusive`]); a line without one is treated as the last line
/// of its message. `\r\n` terminators are normalized the same way as in
/// [`HistoryIterator`].
pub struct LineEntries<I> {
    lines: I,
    assembler: Assembler,
    normalize_newlines: bool,
    finished: bool,
}

impl<I> LineEntries<I> {
    /// Wraps a line iterator.
    pub fn new(lines: I, config: ParserConfig) -> Self {
        Self {
            lines,
            assembler: Assembler::new(config.header_layout),
            normalize_newlines: config.normalize_newlines,
            finished: false,
        }
    }
}

fn push_normalized(assembler: &mut Assembler, line: &str, normalize: bool) -> Option<Entry> {
    match line.strip_suffix("\r\n") {
        Some(body) if normalize => {
            let mut normalized = String::with_capacity(line.len() - 1);
            normalized.push_str(body);
            normalized.push('\n');
            assembler.push_line(&normalized)
        }
        _ => assembler.push_line(line),
    }
}

impl<I, S> Iterator for LineEntries<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for line in self.lines.by_ref() {
            let pushed = push_normalized(&mut self.assembler, line.as_ref(), self.normalize_newlines);
            if let Some(entry) = pushed {
                return Some(entry);
            }
        }

        self.finished = true;
        self.assembler.finish()
    }
}

impl<I, S> FusedIterator for LineEntries<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
}
