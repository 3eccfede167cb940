//! Streaming entry assembly.
//!
//! Parsing is pull-based: the iterators here do no work until asked for the
//! next entry, and then read only as far as needed to complete it. At most
//! one entry is held in memory at a time, so exports of any size stream in
//! constant memory.
//!
//! # Architecture
//!
//! - [`Assembler`] - the line-at-a-time state machine, free of any I/O
//! - [`HistoryIterator`] - drives an assembler from a [`std::io::BufRead`]
//! - [`LineEntries`] - drives an assembler from in-memory lines
//!
//! # Example
//!
//! ```rust,no_run
//! use line_history::parser::HistoryParser;
//!
//! let parser = HistoryParser::new();
//! for result in parser.stream("chat_history.txt")? {
//!     let entry = result?;
//!     println!("{} {}: {}", entry.timestamp, entry.speaker, entry.message);
//! }
//! # Ok::<(), line_history::HistoryError>(())
//! ```

mod assembler;
mod reader;

pub use assembler::{Assembler, AssemblerState};
pub use reader::{HistoryIterator, LineEntries};
