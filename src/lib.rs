//! # line-history
//!
//! A streaming parser for LINE messenger "export chat history" text files.
//!
//! ## Overview
//!
//! An export is a plain-text log: a date line such as `2024/01/01(Mon)` opens
//! each day, and every message starts with a tab-separated header line
//! carrying a time, a speaker and the first line of text. Messages spanning
//! several lines are wrapped in double quotes. This crate turns such a file
//! into a sequence of [`Entry`] values, each with a full timestamp.
//!
//! Parsing is lazy and holds at most one message in memory, so arbitrarily
//! large exports can be processed in constant space.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use line_history::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = HistoryParser::new();
//!     for entry in parser.stream("chat_history.txt")? {
//!         let entry = entry?;
//!         println!("{} {}: {}", entry.timestamp, entry.speaker, entry.message);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Querying
//!
//! ```rust,no_run
//! use line_history::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let history = History::from_file("chat_history.txt")?;
//! let meals = history
//!     .where_year(2024)
//!     .where_speaker("Alice")
//!     .where_matches(r"(?i)dinner|lunch")?
//!     .collect();
//! # #[cfg(feature = "json-output")]
//! write_json(&meals, "alice_meals.json", &OutputConfig::new())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - line classification and message finalization
//! - [`streaming`] - the entry assembler and pull-based iterators
//! - [`parser`] - [`HistoryParser`](parser::HistoryParser), the entry point
//! - [`config`] - [`ParserConfig`](config::ParserConfig)
//! - [`message`] - the [`Entry`] record
//! - [`core`] - filtering, the [`History`](core::History) table and writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`error`] - [`HistoryError`] and [`Result`]
//! - [`cli`] - clap argument types (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod streaming;

pub use error::{HistoryError, Result};
pub use message::Entry;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use line_history::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Entry;
    pub use crate::error::{HistoryError, Result};

    pub use crate::config::{HeaderLayout, ParserConfig};
    pub use crate::parser::HistoryParser;
    pub use crate::streaming::HistoryIterator;

    pub use crate::core::filter::{FilterConfig, Predicate, apply_filters};
    pub use crate::core::history::History;
    pub use crate::core::models::OutputConfig;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
