//! Everything downstream of the parser.
//!
//! This module contains:
//! - [`filter`] - Predicates over entries and their AND composition
//! - [`history`] - A queryable, lazily filtered table of entries
//! - [`models`] - Output configuration
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> line_history::Result<()> {
//! use line_history::core::{History, OutputConfig, to_csv};
//!
//! let history = History::parse_str("2024/01/01(Mon)\n09:00\tAlice\tHello\n");
//! let csv = to_csv(&history.where_speaker("Alice").collect(), &OutputConfig::new())?;
//! assert!(csv.contains("Alice"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

pub mod filter;
pub mod history;
pub mod models;
pub mod output;

pub use filter::{FilterConfig, Predicate, apply_filters};
pub use history::History;
pub use models::OutputConfig;

pub use crate::Entry;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
