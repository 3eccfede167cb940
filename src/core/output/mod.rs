//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with a `timestamp,speaker,message` header - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one entry per line - requires `json-output` feature
//!
//! All writers render timestamps with [`OutputConfig::timestamp_format`](crate::core::models::OutputConfig).
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> line_history::Result<()> {
//! use line_history::core::output::{to_csv, write_jsonl};
//! use line_history::core::models::OutputConfig;
//! use line_history::parser::HistoryParser;
//!
//! let entries = HistoryParser::new().parse("chat_history.txt")?;
//! let config = OutputConfig::new();
//!
//! write_jsonl(&entries, "history.jsonl", &config)?;
//! let csv_string = to_csv(&entries, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
