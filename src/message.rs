//! The entry type produced by the parser.
//!
//! An [`Entry`] is one chat message from a LINE export: when it was sent,
//! who sent it, and what it said. Multi-line messages keep their internal
//! newlines.
//!
//! # Example
//!
//! ```
//! use line_history::Entry;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let entry = Entry::new(ts, "Alice", "Hello");
//!
//! assert_eq!(entry.speaker(), "Alice");
//! assert_eq!(entry.message(), "Hello");
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Column name of [`Entry::timestamp`] in tabular output.
pub const TIMESTAMP_COL: &str = "timestamp";
/// Column name of [`Entry::speaker`] in tabular output.
pub const SPEAKER_COL: &str = "speaker";
/// Column name of [`Entry::message`] in tabular output.
pub const MESSAGE_COL: &str = "message";

/// A single finalized chat message.
///
/// Exports carry no timezone information, so the timestamp is a naive
/// local date and time: the date comes from the most recent date line of
/// the export, the time from the message line itself.
///
/// Entries serialize with `timestamp`, `speaker` and `message` fields,
/// timestamps in ISO 8601 (`2024-01-01T09:00:00`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// When the message was sent.
    pub timestamp: NaiveDateTime,

    /// The display name of the sender, verbatim from the export.
    pub speaker: String,

    /// Message body. May contain newlines.
    pub message: String,
}

impl Entry {
    /// Creates a new entry.
    pub fn new(
        timestamp: NaiveDateTime,
        speaker: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            speaker: speaker.into(),
            message: message.into(),
        }
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the calendar date part of the timestamp.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the time-of-day part of the timestamp.
    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }

    /// Returns the speaker name.
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the finalized message contains a newline.
    ///
    /// This looks at the text only. A message assembled from several
    /// physical lines can still end up without a newline once its quotes
    /// are stripped.
    pub fn has_newlines(&self) -> bool {
        self.message.contains('\n')
    }
}
