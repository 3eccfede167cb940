//! Filter entries by date, time, speaker and message text.
//!
//! A [`FilterConfig`] is a list of [`Predicate`]s combined with AND logic.
//! Use [`apply_filters`] on an owned vector, or [`FilterConfig::matches`] to
//! filter inline while streaming.
//!
//! | Predicate | Builder | Matches |
//! |-----------|---------|---------|
//! | [`Year`](Predicate::Year) | [`with_year`](FilterConfig::with_year) | timestamp year |
//! | [`Month`](Predicate::Month) | [`with_month`](FilterConfig::with_month) | timestamp month (1-12) |
//! | [`Day`](Predicate::Day) | [`with_day`](FilterConfig::with_day) | day of month |
//! | [`DateBetween`](Predicate::DateBetween) | [`with_date_between`](FilterConfig::with_date_between) | calendar date range |
//! | [`TimeBetween`](Predicate::TimeBetween) | [`with_time_between`](FilterConfig::with_time_between) | time-of-day range |
//! | [`Speaker`](Predicate::Speaker) | [`with_speaker`](FilterConfig::with_speaker) | exact speaker |
//! | [`Contains`](Predicate::Contains) | [`with_contains`](FilterConfig::with_contains) | literal substring of message |
//! | [`Matches`](Predicate::Matches) | [`with_pattern`](FilterConfig::with_pattern) | regex over message |
//!
//! All `*Between` ranges include both bounds.
//!
//! # Example
//!
//! ```
//! use line_history::core::filter::{FilterConfig, apply_filters};
//! use line_history::parser::HistoryParser;
//!
//! # fn main() -> line_history::Result<()> {
//! let entries = HistoryParser::new().parse_str(
//!     "2024/01/01(Mon)\n09:00\tAlice\tGood morning\n21:00\tBob\tGood night\n",
//! );
//!
//! let config = FilterConfig::new()
//!     .with_time_between_str("06:00", "12:00")?
//!     .with_contains("morning");
//!
//! let filtered = apply_filters(entries, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].speaker, "Alice");
//! # Ok(())
//! # }
//! ```

use chrono::{Datelike, NaiveDate, NaiveTime};
use regex::Regex;

use crate::Entry;
use crate::error::HistoryError;

/// A single condition on an [`Entry`].
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Timestamp year equals.
    Year(i32),
    /// Timestamp year within an inclusive range.
    YearBetween(i32, i32),
    /// Timestamp month (1-12) equals.
    Month(u32),
    /// Timestamp month within an inclusive range.
    MonthBetween(u32, u32),
    /// Day of month equals.
    Day(u32),
    /// Day of month within an inclusive range.
    DayBetween(u32, u32),
    /// Calendar date equals.
    Date(NaiveDate),
    /// Calendar date within an inclusive range.
    DateBetween(NaiveDate, NaiveDate),
    /// Time of day within an inclusive range.
    TimeBetween(NaiveTime, NaiveTime),
    /// Speaker equals, case-sensitive.
    Speaker(String),
    /// Message contains a literal substring.
    Contains(String),
    /// Message matches a regular expression.
    Matches(Regex),
    /// Message equals.
    Message(String),
}

impl Predicate {
    /// Returns `true` if `entry` satisfies this predicate.
    pub fn matches(&self, entry: &Entry) -> bool {
        let ts = entry.timestamp;
        match self {
            Predicate::Year(year) => ts.year() == *year,
            Predicate::YearBetween(lo, hi) => (*lo..=*hi).contains(&ts.year()),
            Predicate::Month(month) => ts.month() == *month,
            Predicate::MonthBetween(lo, hi) => (*lo..=*hi).contains(&ts.month()),
            Predicate::Day(day) => ts.day() == *day,
            Predicate::DayBetween(lo, hi) => (*lo..=*hi).contains(&ts.day()),
            Predicate::Date(date) => ts.date() == *date,
            Predicate::DateBetween(lo, hi) => (*lo..=*hi).contains(&ts.date()),
            Predicate::TimeBetween(lo, hi) => (*lo..=*hi).contains(&ts.time()),
            Predicate::Speaker(speaker) => entry.speaker == *speaker,
            Predicate::Contains(needle) => entry.message.contains(needle.as_str()),
            Predicate::Matches(re) => re.is_match(&entry.message),
            Predicate::Message(message) => entry.message == *message,
        }
    }
}

/// Configuration for filtering entries.
///
/// Predicates are combined with AND logic: an entry must match all of them
/// to be included. An empty configuration matches everything.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    predicates: Vec<Predicate>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an arbitrary predicate.
    #[must_use]
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Keeps entries from the given year.
    #[must_use]
    pub fn with_year(self, year: i32) -> Self {
        self.with(Predicate::Year(year))
    }

    /// Keeps entries whose year lies in `lower..=upper`.
    #[must_use]
    pub fn with_year_between(self, lower: i32, upper: i32) -> Self {
        self.with(Predicate::YearBetween(lower, upper))
    }

    /// Keeps entries from the given month (1-12) of any year.
    #[must_use]
    pub fn with_month(self, month: u32) -> Self {
        self.with(Predicate::Month(month))
    }

    /// Keeps entries whose month lies in `lower..=upper`.
    #[must_use]
    pub fn with_month_between(self, lower: u32, upper: u32) -> Self {
        self.with(Predicate::MonthBetween(lower, upper))
    }

    /// Keeps entries from the given day of month.
    #[must_use]
    pub fn with_day(self, day: u32) -> Self {
        self.with(Predicate::Day(day))
    }

    /// Keeps entries whose day of month lies in `lower..=upper`.
    #[must_use]
    pub fn with_day_between(self, lower: u32, upper: u32) -> Self {
        self.with(Predicate::DayBetween(lower, upper))
    }

    /// Keeps entries from exactly this date.
    #[must_use]
    pub fn with_date(self, date: NaiveDate) -> Self {
        self.with(Predicate::Date(date))
    }

    /// Keeps entries dated within `lower..=upper`.
    #[must_use]
    pub fn with_date_between(self, lower: NaiveDate, upper: NaiveDate) -> Self {
        self.with(Predicate::DateBetween(lower, upper))
    }

    /// Keeps entries on or after a `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(self, date_str: &str) -> Result<Self, HistoryError> {
        let date = parse_date(date_str)?;
        Ok(self.with(Predicate::DateBetween(date, NaiveDate::MAX)))
    }

    /// Keeps entries on or before a `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(self, date_str: &str) -> Result<Self, HistoryError> {
        let date = parse_date(date_str)?;
        Ok(self.with(Predicate::DateBetween(NaiveDate::MIN, date)))
    }

    /// Keeps entries sent between two times of day, inclusive.
    #[must_use]
    pub fn with_time_between(self, lower: NaiveTime, upper: NaiveTime) -> Self {
        self.with(Predicate::TimeBetween(lower, upper))
    }

    /// Keeps entries sent between two `HH:MM` times of day, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidTime`] if either time is invalid.
    pub fn with_time_between_str(self, lower: &str, upper: &str) -> Result<Self, HistoryError> {
        let lower = parse_time(lower)?;
        let upper = parse_time(upper)?;
        Ok(self.with_time_between(lower, upper))
    }

    /// Keeps entries from exactly this speaker.
    #[must_use]
    pub fn with_speaker(self, speaker: impl Into<String>) -> Self {
        self.with(Predicate::Speaker(speaker.into()))
    }

    /// Keeps entries whose message contains `needle` literally.
    #[must_use]
    pub fn with_contains(self, needle: impl Into<String>) -> Self {
        self.with(Predicate::Contains(needle.into()))
    }

    /// Keeps entries whose message matches a regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidPattern`] if `pattern` does not compile.
    pub fn with_pattern(self, pattern: &str) -> Result<Self, HistoryError> {
        let re = Regex::new(pattern).map_err(|e| HistoryError::invalid_pattern(pattern, e))?;
        Ok(self.with(Predicate::Matches(re)))
    }

    /// Keeps entries whose message equals `message`.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        self.with(Predicate::Message(message.into()))
    }

    /// Returns the configured predicates in insertion order.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns `true` if any predicate is configured.
    pub fn is_active(&self) -> bool {
        !self.predicates.is_empty()
    }

    /// Returns `true` if `entry` satisfies every predicate.
    pub fn matches(&self, entry: &Entry) -> bool {
        self.predicates.iter().all(|p| p.matches(entry))
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, HistoryError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| HistoryError::invalid_date(date_str))
}

fn parse_time(time_str: &str) -> Result<NaiveTime, HistoryError> {
    NaiveTime::parse_from_str(time_str, "%H:%M").map_err(|_| HistoryError::invalid_time(time_str))
}

/// Filters entries, keeping only those that match all configured predicates.
///
/// Input order is preserved. With no active predicates the input is
/// returned unchanged.
pub fn apply_filters(entries: Vec<Entry>, config: &FilterConfig) -> Vec<Entry> {
    if !config.is_active() {
        return entries;
    }

    entries
        .into_iter()
        .filter(|entry| config.matches(entry))
        .collect()
}
