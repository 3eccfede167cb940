//! A queryable table of parsed entries.
//!
//! [`History`] holds the full, unfiltered entry table behind an [`Arc`] and a
//! [`FilterConfig`] describing the current view. Every `where_*` method
//! returns a new view sharing the same table, so chaining queries never
//! copies entries. Predicates are only evaluated by [`History::collect`],
//! [`History::count`] and [`History::iter`].
//!
//! # Example
//!
//! ```
//! use line_history::core::History;
//!
//! let history = History::parse_str(
//!     "2024/01/01(Mon)\n\
//!      09:00\tAlice\tGood morning\n\
//!      2024/01/02(Tue)\n\
//!      21:00\tBob\tGood night\n",
//! );
//!
//! let alice = history.where_speaker("Alice");
//! assert_eq!(alice.count(), 1);
//! assert_eq!(history.len(), 2);
//!
//! let night = history.where_contains("night").collect();
//! assert_eq!(night[0].speaker, "Bob");
//! ```

use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::Entry;
use crate::config::ParserConfig;
use crate::error::Result;
use crate::parser::HistoryParser;

use super::filter::{FilterConfig, Predicate};

/// Parsed chat history with a lazily applied filter.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Arc<Vec<Entry>>,
    filter: FilterConfig,
}

impl History {
    /// Wraps already parsed entries.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: Arc::new(entries),
            filter: FilterConfig::new(),
        }
    }

    /// Parses every entry from `reader` using the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Io`](crate::HistoryError::Io) if reading fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_config(reader, ParserConfig::default())
    }

    /// Parses every entry from `reader` using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Io`](crate::HistoryError::Io) if reading fails.
    pub fn from_reader_with_config<R: BufRead>(reader: R, config: ParserConfig) -> Result<Self> {
        let entries = HistoryParser::with_config(config)
            .stream_reader(reader)
            .collect::<Result<Vec<_>>>()?;
        debug!(entries = entries.len(), "loaded history");
        Ok(Self::from_entries(entries))
    }

    /// Parses an export file using the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Io`](crate::HistoryError::Io) if the file
    /// cannot be opened or read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with_config(path, ParserConfig::default())
    }

    /// Parses an export file using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Io`](crate::HistoryError::Io) if the file
    /// cannot be opened or read.
    pub fn from_file_with_config(path: impl AsRef<Path>, config: ParserConfig) -> Result<Self> {
        let entries = HistoryParser::with_config(config).parse(path)?;
        debug!(entries = entries.len(), "loaded history");
        Ok(Self::from_entries(entries))
    }

    /// Parses export content held in memory.
    pub fn parse_str(content: &str) -> Self {
        Self::from_entries(HistoryParser::new().parse_str(content))
    }

    /// Parses lines that keep their terminators.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_entries(HistoryParser::new().parse_lines(lines).collect())
    }

    /// Number of entries in the full table, ignoring filters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the full table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the filter describing this view.
    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    /// Timestamp column of the full table.
    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        self.entries.iter().map(|e| e.timestamp).collect()
    }

    /// Speaker column of the full table.
    pub fn speakers(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.speaker.as_str()).collect()
    }

    /// Message column of the full table.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    /// Narrows this view by one more predicate.
    #[must_use]
    pub fn with(&self, predicate: Predicate) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            filter: self.filter.clone().with(predicate),
        }
    }

    /// Narrows this view by every predicate of `filter`.
    #[must_use]
    pub fn with_filter(&self, filter: &FilterConfig) -> Self {
        filter
            .predicates()
            .iter()
            .fold(self.clone(), |view, p| view.with(p.clone()))
    }

    /// Keeps entries from `year`.
    #[must_use]
    pub fn where_year(&self, year: i32) -> Self {
        self.with(Predicate::Year(year))
    }

    /// Keeps entries with a year in `lower..=upper`.
    #[must_use]
    pub fn where_year_between(&self, lower: i32, upper: i32) -> Self {
        self.with(Predicate::YearBetween(lower, upper))
    }

    /// Keeps entries from `month` (1-12) of any year.
    #[must_use]
    pub fn where_month(&self, month: u32) -> Self {
        self.with(Predicate::Month(month))
    }

    /// Keeps entries with a month in `lower..=upper`.
    #[must_use]
    pub fn where_month_between(&self, lower: u32, upper: u32) -> Self {
        self.with(Predicate::MonthBetween(lower, upper))
    }

    /// Keeps entries from day `day` of any month.
    #[must_use]
    pub fn where_day(&self, day: u32) -> Self {
        self.with(Predicate::Day(day))
    }

    /// Keeps entries with a day of month in `lower..=upper`.
    #[must_use]
    pub fn where_day_between(&self, lower: u32, upper: u32) -> Self {
        self.with(Predicate::DayBetween(lower, upper))
    }

    /// Keeps entries sent on `date`.
    #[must_use]
    pub fn where_date(&self, date: NaiveDate) -> Self {
        self.with(Predicate::Date(date))
    }

    /// Keeps entries sent between `lower` and `upper`, both included.
    #[must_use]
    pub fn where_date_between(&self, lower: NaiveDate, upper: NaiveDate) -> Self {
        self.with(Predicate::DateBetween(lower, upper))
    }

    /// Keeps entries sent between `lower` and `upper` on any day, both included.
    #[must_use]
    pub fn where_time_between(&self, lower: NaiveTime, upper: NaiveTime) -> Self {
        self.with(Predicate::TimeBetween(lower, upper))
    }

    /// Keeps entries from exactly `speaker`.
    #[must_use]
    pub fn where_speaker(&self, speaker: impl Into<String>) -> Self {
        self.with(Predicate::Speaker(speaker.into()))
    }

    /// Keeps entries whose message contains `needle` literally.
    #[must_use]
    pub fn where_contains(&self, needle: impl Into<String>) -> Self {
        self.with(Predicate::Contains(needle.into()))
    }

    /// Keeps entries whose message matches a regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidPattern`](crate::HistoryError::InvalidPattern)
    /// if `pattern` does not compile.
    pub fn where_matches(&self, pattern: &str) -> Result<Self> {
        let filter = self.filter.clone().with_pattern(pattern)?;
        Ok(Self {
            entries: Arc::clone(&self.entries),
            filter,
        })
    }

    /// Keeps entries whose message is exactly `message`.
    #[must_use]
    pub fn where_message(&self, message: impl Into<String>) -> Self {
        self.with(Predicate::Message(message.into()))
    }

    /// Iterates over the entries of this view in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(|e| self.filter.matches(e))
    }

    /// Number of entries in this view.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Materializes this view.
    pub fn collect(&self) -> Vec<Entry> {
        self.iter().cloned().collect()
    }

    /// Picks one entry of this view uniformly at random.
    #[cfg(feature = "random")]
    pub fn random_entry<G: rand::Rng + ?Sized>(&self, rng: &mut G) -> Option<&Entry> {
        use rand::seq::IteratorRandom;

        self.iter().choose(rng)
    }
}

impl From<Vec<Entry>> for History {
    fn from(entries: Vec<Entry>) -> Self {
        Self::from_entries(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
2023/12/31(Sun)
23:50\tAlice\tAlmost there
2024/01/01(Mon)
00:01\tBob\tHappy new year!
09:30\tAlice\t\"Breakfast?
Pancakes maybe\"
2024/02/14(Wed)
19:00\tCarol\tDinner at seven
";

    fn history() -> History {
        History::parse_str(SAMPLE)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_columns_follow_input_order() {
        let h = history();
        assert_eq!(h.len(), 4);
        assert_eq!(h.speakers(), vec!["Alice", "Bob", "Alice", "Carol"]);
        assert_eq!(h.messages()[2], "Breakfast?\nPancakes maybe");
        assert_eq!(h.timestamps()[0], date(2023, 12, 31).and_hms_opt(23, 50, 0).unwrap());
    }

    #[test]
    fn test_columns_ignore_filters() {
        let h = history().where_speaker("Carol");
        assert_eq!(h.count(), 1);
        assert_eq!(h.speakers().len(), 4);
    }

    #[test]
    fn test_where_year_and_between() {
        assert_eq!(history().where_year(2024).count(), 3);
        assert_eq!(history().where_year_between(2020, 2023).count(), 1);
    }

    #[test]
    fn test_where_month_and_day() {
        assert_eq!(history().where_month(2).count(), 1);
        assert_eq!(history().where_month_between(1, 2).count(), 3);
        assert_eq!(history().where_day(1).count(), 2);
        assert_eq!(history().where_day_between(14, 31).count(), 2);
    }

    #[test]
    fn test_where_date_between_inclusive() {
        let h = history().where_date_between(date(2023, 12, 31), date(2024, 1, 1));
        assert_eq!(h.count(), 3);
        assert_eq!(history().where_date(date(2024, 2, 14)).count(), 1);
    }

    #[test]
    fn test_where_time_between() {
        let lo = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        let hi = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        let found = history().where_time_between(lo, hi).collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].speaker, "Bob");
    }

    #[test]
    fn test_where_contains_and_message() {
        assert_eq!(history().where_contains("Pancakes").count(), 1);
        assert_eq!(history().where_contains("?").count(), 1);
        assert_eq!(history().where_message("Dinner at seven").count(), 1);
        assert_eq!(history().where_message("Dinner").count(), 0);
    }

    #[test]
    fn test_where_matches() {
        let h = history().where_matches(r"(?i)^happy").unwrap();
        assert_eq!(h.collect()[0].speaker, "Bob");

        let err = history().where_matches("[").unwrap_err();
        assert!(err.is_invalid_pattern());
    }

    #[test]
    fn test_chained_queries_share_table() {
        let base = history();
        let view = base.where_year(2024).where_speaker("Alice");
        assert_eq!(view.count(), 1);
        assert_eq!(view.filter().predicates().len(), 2);
        assert!(Arc::ptr_eq(&base.entries, &view.entries));
        assert!(!base.filter().is_active());
    }

    #[test]
    fn test_with_filter_ands_predicates() {
        let filter = FilterConfig::new().with_year(2024).with_contains("new year");
        let view = history().where_speaker("Bob").with_filter(&filter);
        assert_eq!(view.filter().predicates().len(), 3);
        assert_eq!(view.count(), 1);
    }

    #[test]
    fn test_from_reader() {
        let h = History::from_reader(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(h.collect(), history().collect());
    }

    #[test]
    fn test_from_lines() {
        let h = History::from_lines(SAMPLE.split_inclusive('\n'));
        assert_eq!(h.len(), 4);
    }

    #[test]
    fn test_empty_history() {
        let h = History::default();
        assert!(h.is_empty());
        assert!(h.collect().is_empty());
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_random_entry_respects_filter() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(7);
        let h = history().where_speaker("Alice");
        for _ in 0..10 {
            assert_eq!(h.random_entry(&mut rng).unwrap().speaker, "Alice");
        }
        assert!(history().where_year(1999).random_entry(&mut rng).is_none());
    }
}
