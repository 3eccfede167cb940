//! The entry assembler: a line-at-a-time state machine.
//!
//! The assembler owns all parse state for one run: the current anchor date,
//! the entry being built, and whether that entry has picked up continuation
//! lines. Feed it lines in order with [`Assembler::push_line`] and call
//! [`Assembler::finish`] once input is exhausted.

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::Entry;
use crate::parsing::{ChatHeader, HeaderLayout, LineKind, classify, finalize_message};

/// Observable phase of an [`Assembler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerState {
    /// No date line accepted yet. Every line is discarded.
    NoAnchor,
    /// A date is known but no message is open.
    AnchoredIdle,
    /// A message is open and collecting continuation lines.
    AnchoredBuilding,
}

/// An entry under construction.
#[derive(Debug)]
struct PendingEntry {
    entry: Entry,
    multiline: bool,
}

impl PendingEntry {
    fn start(date: NaiveDate, header: ChatHeader<'_>) -> Self {
        Self {
            entry: Entry::new(date.and_time(header.time), header.speaker, header.message),
            multiline: false,
        }
    }

    fn append(&mut self, line: &str) {
        self.entry.message.push_str(line);
        self.multiline = true;
    }

    fn finalize(self) -> Entry {
        let Self {
            mut entry,
            multiline,
        } = self;
        entry.message = finalize_message(entry.message, multiline);
        trace!(speaker = %entry.speaker, timestamp = %entry.timestamp, "entry finalized");
        entry
    }
}

/// Turns an ordered sequence of export lines into finalized entries.
///
/// Each line passed to [`push_line`](Assembler::push_line) should still carry
/// its terminator; continuation lines are appended verbatim.
///
/// # Example
///
/// ```
/// use line_history::streaming::Assembler;
///
/// let mut assembler = Assembler::default();
/// assert!(assembler.push_line("2024/01/01(Mon)\n").is_none());
/// assert!(assembler.push_line("09:00\tAlice\tHello\n").is_none());
///
/// let entry = assembler.push_line("09:05\tBob\tHi\n").unwrap();
/// assert_eq!(entry.message, "Hello");
///
/// let last = assembler.finish().unwrap();
/// assert_eq!(last.speaker, "Bob");
/// ```
#[derive(Debug, Default)]
pub struct Assembler {
    layout: HeaderLayout,
    anchor_date: Option<NaiveDate>,
    current: Option<PendingEntry>,
}

impl Assembler {
    /// Creates an assembler that recognizes headers in the given layout.
    pub fn new(layout: HeaderLayout) -> Self {
        Self {
            layout,
            anchor_date: None,
            current: None,
        }
    }

    /// Returns the date subsequent headers are combined with, if any.
    pub fn anchor_date(&self) -> Option<NaiveDate> {
        self.anchor_date
    }

    /// Returns the current phase.
    pub fn state(&self) -> AssemblerState {
        match (self.anchor_date, &self.current) {
            (None, _) => AssemblerState::NoAnchor,
            (Some(_), None) => AssemblerState::AnchoredIdle,
            (Some(_), Some(_)) => AssemblerState::AnchoredBuilding,
        }
    }

    /// Processes one line, returning the previous entry if this line closed it.
    pub fn push_line(&mut self, line: &str) -> Option<Entry> {
        let kind = classify(line, self.layout);

        if let LineKind::DateAnchor(date) = kind {
            if self.anchor_date.is_none_or(|anchor| date > anchor) {
                debug!(%date, "date anchor accepted");
                self.anchor_date = Some(date);
                return None;
            }
            // A date that does not move forward is not an anchor. It is
            // handled below like any other content line, so it usually ends
            // up appended to the open message.
            debug!(%date, anchor = ?self.anchor_date, "non-increasing date line treated as content");
        }

        let Some(anchor) = self.anchor_date else {
            trace!("line before first date anchor discarded");
            return None;
        };

        if let LineKind::ChatHeader(header) = kind {
            let finished = self.current.take().map(PendingEntry::finalize);
            self.current = Some(PendingEntry::start(anchor, header));
            return finished;
        }

        match self.current.as_mut() {
            Some(pending) => pending.append(line),
            None => trace!("continuation line without open entry discarded"),
        }
        None
    }

    /// Flushes the open entry at end of input.
    pub fn finish(&mut self) -> Option<Entry> {
        self.current.take().map(PendingEntry::finalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn run(lines: &[&str]) -> Vec<Entry> {
        let mut assembler = Assembler::default();
        let mut out: Vec<Entry> = lines
            .iter()
            .filter_map(|line| assembler.push_line(line))
            .collect();
        out.extend(assembler.finish());
        out
    }

    #[test]
    fn test_initial_state() {
        let assembler = Assembler::default();
        assert_eq!(assembler.state(), AssemblerState::NoAnchor);
        assert!(assembler.anchor_date().is_none());
    }

    #[test]
    fn test_state_transitions() {
        let mut assembler = Assembler::default();
        assembler.push_line("2024/01/01(Mon)\n");
        assert_eq!(assembler.state(), AssemblerState::AnchoredIdle);

        assembler.push_line("09:00\tAlice\tHello\n");
        assert_eq!(assembler.state(), AssemblerState::AnchoredBuilding);

        assert!(assembler.finish().is_some());
        assert_eq!(assembler.state(), AssemblerState::AnchoredIdle);
        assert!(assembler.finish().is_none());
    }

    #[test]
    fn test_two_entries() {
        let entries = run(&[
            "2024/01/01(Mon)\n",
            "09:00\tAlice\tHello\n",
            "09:05\tBob\tHi there\n",
        ]);
        assert_eq!(
            entries,
            vec![
                Entry::new(ts(2024, 1, 1, 9, 0), "Alice", "Hello"),
                Entry::new(ts(2024, 1, 1, 9, 5), "Bob", "Hi there"),
            ]
        );
    }

    #[test]
    fn test_multiline_entry() {
        let entries = run(&[
            "2024/01/02(Tue)\n",
            "10:00\tAlice\t\"Line1\n",
            "Line2\"\n",
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "Line1\nLine2");
        assert_eq!(entries[0].timestamp, ts(2024, 1, 2, 10, 0));
    }

    #[test]
    fn test_multiline_flag_resets_per_entry() {
        let entries = run(&[
            "2024/01/02(Tue)\n",
            "10:00\tAlice\t\"a\n",
            "b\"\n",
            "10:01\tBob\t\"single\"\n",
        ]);
        assert_eq!(entries[0].message, "a\nb");
        assert_eq!(entries[1].message, "\"single\"");
    }

    #[test]
    fn test_lines_before_anchor_discarded() {
        let entries = run(&[
            "[LINE] Chat history with Alice\n",
            "Saved on: 2024/01/05 12:00\n",
            "09:00\tAlice\tignored\n",
            "\n",
            "2024/01/01(Mon)\n",
            "09:00\tAlice\tkept\n",
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "kept");
    }

    #[test]
    fn test_no_anchor_means_no_entries() {
        assert!(run(&["09:00\tAlice\tHello\n", "more\n"]).is_empty());
    }

    #[test]
    fn test_orphan_continuation_discarded() {
        let mut assembler = Assembler::default();
        assembler.push_line("2024/01/01(Mon)\n");
        assert!(assembler.push_line("stray text\n").is_none());
        assert_eq!(assembler.state(), AssemblerState::AnchoredIdle);
        assert!(assembler.finish().is_none());
    }

    #[test]
    fn test_later_anchor_changes_date() {
        let entries = run(&[
            "2024/01/01(Mon)\n",
            "23:59\tAlice\tlate\n",
            "\n",
            "2024/01/02(Tue)\n",
            "00:01\tBob\tearly\n",
        ]);
        assert_eq!(entries[0].timestamp, ts(2024, 1, 1, 23, 59));
        assert_eq!(entries[1].timestamp, ts(2024, 1, 2, 0, 1));
    }

    #[test]
    fn test_blank_line_between_days_marks_multiline() {
        // The blank separator line is a continuation of the last message of
        // the day, so that message is stripped as if it were quoted.
        let entries = run(&[
            "2024/01/01(Mon)\n",
            "23:59\tAlice\tlate\n",
            "\n",
            "2024/01/02(Tue)\n",
        ]);
        // "late\n\n" -> "late\n" -> "ate"
        assert_eq!(entries[0].message, "ate");
    }

    #[test]
    fn test_non_increasing_anchor_becomes_continuation() {
        let entries = run(&[
            "2024/01/02(Tue)\n",
            "10:00\tAlice\tfirst\n",
            "2024/01/01(Mon)\n",
            "10:05\tBob\tsecond\n",
        ]);
        assert_eq!(entries.len(), 2);
        // "first\n2024/01/01(Mon)" with the boundary characters dropped
        assert_eq!(entries[0].message, "irst\n2024/01/01(Mon");
        assert_eq!(entries[1].timestamp, ts(2024, 1, 2, 10, 5));
    }

    #[test]
    fn test_equal_anchor_not_adopted() {
        let mut assembler = Assembler::default();
        assembler.push_line("2024/01/02(Tue)\n");
        assembler.push_line("2024/01/02(Tue)\n");
        assert_eq!(assembler.state(), AssemblerState::AnchoredIdle);
        assert_eq!(
            assembler.anchor_date(),
            NaiveDate::from_ymd_opt(2024, 1, 2)
        );
    }

    #[test]
    fn test_final_line_without_terminator() {
        let entries = run(&["2024/01/01(Mon)\n", "09:00\tAlice\tbye"]);
        assert_eq!(entries[0].message, "bye");
    }

    #[test]
    fn test_speaker_first_layout() {
        let mut assembler = Assembler::new(HeaderLayout::SpeakerFirst);
        assembler.push_line("2024/01/01(Mon)\n");
        assert!(assembler.push_line("09:00\tAlice\tHello\n").is_none());
        assert_eq!(assembler.state(), AssemblerState::AnchoredIdle);

        assembler.push_line("Alice\t09:00\tHello\n");
        let entry = assembler.finish().unwrap();
        assert_eq!(entry.speaker, "Alice");
        assert_eq!(entry.message, "Hello");
    }

    #[test]
    fn test_at_most_one_entry_per_line() {
        let mut assembler = Assembler::default();
        let lines = [
            "2024/01/01(Mon)\n",
            "09:00\tA\t1\n",
            "09:01\tB\t2\n",
            "09:02\tC\t3\n",
        ];
        let emitted: Vec<_> = lines.iter().map(|l| assembler.push_line(l)).collect();
        assert!(emitted[0].is_none());
        assert!(emitted[1].is_none());
        assert_eq!(emitted[2].as_ref().unwrap().speaker, "A");
        assert_eq!(emitted[3].as_ref().unwrap().speaker, "B");
        assert_eq!(assembler.finish().unwrap().speaker, "C");
    }
}
