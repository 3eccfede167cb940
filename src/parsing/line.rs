//! Line classification for LINE chat exports.
//!
//! A LINE export is a sequence of date lines, each followed by the messages
//! sent that day:
//!
//! ```text
//! 2024/01/01(Mon)
//! 09:00	Alice	Hello
//! 09:05	Bob	"Two
//! lines"
//! ```
//!
//! Every physical line is one of three kinds: a date anchor, a chat header
//! (time, speaker and the start of a message), or anything else, which is a
//! continuation of the message above it. The functions here are stateless;
//! deciding what a line *means* in context is the assembler's job.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `YYYY/MM/DD(<weekday>)`. The weekday token is never interpreted.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})/([0-9]{2})/([0-9]{2})\([^()]+\)$").expect("date pattern is valid")
});

/// `HH:MM<TAB>speaker<TAB>message`
static TIME_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2})\t[^\t]+\t.+").expect("time-first pattern is valid")
});

/// `speaker<TAB>HH:MM<TAB>message`
static SPEAKER_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\t]+\t([0-9]{2}):([0-9]{2})\t.+").expect("speaker-first pattern is valid")
});

/// Field order of chat header lines.
///
/// LINE writes `HH:MM<TAB>speaker<TAB>message`, but some exports and
/// converted files put the speaker first. [`HeaderLayout::Auto`] accepts
/// both, preferring the time-first reading when a line fits either.
///
/// `Auto` decides per line. Inside a time-first export, a message line
/// shaped like `name<TAB>HH:MM<TAB>text` is therefore read as a new
/// speaker-first header and splits the message it belongs to. Pin
/// [`HeaderLayout::TimeFirst`] when the layout is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderLayout {
    /// Try [`TimeFirst`](HeaderLayout::TimeFirst), then
    /// [`SpeakerFirst`](HeaderLayout::SpeakerFirst).
    #[default]
    Auto,
    /// `HH:MM<TAB>speaker<TAB>message`
    TimeFirst,
    /// `speaker<TAB>HH:MM<TAB>message`
    SpeakerFirst,
}

impl HeaderLayout {
    /// Returns all layout names accepted by [`FromStr`].
    pub fn all_names() -> &'static [&'static str] {
        &["auto", "time-first", "speaker-first"]
    }
}

impl std::fmt::Display for HeaderLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderLayout::Auto => write!(f, "auto"),
            HeaderLayout::TimeFirst => write!(f, "time-first"),
            HeaderLayout::SpeakerFirst => write!(f, "speaker-first"),
        }
    }
}

impl FromStr for HeaderLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(HeaderLayout::Auto),
            "time-first" | "time" => Ok(HeaderLayout::TimeFirst),
            "speaker-first" | "speaker" => Ok(HeaderLayout::SpeakerFirst),
            _ => Err(format!(
                "Unknown layout: '{}'. Expected one of: {}",
                s,
                HeaderLayout::all_names().join(", ")
            )),
        }
    }
}

/// Fields extracted from a chat header line.
///
/// `message` borrows the raw remainder of the line after the second tab,
/// further tabs and the line terminator included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatHeader<'a> {
    pub time: NaiveTime,
    pub speaker: &'a str,
    pub message: &'a str,
}

/// What a single physical line looks like, without any parser context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A `YYYY/MM/DD(...)` date line.
    DateAnchor(NaiveDate),
    /// A message header line.
    ChatHeader(ChatHeader<'a>),
    /// Anything else.
    Continuation,
}

/// Removes one trailing `\n` or `\r\n`, if present.
pub fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line)
}

/// Parses a date anchor line.
///
/// Returns `None` if the line does not have the `YYYY/MM/DD(...)` shape or
/// the numbers do not name a real calendar day.
pub fn match_date(line: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(strip_terminator(line))?;

    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a chat header line using the given field layout.
pub fn match_chat(line: &str, layout: HeaderLayout) -> Option<ChatHeader<'_>> {
    match layout {
        HeaderLayout::TimeFirst => match_time_first(line),
        HeaderLayout::SpeakerFirst => match_speaker_first(line),
        HeaderLayout::Auto => match_time_first(line).or_else(|| match_speaker_first(line)),
    }
}

/// Classifies a line. Date anchors take precedence over chat headers.
pub fn classify(line: &str, layout: HeaderLayout) -> LineKind<'_> {
    if let Some(date) = match_date(line) {
        return LineKind::DateAnchor(date);
    }
    match match_chat(line, layout) {
        Some(header) => LineKind::ChatHeader(header),
        None => LineKind::Continuation,
    }
}

fn match_time_first(line: &str) -> Option<ChatHeader<'_>> {
    let caps = TIME_FIRST_RE.captures(strip_terminator(line))?;
    let time = parse_time(&caps[1], &caps[2])?;

    let (_, rest) = line.split_once('\t')?;
    let (speaker, message) = rest.split_once('\t')?;
    Some(ChatHeader {
        time,
        speaker,
        message,
    })
}

fn match_speaker_first(line: &str) -> Option<ChatHeader<'_>> {
    let caps = SPEAKER_FIRST_RE.captures(strip_terminator(line))?;
    let time = parse_time(&caps[1], &caps[2])?;

    let (speaker, rest) = line.split_once('\t')?;
    let (_, message) = rest.split_once('\t')?;
    Some(ChatHeader {
        time,
        speaker,
        message,
    })
}

fn parse_time(hour: &str, minute: &str) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}
