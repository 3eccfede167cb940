//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - Output format options
//! - [`LayoutArg`] - Header layout options
//!
//! Both enums convert into their library counterparts, so the parsing and
//! writing code never depends on clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::core::FilterConfig;
use crate::error::HistoryError;
use crate::parsing::HeaderLayout;

/// Default output path; its extension follows `--format` unless `-o` is given.
pub const DEFAULT_OUTPUT: &str = "line_history.csv";

/// Convert a LINE "export chat history" text file into CSV, JSON or JSONL.
#[derive(Parser, Debug, Clone)]
#[command(name = "line-history")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    line-history chat.txt
    line-history chat.txt -o history.jsonl -f jsonl
    line-history chat.txt --year 2024 --speaker Alice
    line-history chat.txt --after 2024-01-01 --time-from 22:00 --time-to 23:59
    line-history chat.txt --contains lunch --random")]
pub struct Args {
    /// Path to the exported chat history
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Field order of message header lines
    #[arg(long, value_enum, default_value = "auto")]
    pub layout: LayoutArg,

    /// Keep entries from this year
    #[arg(long)]
    pub year: Option<i32>,

    /// Keep entries from this month (1-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Keep entries from this day of month (1-31)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=31))]
    pub day: Option<u32>,

    /// Keep entries on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep entries on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep entries sent at or after this time of day (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub time_from: Option<String>,

    /// Keep entries sent at or before this time of day (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub time_to: Option<String>,

    /// Keep entries from this speaker (exact match)
    #[arg(long, value_name = "NAME")]
    pub speaker: Option<String>,

    /// Keep entries whose message contains this text
    #[arg(long, value_name = "TEXT")]
    pub contains: Option<String>,

    /// Print one random matching entry instead of writing a file
    #[arg(long)]
    pub random: bool,

    /// Log parser activity to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the filter described by the filtering flags.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidDate`] or [`HistoryError::InvalidTime`]
    /// for malformed `--after`, `--before`, `--time-from` or `--time-to`.
    pub fn filter_config(&self) -> Result<FilterConfig, HistoryError> {
        let mut config = FilterConfig::new();

        if let Some(year) = self.year {
            config = config.with_year(year);
        }
        if let Some(month) = self.month {
            config = config.with_month(month);
        }
        if let Some(day) = self.day {
            config = config.with_day(day);
        }
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if self.time_from.is_some() || self.time_to.is_some() {
            let from = self.time_from.as_deref().unwrap_or("00:00");
            let to = self.time_to.as_deref().unwrap_or("23:59");
            config = config.with_time_between_str(from, to)?;
        }
        if let Some(ref speaker) = self.speaker {
            config = config.with_speaker(speaker.clone());
        }
        if let Some(ref needle) = self.contains {
            config = config.with_contains(needle.clone());
        }

        Ok(config)
    }

    /// Returns the output path, with the extension following `--format` when
    /// `-o` was left at its default.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        let format: crate::format::OutputFormat = self.format.into();
        format!("line_history.{}", format.extension())
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma separated values (default)
    #[default]
    Csv,

    /// JSON array of entries
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Header layout options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum LayoutArg {
    /// Accept both field orders (default)
    #[default]
    Auto,

    /// `HH:MM<TAB>speaker<TAB>message`
    #[value(alias = "time")]
    TimeFirst,

    /// `speaker<TAB>HH:MM<TAB>message`
    #[value(alias = "speaker")]
    SpeakerFirst,
}

impl From<LayoutArg> for HeaderLayout {
    fn from(layout: LayoutArg) -> HeaderLayout {
        match layout {
            LayoutArg::Auto => HeaderLayout::Auto,
            LayoutArg::TimeFirst => HeaderLayout::TimeFirst,
            LayoutArg::SpeakerFirst => HeaderLayout::SpeakerFirst,
        }
    }
}
