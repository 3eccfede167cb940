//! Parser configuration.
//!
//! # Example
//!
//! ```rust
//! use line_history::config::{HeaderLayout, ParserConfig};
//! use line_history::parser::HistoryParser;
//!
//! let config = ParserConfig::new()
//!     .with_header_layout(HeaderLayout::TimeFirst)
//!     .with_buffer_size(128 * 1024);
//!
//! let parser = HistoryParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

pub use crate::parsing::HeaderLayout;

/// Configuration for LINE export parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Buffer size for file reading (default: 64KB)
    pub buffer_size: usize,

    /// Field order of message header lines (default: [`HeaderLayout::Auto`])
    pub header_layout: HeaderLayout,

    /// Deliver `\r\n` terminated lines as `\n` terminated (default: true)
    pub normalize_newlines: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024, // 64KB
            header_layout: HeaderLayout::Auto,
            normalize_newlines: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration tuned for very large exports.
    pub fn streaming() -> Self {
        Self {
            buffer_size: 256 * 1024, // 256KB for streaming
            ..Self::default()
        }
    }

    /// Sets the buffer size for file reading.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Sets the header layout.
    #[must_use]
    pub fn with_header_layout(mut self, layout: HeaderLayout) -> Self {
        self.header_layout = layout;
        self
    }

    /// Enables or disables CRLF normalization.
    #[must_use]
    pub fn with_normalize_newlines(mut self, enabled: bool) -> Self {
        self.normalize_newlines = enabled;
        self
    }
}
