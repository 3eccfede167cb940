//! Stateless parsing helpers shared by the in-memory and streaming parsers.
//!
//! - [`line`] classifies single physical lines
//! - [`finalize`] normalizes a completed message body

pub mod finalize;
pub mod line;

pub use finalize::finalize_message;
pub use line::{
    ChatHeader, HeaderLayout, LineKind, classify, match_chat, match_date, strip_terminator,
};
