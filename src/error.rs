//! Error types for the strict variants of the lenient operations.
//!
//! Nothing on the lenient path returns these; they exist so callers that
//! want to report broken markup (rather than silently recover) can do so.

use thiserror::Error;

/// Problems detected in tag text or source ranges
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// The raw tag text was empty
    #[error("tag text is empty")]
    EmptyTag,
    /// Nothing was left after stripping the tag delimiters
    #[error("tag `{0}` has no name")]
    MissingName(String),
    /// The name contains a byte that only shows up when tokens got spliced
    #[error("tag name `{name}` contains invalid byte {byte:?} at offset {offset}")]
    InvalidNameByte { name: String, byte: char, offset: usize },
    /// A range whose end precedes its start
    #[error("inverted range {start}..{end}")]
    InvertedRange { start: usize, end: usize },
}
