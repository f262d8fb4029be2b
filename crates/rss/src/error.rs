// ABOUTME: Error types for document-level parse, write, and validation failures.
// ABOUTME: Provides RssError enum with Xml, NotRss, Write, and Invalid variants.

use std::fmt;
use thiserror::Error;

/// Errors surfaced at the document boundary.
///
/// The codec layer itself is total: malformed scalars coerce to defaults and
/// unrecognized input is dropped. Only malformed XML, a non-feed root, writer
/// failures, and opt-in strict validation produce errors.
#[derive(Debug, Error)]
pub enum RssError {
    /// The input is not well-formed XML.
    #[error("failed to parse XML: {0}")]
    Xml(String),

    /// The XML is well-formed but has no `rss`/`channel` root.
    #[error("not an RSS document: {0}")]
    NotRss(String),

    /// Serializing the object graph failed.
    #[error("failed to write XML: {0}")]
    Write(String),

    /// Strict-mode validation rejected the document.
    #[error("invalid feed: {0}")]
    Invalid(String),
}

impl RssError {
    /// Creates an Xml error from an underlying quick-xml error.
    pub fn xml(err: impl fmt::Display) -> Self {
        RssError::Xml(err.to_string())
    }

    /// Creates a Write error from an underlying writer error.
    pub fn write(err: impl fmt::Display) -> Self {
        RssError::Write(err.to_string())
    }

    /// Creates an Invalid error with a custom message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        RssError::Invalid(msg.into())
    }
}
