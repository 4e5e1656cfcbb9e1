//! # pageup
//!
//! Convert Markdown documents to HTML.
//!
//! The conversion runs in three stages: the document is split into
//! blank-line separated blocks and each block classified by structure,
//! text-bearing lines are parsed into typed inline spans, and every
//! block is compiled into an [`HtmlNode`] fragment under a single root
//! container.
//!
//! ```text
//! Markdown ──▶ blocks + BlockType ──▶ TextSpans ──▶ HtmlNode ──▶ HTML
//! ```
//!
//! The transformation is a pure function of the input string: no I/O,
//! no shared state, so callers may convert many documents in parallel.
//!
//! ## Example
//!
//! ```rust
//! use pageup::markdown_to_html;
//!
//! let html = markdown_to_html("# Title\n\nBody text").unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><p>Body text</p></div>");
//! ```

mod block;
mod compile;
mod inline;
mod span;
mod title;

pub use block::{classify, split_blocks, BlockType};
pub use compile::{compile_document, markdown_to_html};
pub use inline::parse_inline;
pub use pageup_core::HtmlNode;
pub use span::{SpanKind, TextSpan};
pub use title::extract_title;

/// Error type for Markdown conversion.
///
/// Malformed block-level markers (a quote losing its `>`, a list with a
/// numbering gap) are not errors; those blocks degrade to paragraphs.
/// Only inline delimiter imbalance rejects a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// An inline delimiter was opened but never closed
    #[error("unterminated `{delimiter}` delimiter in {text:?}")]
    MalformedInline {
        delimiter: &'static str,
        text: String,
    },

    /// The document has no level-one heading to use as a title
    #[error("no h1 title found")]
    NoTitle,

    /// A node tree was rendered in an invalid state
    #[error(transparent)]
    Structural(#[from] pageup_core::StructuralError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
