//! pageup-core - HTML node tree and rendering
//!
//! This crate provides the core data structures and rendering for HTML
//! documents. It is used by `pageup` (the Markdown compiler) and by
//! `pageup-cli` (the static site generator).
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──compile──▶ ┌───────────────┐
//!                              │               │
//!                              │ HtmlNode tree │ ──▶ HTML String
//!                              │               │
//!                              └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use pageup_core::HtmlNode;
//!
//! let tree = HtmlNode::parent(
//!     "div",
//!     vec![
//!         HtmlNode::parent("h1", vec![HtmlNode::raw_text("Hello World")]),
//!         HtmlNode::parent(
//!             "p",
//!             vec![
//!                 HtmlNode::raw_text("This is "),
//!                 HtmlNode::leaf("b", "bold"),
//!                 HtmlNode::raw_text(" text."),
//!             ],
//!         ),
//!     ],
//! );
//!
//! let html = tree.to_html().unwrap();
//! assert_eq!(
//!     html,
//!     "<div><h1>Hello World</h1><p>This is <b>bold</b> text.</p></div>"
//! );
//! ```

mod node;
mod render;

pub use node::{Attributes, HtmlNode};

/// Error type for HTML rendering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    /// A parent node was rendered without a tag. Unreachable through the
    /// builder functions, which require a non-empty tag; kept as a
    /// defensive check for trees assembled by hand.
    #[error("parent node has no tag")]
    MissingTag,
}

pub type Result<T> = std::result::Result<T, StructuralError>;
