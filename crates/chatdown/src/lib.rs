//! # chatdown
//!
//! Render Markdown into messaging-safe markup and split it into
//! message-sized chunks.
//!
//! Messaging transports accept only a small inline tag subset (`b`, `i`,
//! `s`, `code`, `pre`, `a href`, `blockquote`) and cap message length, so
//! arbitrary Markdown has to be re-emitted in that dialect and re-segmented
//! without breaking tag pairs.
//!
//! ## Design
//!
//! The renderer walks a typed document tree rather than the raw source.
//! Parsing is feature-gated (`gfm`, enabled by default): with it,
//! [`ChatdownService::render`] accepts Markdown strings; without it, the
//! service renders hand-built [`Node`] trees, which keeps the dialect rules
//! testable with no parser in the loop.
//!
//! Rendering never fails. Source that cannot be parsed comes back escaped as
//! a single plain-text document, and node kinds the dialect cannot express
//! degrade (images become links, tables become preformatted text, raw HTML
//! becomes escaped literal text).
//!
//! ## Example (Markdown string)
//!
//! ```rust
//! use chatdown::ChatdownService;
//!
//! let service = ChatdownService::new();
//! let markup = service.render("# Hello\n\nSome **bold** text.");
//! assert_eq!(markup, "Hello\n\nSome <b>bold</b> text.");
//! ```
//!
//! ## Example (tree-based)
//!
//! ```rust
//! use chatdown::{ChatdownService, Node};
//!
//! let service = ChatdownService::new();
//! let tree = Node::Paragraph(vec![Node::Text("Hello World".to_string())]);
//! assert_eq!(service.render_tree(&tree), "Hello World");
//! ```

#[cfg(feature = "gfm")]
mod convert;
mod service;

#[cfg(feature = "gfm")]
pub use convert::parse;
pub use service::ChatdownService;

pub use chatdown_core::{
    escape, render, render_with_rules, split_message, ChatOptions, Filter, HeadingStyle, Node,
    NodeKind, Rule, Rules, DEFAULT_LIMIT,
};

/// Error type for chatdown operations
#[derive(Debug, thiserror::Error)]
pub enum ChatdownError {
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ChatdownError>;
