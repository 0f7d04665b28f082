//! chatdown-core - document tree, dialect rendering and chunking
//!
//! This crate provides the data structures and rendering for converting a
//! parsed Markdown document into the restricted markup dialect accepted by
//! messaging transports, plus the chunker that splits rendered output into
//! message-sized pieces.
//!
//! # Architecture
//!
//! ```text
//! document tree ──render──▶ dialect markup ──split_message──▶ chunks
//! ```
//!
//! The tree is parser-agnostic: the `chatdown` crate fills it from Markdown
//! source, and tests build it by hand.
//!
//! # Example
//!
//! ```rust
//! use chatdown_core::{render, ChatOptions, Node};
//!
//! let tree = Node::Document(vec![
//!     Node::Heading {
//!         level: 1,
//!         content: vec![Node::Text("Hello World".to_string())],
//!     },
//!     Node::Paragraph(vec![
//!         Node::Text("This is ".to_string()),
//!         Node::Strong(vec![Node::Text("bold".to_string())]),
//!         Node::Text(" text.".to_string()),
//!     ]),
//! ]);
//!
//! let markup = render(&tree, &ChatOptions::default());
//! assert_eq!(markup, "Hello World\n\nThis is <b>bold</b> text.");
//! ```

mod ast;
mod chunk;
mod options;
mod render;
mod rules;

pub use ast::{Node, NodeKind};
pub use chunk::{split_message, DEFAULT_LIMIT};
pub use options::{ChatOptions, HeadingStyle};
pub use render::{escape, render, render_with_rules};
pub use rules::{Filter, ReplacementFn, Rule, Rules};
