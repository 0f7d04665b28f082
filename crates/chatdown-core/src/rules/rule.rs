//! Rule and Filter types for overriding dialect rendering.

use crate::ast::{Node, NodeKind};
use crate::options::ChatOptions;

/// Type alias for replacement functions.
///
/// A replacement receives the node, its already-rendered child content, and
/// the active options, and returns the markup to emit in place of the
/// built-in rendering.
pub type ReplacementFn = Box<dyn Fn(&Node, &str, &ChatOptions) -> String + Send + Sync>;

/// A filter determines which nodes a rule applies to
pub enum Filter {
    /// Match a single node kind
    Kind(NodeKind),
    /// Match any of multiple node kinds
    Kinds(Vec<NodeKind>),
    /// Match using a predicate function
    Predicate(Box<dyn Fn(&Node, &ChatOptions) -> bool + Send + Sync>),
}

impl Filter {
    /// Create a filter for a single kind
    pub fn kind(kind: NodeKind) -> Self {
        Filter::Kind(kind)
    }

    /// Create a filter for multiple kinds
    pub fn kinds(kinds: &[NodeKind]) -> Self {
        Filter::Kinds(kinds.to_vec())
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Node, &ChatOptions) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter matches a node
    pub fn matches(&self, node: &Node, options: &ChatOptions) -> bool {
        match self {
            Filter::Kind(kind) => node.kind() == *kind,
            Filter::Kinds(kinds) => kinds.contains(&node.kind()),
            Filter::Predicate(f) => f(node, options),
        }
    }
}

/// A rule defines how to render a matched node
pub struct Rule {
    /// Filter to determine which nodes this rule applies to
    pub filter: Filter,
    /// Replacement function that generates dialect markup
    pub replacement: ReplacementFn,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(filter: Filter, replacement: F) -> Self
    where
        F: Fn(&Node, &str, &ChatOptions) -> String + Send + Sync + 'static,
    {
        Self {
            filter,
            replacement: Box::new(replacement),
        }
    }

    /// Create a rule that matches a single kind
    pub fn for_kind<F>(kind: NodeKind, replacement: F) -> Self
    where
        F: Fn(&Node, &str, &ChatOptions) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::kind(kind), replacement)
    }

    /// Create a rule that matches multiple kinds
    pub fn for_kinds<F>(kinds: &[NodeKind], replacement: F) -> Self
    where
        F: Fn(&Node, &str, &ChatOptions) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::kinds(kinds), replacement)
    }

    /// Apply this rule's replacement
    pub fn replace(&self, node: &Node, content: &str, options: &ChatOptions) -> String {
        (self.replacement)(node, content, options)
    }
}
