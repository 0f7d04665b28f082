//! Rule system for overriding how node kinds render.

mod rule;

pub use rule::{Filter, ReplacementFn, Rule};

use indexmap::IndexMap;

use crate::ast::Node;
use crate::options::ChatOptions;

/// Collection of rendering overrides.
///
/// Custom rules shadow the built-in dialect rendering for the nodes they
/// match; remove filters drop matching subtrees from the output entirely.
/// Nodes nothing matches render through the built-in per-kind rules.
pub struct Rules {
    /// Custom rules added by the user (checked in insertion order)
    custom_rules: IndexMap<String, Rule>,
    /// Remove rules (drop the subtree)
    remove_rules: Vec<Filter>,
}

impl Rules {
    /// Create an empty Rules instance
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            remove_rules: Vec::new(),
        }
    }

    /// Add a custom rule
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Add a remove filter
    pub fn remove(&mut self, filter: Filter) {
        self.remove_rules.push(filter);
    }

    /// Find the custom rule for a node, if any
    pub fn for_node<'a>(&'a self, node: &Node, options: &ChatOptions) -> Option<&'a Rule> {
        self.custom_rules
            .values()
            .find(|rule| rule.filter.matches(node, options))
    }

    /// Check if a node should be removed
    pub fn should_remove(&self, node: &Node, options: &ChatOptions) -> bool {
        // A custom rule takes precedence over removal
        if self.for_node(node, options).is_some() {
            return false;
        }

        self.remove_rules
            .iter()
            .any(|filter| filter.matches(node, options))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
