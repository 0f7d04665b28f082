//! ChatdownService - the main entry point for Markdown to chunk conversion.

use chatdown_core::{render_with_rules, ChatOptions, Filter, Node, Rule, Rules};

/// The main service for converting Markdown into message-ready markup.
///
/// Holds the dialect options and any rendering overrides; each call is a
/// pure function of its input, so one service can be shared across callers.
pub struct ChatdownService {
    options: ChatOptions,
    rules: Rules,
}

impl ChatdownService {
    /// Create a new ChatdownService with default options
    pub fn new() -> Self {
        Self {
            options: ChatOptions::default(),
            rules: Rules::new(),
        }
    }

    /// Create a ChatdownService with custom options
    pub fn with_options(options: ChatOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Render Markdown source to dialect markup.
    ///
    /// Never fails: if the source cannot be parsed, the whole input is
    /// escaped and returned as a single plain-text document.
    #[cfg(feature = "gfm")]
    pub fn render(&self, source: &str) -> String {
        match crate::convert::parse(source) {
            Ok(tree) => self.render_tree(&tree),
            Err(_) => chatdown_core::escape(source).trim().to_string(),
        }
    }

    /// Render an already-built document tree
    pub fn render_tree(&self, node: &Node) -> String {
        render_with_rules(node, &self.options, &self.rules)
    }

    /// Render Markdown source and split it into chunks of at most `limit`
    /// characters
    #[cfg(feature = "gfm")]
    pub fn render_chunked(&self, source: &str, limit: usize) -> Vec<String> {
        chatdown_core::split_message(&self.render(source), limit)
    }

    /// Add a custom rendering rule
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Drop nodes matching the filter from the output
    pub fn remove(&mut self, filter: Filter) -> &mut Self {
        self.rules.remove(filter);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Escape dialect-reserved characters in a string
    pub fn escape(&self, text: &str) -> String {
        chatdown_core::escape(text)
    }

    /// Get the current options
    pub fn options(&self) -> &ChatOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ChatOptions {
        &mut self.options
    }
}

impl Default for ChatdownService {
    fn default() -> Self {
        Self::new()
    }
}
