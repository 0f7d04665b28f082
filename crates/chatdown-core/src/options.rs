//! Configuration options for dialect rendering

/// Heading style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingStyle {
    /// Emit heading text as plain text followed by a blank line
    #[default]
    Plain,
    /// Wrap heading text in bold tags
    Bold,
}

/// Options for dialect rendering
#[derive(Debug, Clone)]
pub struct ChatOptions {
    /// Heading style (plain or bold)
    pub heading_style: HeadingStyle,

    /// Horizontal rule string
    pub hr: String,

    /// Bullet list marker
    pub bullet_marker: char,

    /// Marker for checked task items
    pub checked_marker: char,

    /// Marker for unchecked task items
    pub unchecked_marker: char,

    /// Fallback body text for images without alt text
    pub image_placeholder: String,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            heading_style: HeadingStyle::Plain,
            hr: "─".repeat(10),
            bullet_marker: '•',
            checked_marker: '☑',
            unchecked_marker: '☐',
            image_placeholder: "Image".to_string(),
        }
    }
}
