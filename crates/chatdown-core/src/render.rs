//! Dialect rendering
//!
//! Converts a document tree into the restricted markup dialect accepted by
//! messaging transports: a small inline tag subset (`b`, `i`, `s`, `code`,
//! `pre`, `a href`, `blockquote`) over HTML-escaped text. Every opening tag
//! emitted here is closed within the same node render, so output is always
//! tag-balanced.

use crate::ast::Node;
use crate::options::{ChatOptions, HeadingStyle};
use crate::rules::Rules;

/// Render a node tree to a dialect string
pub fn render(node: &Node, options: &ChatOptions) -> String {
    render_with_rules(node, options, &Rules::new())
}

/// Render a node tree with custom rendering overrides.
///
/// Overrides apply at every depth of the tree: a rule for an inline kind
/// fires inside paragraphs, list items and block quotes alike.
pub fn render_with_rules(node: &Node, options: &ChatOptions, rules: &Rules) -> String {
    let mut output = String::with_capacity(1024);
    render_node(node, options, rules, &mut output);

    // Post-process: collapse runs of blank lines and trim
    collapse_and_trim(&mut output);
    output
}

/// Escape the four characters the dialect reserves.
///
/// Single quotes are left alone; the dialect only requires `& < > "`.
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }

    result
}

fn render_node(node: &Node, options: &ChatOptions, rules: &Rules, out: &mut String) {
    if rules.should_remove(node, options) {
        return;
    }

    if let Some(rule) = rules.for_node(node, options) {
        let mut content = String::new();
        render_children(node, options, rules, &mut content);
        out.push_str(&rule.replace(node, &content, options));
        return;
    }

    match node {
        Node::Document(children) => {
            for child in children {
                if !child.is_blank() {
                    render_node(child, options, rules, out);
                }
            }
        }

        Node::Text(text) | Node::Escape(text) => out.push_str(&escape(text)),

        Node::Strong(children) => render_wrapped(children, "b", options, rules, out),
        Node::Emphasis(children) => render_wrapped(children, "i", options, rules, out),
        Node::Strikethrough(children) => render_wrapped(children, "s", options, rules, out),

        Node::CodeSpan(code) => {
            // No markdown interpretation inside code
            out.push_str("<code>");
            out.push_str(&escape(code));
            out.push_str("</code>");
        }

        Node::CodeBlock { code, .. } => {
            out.push_str("<pre>");
            out.push_str(&escape(code.trim_end()));
            out.push_str("</pre>\n\n");
        }

        Node::Link { href, content } => {
            out.push_str("<a href=\"");
            out.push_str(&escape(href));
            out.push_str("\">");
            render_nodes(content, options, rules, out);
            out.push_str("</a>");
        }

        Node::Image { href, alt } => {
            // Not embeddable inline; degrade to a link over the same target
            let body = if alt.trim().is_empty() {
                &options.image_placeholder
            } else {
                alt
            };
            out.push_str("<a href=\"");
            out.push_str(&escape(href));
            out.push_str("\">");
            out.push_str(&escape(body));
            out.push_str("</a>");
        }

        Node::Heading { content, .. } => render_heading(content, options, rules, out),

        Node::Paragraph(children) => {
            let start_len = out.len();
            render_nodes(children, options, rules, out);
            if out[start_len..].trim().is_empty() {
                out.truncate(start_len);
            } else {
                out.push_str("\n\n");
            }
        }

        Node::List {
            ordered,
            start,
            items,
        } => render_list(*ordered, *start, items, options, rules, out),

        Node::ListItem { content, .. } => {
            // Markers are the list's job
            let start_len = out.len();
            render_nodes(content, options, rules, out);
            let trimmed = out[start_len..].trim().to_string();
            out.truncate(start_len);
            out.push_str(&trimmed);
        }

        Node::Checkbox { checked } => {
            out.push(checkbox_marker(*checked, options));
            out.push(' ');
        }

        Node::Blockquote(children) => {
            let start_len = out.len();
            for child in children {
                if !child.is_blank() {
                    render_node(child, options, rules, out);
                }
            }
            let inner = out[start_len..].trim().to_string();
            out.truncate(start_len);
            if !inner.is_empty() {
                out.push_str("<blockquote>");
                out.push_str(&inner);
                out.push_str("</blockquote>\n\n");
            }
        }

        Node::HorizontalRule => {
            out.push_str("\n\n");
            out.push_str(&options.hr);
            out.push_str("\n\n");
        }

        Node::LineBreak => out.push('\n'),

        Node::Table { header, rows } => render_table(header.as_deref(), rows, out),

        // Structure is resolved by the table arm; standalone rows and cells
        // pass their content through
        Node::TableRow(children) | Node::TableCell(children) => {
            render_nodes(children, options, rules, out)
        }

        Node::RawHtml(html) => out.push_str(&escape(html)),
    }
}

fn render_nodes(nodes: &[Node], options: &ChatOptions, rules: &Rules, out: &mut String) {
    for node in nodes {
        render_node(node, options, rules, out);
    }
}

/// Render the children a custom rule receives as its content argument
fn render_children(node: &Node, options: &ChatOptions, rules: &Rules, out: &mut String) {
    match node {
        Node::Document(children)
        | Node::Strong(children)
        | Node::Emphasis(children)
        | Node::Strikethrough(children)
        | Node::Paragraph(children)
        | Node::Blockquote(children)
        | Node::TableRow(children)
        | Node::TableCell(children) => render_nodes(children, options, rules, out),
        Node::Link { content, .. }
        | Node::Heading { content, .. }
        | Node::ListItem { content, .. } => render_nodes(content, options, rules, out),
        Node::List { items, .. } => render_nodes(items, options, rules, out),
        Node::Table { header, rows } => {
            if let Some(header) = header {
                render_node(header, options, rules, out);
            }
            render_nodes(rows, options, rules, out);
        }
        Node::Text(_)
        | Node::Escape(_)
        | Node::CodeSpan(_)
        | Node::CodeBlock { .. }
        | Node::Image { .. }
        | Node::Checkbox { .. }
        | Node::HorizontalRule
        | Node::LineBreak
        | Node::RawHtml(_) => {}
    }
}

/// Wrap inline children in a paired tag, skipping blank content
fn render_wrapped(
    children: &[Node],
    tag: &str,
    options: &ChatOptions,
    rules: &Rules,
    out: &mut String,
) {
    let start_len = out.len();
    render_nodes(children, options, rules, out);

    if out[start_len..].trim().is_empty() {
        out.truncate(start_len);
    } else {
        let inner = out[start_len..].to_string();
        out.truncate(start_len);
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(&inner);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

fn render_heading(content: &[Node], options: &ChatOptions, rules: &Rules, out: &mut String) {
    let start_len = out.len();
    render_nodes(content, options, rules, out);

    if out[start_len..].trim().is_empty() {
        out.truncate(start_len);
        return;
    }

    if options.heading_style == HeadingStyle::Bold {
        let text = out[start_len..].to_string();
        out.truncate(start_len);
        out.push_str("<b>");
        out.push_str(&text);
        out.push_str("</b>");
    }
    out.push_str("\n\n");
}

fn render_list(
    ordered: bool,
    start: u32,
    items: &[Node],
    options: &ChatOptions,
    rules: &Rules,
    out: &mut String,
) {
    let mut lines = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        if rules.should_remove(item, options) {
            continue;
        }

        let mut body = String::new();
        render_node(item, options, rules, &mut body);

        let mut line = String::new();
        match item {
            // Task items replace the regular marker with a checkbox glyph
            Node::ListItem {
                checked: Some(checked),
                ..
            } => {
                line.push(checkbox_marker(*checked, options));
                line.push(' ');
            }
            _ if ordered => {
                line.push_str(&(start + i as u32).to_string());
                line.push_str(". ");
            }
            _ => {
                line.push(options.bullet_marker);
                line.push(' ');
            }
        }
        line.push_str(body.trim());
        lines.push(line);
    }

    if lines.is_empty() {
        return;
    }

    out.push_str(&lines.join("\n"));
    out.push_str("\n\n");
}

fn checkbox_marker(checked: bool, options: &ChatOptions) -> char {
    if checked {
        options.checked_marker
    } else {
        options.unchecked_marker
    }
}

fn render_table(header: Option<&Node>, rows: &[Node], out: &mut String) {
    let mut lines: Vec<String> = Vec::with_capacity(rows.len() + 2);

    if let Some(header) = header {
        let cells = row_cells(header);
        let columns = cells.len();
        lines.push(cells.join(" | "));
        lines.push(vec!["---"; columns].join(" | "));
    }
    for row in rows {
        lines.push(row_cells(row).join(" | "));
    }

    if lines.is_empty() {
        return;
    }

    // The dialect has no table tags; the assembled block ships preformatted
    out.push_str("<pre>");
    out.push_str(&escape(&lines.join("\n")));
    out.push_str("</pre>\n\n");
}

/// Cell text for one row: nested markup stripped, internal newlines
/// collapsed to single spaces
fn row_cells(row: &Node) -> Vec<String> {
    match row {
        Node::TableRow(cells) => cells
            .iter()
            .map(|cell| collapse_newlines(&cell.plain_text()))
            .collect(),
        other => vec![collapse_newlines(&other.plain_text())],
    }
}

fn collapse_newlines(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_newline = false;

    for c in text.chars() {
        if c == '\n' {
            if !prev_was_newline {
                result.push(' ');
                prev_was_newline = true;
            }
        } else {
            result.push(c);
            prev_was_newline = false;
        }
    }

    result.trim().to_string()
}

/// Collapse runs of three or more newlines down to exactly two, then trim
/// surrounding whitespace, in place
fn collapse_and_trim(s: &mut String) {
    let bytes = s.as_bytes();
    let mut result = Vec::with_capacity(bytes.len());
    let mut newline_count = 0;

    for &b in bytes {
        if b == b'\n' {
            newline_count += 1;
            if newline_count <= 2 {
                result.push(b);
            }
        } else {
            newline_count = 0;
            result.push(b);
        }
    }

    let collapsed = String::from_utf8(result).unwrap_or_default();
    *s = collapsed.trim().to_string();
}
