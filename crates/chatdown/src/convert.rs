//! Convert an mdast tree to the chatdown document tree
//!
//! The parser hands back the full GFM node vocabulary; anything the dialect
//! has no rendering for degrades here rather than erroring, so rendering
//! stays total over any tree the parser can produce.

use markdown::mdast;

use chatdown_core::Node;

use crate::{ChatdownError, Result};

/// Parse Markdown source into a document tree.
///
/// Tables, strikethrough and task lists follow GFM.
pub fn parse(source: &str) -> Result<Node> {
    let tree = markdown::to_mdast(source, &markdown::ParseOptions::gfm())
        .map_err(|err| ChatdownError::Parse(err.to_string()))?;
    Ok(convert(&tree))
}

/// Convert an mdast node to a chatdown [`Node`]
pub fn convert(node: &mdast::Node) -> Node {
    convert_node(node).unwrap_or_else(|| Node::Document(Vec::new()))
}

fn convert_node(node: &mdast::Node) -> Option<Node> {
    match node {
        mdast::Node::Root(root) => Some(Node::Document(convert_blocks(&root.children))),

        mdast::Node::Text(text) => Some(Node::Text(text.value.clone())),

        mdast::Node::Strong(strong) => Some(Node::Strong(convert_children(&strong.children))),
        mdast::Node::Emphasis(emphasis) => {
            Some(Node::Emphasis(convert_children(&emphasis.children)))
        }
        mdast::Node::Delete(delete) => {
            Some(Node::Strikethrough(convert_children(&delete.children)))
        }

        mdast::Node::InlineCode(code) => Some(Node::CodeSpan(code.value.clone())),
        mdast::Node::Code(code) => Some(Node::CodeBlock {
            language: code.lang.clone(),
            code: code.value.clone(),
        }),

        // Link and image titles are dropped: the dialect cannot express them
        mdast::Node::Link(link) => Some(Node::Link {
            href: link.url.clone(),
            content: convert_children(&link.children),
        }),
        mdast::Node::Image(image) => Some(Node::Image {
            href: image.url.clone(),
            alt: image.alt.clone(),
        }),

        mdast::Node::Heading(heading) => Some(Node::Heading {
            level: heading.depth,
            content: convert_children(&heading.children),
        }),
        mdast::Node::Paragraph(paragraph) => {
            Some(Node::Paragraph(convert_children(&paragraph.children)))
        }

        mdast::Node::List(list) => Some(Node::List {
            ordered: list.ordered,
            start: list.start.unwrap_or(1),
            items: convert_children(&list.children),
        }),
        mdast::Node::ListItem(item) => Some(Node::ListItem {
            checked: item.checked,
            content: convert_children(&item.children),
        }),

        mdast::Node::Blockquote(quote) => {
            Some(Node::Blockquote(convert_children(&quote.children)))
        }

        mdast::Node::ThematicBreak(_) => Some(Node::HorizontalRule),
        mdast::Node::Break(_) => Some(Node::LineBreak),

        mdast::Node::Html(html) => Some(Node::RawHtml(html.value.clone())),

        mdast::Node::Table(table) => {
            // GFM: the first row is the header
            let mut rows = convert_children(&table.children);
            let header = if rows.is_empty() {
                None
            } else {
                Some(Box::new(rows.remove(0)))
            };
            Some(Node::Table { header, rows })
        }
        mdast::Node::TableRow(row) => Some(Node::TableRow(convert_children(&row.children))),
        mdast::Node::TableCell(cell) => Some(Node::TableCell(convert_children(&cell.children))),

        // Math and frontmatter degrade to code
        mdast::Node::InlineMath(math) => Some(Node::CodeSpan(math.value.clone())),
        mdast::Node::Math(math) => Some(Node::CodeBlock {
            language: None,
            code: math.value.clone(),
        }),
        mdast::Node::Yaml(yaml) => Some(Node::CodeBlock {
            language: None,
            code: yaml.value.clone(),
        }),
        mdast::Node::Toml(toml) => Some(Node::CodeBlock {
            language: None,
            code: toml.value.clone(),
        }),

        // Unresolved references degrade to their visible text
        mdast::Node::LinkReference(link) => {
            Some(Node::Document(convert_children(&link.children)))
        }
        mdast::Node::ImageReference(image) => Some(Node::Text(image.alt.clone())),

        // Definitions have no output of their own
        mdast::Node::Definition(_)
        | mdast::Node::FootnoteDefinition(_)
        | mdast::Node::FootnoteReference(_) => None,

        // MDX constructs never appear with GFM options; degrade to literal
        // text if a caller enables them anyway
        mdast::Node::MdxFlowExpression(expr) => Some(Node::Text(expr.value.clone())),
        mdast::Node::MdxTextExpression(expr) => Some(Node::Text(expr.value.clone())),
        mdast::Node::MdxjsEsm(esm) => Some(Node::Text(esm.value.clone())),

        // Anything else: splice children, else emit nothing
        other => other
            .children()
            .map(|children| Node::Document(convert_children(children))),
    }
}

fn convert_children(children: &[mdast::Node]) -> Vec<Node> {
    children.iter().filter_map(convert_node).collect()
}

/// Convert block-level children; bare raw HTML gets its own paragraph so it
/// separates from neighbouring blocks
fn convert_blocks(children: &[mdast::Node]) -> Vec<Node> {
    children
        .iter()
        .filter_map(convert_node)
        .map(|node| match node {
            html @ Node::RawHtml(_) => Node::Paragraph(vec![html]),
            other => other,
        })
        .collect()
}
