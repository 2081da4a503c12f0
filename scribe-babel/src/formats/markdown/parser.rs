//! Markdown parsing (Markdown → canonical tree import)
//!
//! Pipeline: Markdown string → Comrak AST → markup events → canonical tree.
//! Comrak owns all text-level parsing; this module only translates its AST
//! into the open/text/close event vocabulary the generic builder consumes.

use crate::common::stream_to_tree::events_to_tree;
use crate::common::ConvertOptions;
use crate::dom::events::MarkupEvent;
use crate::dom::nodes::{Node, XMLNS};
use crate::error::FormatError;
use comrak::nodes::{AstNode, ListDelimType, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parse a Markdown string into a canonical document tree
pub fn parse_from_markdown(source: &str, options: &ConvertOptions) -> Result<Node, FormatError> {
    let arena = Arena::new();
    let md_options = ComrakOptions::default();
    let root = parse_document(&arena, source, &md_options);

    let mut events = Vec::new();
    collect_events(root, &mut events);

    events_to_tree(&events, options)
        .map_err(|e| FormatError::ParseError(format!("failed to build tree from markdown: {e}")))
}

/// Recursively collect markup events from a Comrak AST node
fn collect_events<'a>(node: &'a AstNode<'a>, events: &mut Vec<MarkupEvent>) {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Document => {
            events.push(MarkupEvent::open_with("document", &[("xmlns", XMLNS)]));
            collect_children(node, events);
            events.push(MarkupEvent::close("document"));
        }

        NodeValue::Paragraph => wrap("paragraph", node, events),

        NodeValue::Heading(heading) => {
            let level = heading.level.to_string();
            events.push(MarkupEvent::open_with(
                "heading",
                &[("level", level.as_str())],
            ));
            collect_children(node, events);
            events.push(MarkupEvent::close("heading"));
        }

        NodeValue::BlockQuote => wrap("block_quote", node, events),

        NodeValue::List(list) => {
            let ordered = matches!(list.list_type, ListType::Ordered);
            let mut attributes: Vec<(String, String)> = vec![(
                "type".to_string(),
                if ordered { "ordered" } else { "bullet" }.to_string(),
            )];
            if ordered {
                let delimiter = match list.delimiter {
                    ListDelimType::Period => "period",
                    ListDelimType::Paren => "paren",
                };
                attributes.push(("delimiter".to_string(), delimiter.to_string()));
                attributes.push(("start".to_string(), list.start.to_string()));
            }
            attributes.push(("tight".to_string(), list.tight.to_string()));

            events.push(MarkupEvent::Open {
                name: "list".to_string(),
                attributes,
            });
            collect_children(node, events);
            events.push(MarkupEvent::close("list"));
        }

        NodeValue::Item(_) => wrap("item", node, events),

        NodeValue::CodeBlock(code_block) => {
            if code_block.info.is_empty() {
                events.push(MarkupEvent::open("code_block"));
            } else {
                events.push(MarkupEvent::open_with(
                    "code_block",
                    &[("info", code_block.info.as_str())],
                ));
            }
            events.push(MarkupEvent::text(code_block.literal.clone()));
            events.push(MarkupEvent::close("code_block"));
        }

        NodeValue::HtmlBlock(html) => {
            events.push(MarkupEvent::open("html_block"));
            events.push(MarkupEvent::text(html.literal.clone()));
            events.push(MarkupEvent::close("html_block"));
        }

        NodeValue::ThematicBreak => {
            events.push(MarkupEvent::open("thematic_break"));
            events.push(MarkupEvent::close("thematic_break"));
        }

        NodeValue::Text(text) => text_element(text, events),

        // Breaks have no canonical representation; they import as plain
        // whitespace inside the surrounding paragraph.
        NodeValue::SoftBreak | NodeValue::LineBreak => text_element(" ", events),

        NodeValue::Code(code) => {
            events.push(MarkupEvent::open("code"));
            events.push(MarkupEvent::text(code.literal.clone()));
            events.push(MarkupEvent::close("code"));
        }

        NodeValue::HtmlInline(html) => {
            events.push(MarkupEvent::open("html_inline"));
            events.push(MarkupEvent::text(html.clone()));
            events.push(MarkupEvent::close("html_inline"));
        }

        NodeValue::Emph => wrap("emph", node, events),
        NodeValue::Strong => wrap("strong", node, events),

        // Images degrade to links: the canonical model has no image variant
        // and dropping the node would lose document content.
        NodeValue::Link(link) | NodeValue::Image(link) => {
            events.push(MarkupEvent::open_with(
                "link",
                &[
                    ("destination", link.url.as_str()),
                    ("title", link.title.as_str()),
                ],
            ));
            collect_children(node, events);
            events.push(MarkupEvent::close("link"));
        }

        // Anything else (front matter, extension constructs) has no
        // counterpart; keep walking children so nested content still lands.
        _ => collect_children(node, events),
    }
}

fn collect_children<'a>(node: &'a AstNode<'a>, events: &mut Vec<MarkupEvent>) {
    for child in node.children() {
        collect_events(child, events);
    }
}

fn wrap<'a>(name: &str, node: &'a AstNode<'a>, events: &mut Vec<MarkupEvent>) {
    events.push(MarkupEvent::open(name));
    collect_children(node, events);
    events.push(MarkupEvent::close(name));
}

fn text_element(content: &str, events: &mut Vec<MarkupEvent>) {
    events.push(MarkupEvent::open("text"));
    events.push(MarkupEvent::text(content));
    events.push(MarkupEvent::close("text"));
}
