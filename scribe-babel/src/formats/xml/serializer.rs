//! XML serialization (canonical tree → XML export)
//!
//! The tree is flattened into the markup event stream and the events are
//! printed directly. A one-event lookahead picks the compact forms: an open
//! immediately followed by its close prints as a self-closing element, and
//! open/text/close prints on a single line.

use crate::common::tree_to_stream::tree_to_events;
use crate::dom::events::MarkupEvent;
use crate::dom::nodes::Node;
use crate::error::FormatError;

/// Serialize a canonical document tree to XML
pub fn serialize_to_xml(doc: &Node) -> Result<String, FormatError> {
    let events = tree_to_events(doc);
    let mut out = String::new();
    let mut depth = 0usize;
    let mut index = 0;

    while index < events.len() {
        match &events[index] {
            MarkupEvent::Open { name, attributes } => {
                new_line(&mut out, depth);
                out.push('<');
                out.push_str(name);
                for (attr_name, value) in attributes {
                    out.push(' ');
                    out.push_str(attr_name);
                    out.push_str("=\"");
                    out.push_str(&escape_attribute(value));
                    out.push('"');
                }
                match (events.get(index + 1), events.get(index + 2)) {
                    (Some(MarkupEvent::Close { .. }), _) => {
                        out.push_str("/>");
                        index += 2;
                    }
                    (Some(MarkupEvent::Text(text)), Some(MarkupEvent::Close { .. })) => {
                        out.push('>');
                        out.push_str(&escape_text(text));
                        out.push_str("</");
                        out.push_str(name);
                        out.push('>');
                        index += 3;
                    }
                    _ => {
                        out.push('>');
                        depth += 1;
                        index += 1;
                    }
                }
            }
            MarkupEvent::Text(text) => {
                new_line(&mut out, depth);
                out.push_str(&escape_text(text));
                index += 1;
            }
            MarkupEvent::Close { name } => {
                depth = depth.saturating_sub(1);
                new_line(&mut out, depth);
                out.push_str("</");
                out.push_str(name);
                out.push('>');
                index += 1;
            }
        }
    }

    out.push('\n');
    Ok(out)
}

fn new_line(out: &mut String, depth: usize) {
    if !out.is_empty() {
        out.push('\n');
    }
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
