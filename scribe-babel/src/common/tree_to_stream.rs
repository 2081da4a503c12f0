//! Converts a nested canonical tree into a flat markup event stream.
//!
//! Traversing the tree in pre-order lets us emit a sequence of open, text
//! and close events that can later be reassembled into the original tree.
//! Each node produces its own open/close markers with the same attribute
//! encoding the stream-to-tree builder hoists back into variant fields, so
//! the two walks are exact inverses for trees without derived tag metadata.

use crate::dom::events::MarkupEvent;
use crate::dom::nodes::Node;

/// Converts a canonical tree to a flat vector of markup events.
pub fn tree_to_events(root: &Node) -> Vec<MarkupEvent> {
    let mut events = Vec::new();
    walk_node(root, &mut events);
    events
}

fn walk_node(node: &Node, events: &mut Vec<MarkupEvent>) {
    events.push(MarkupEvent::Open {
        name: node.tag_name().to_string(),
        attributes: node_attributes(node),
    });

    match node {
        Node::Text(t) => push_text(&t.text, events),
        Node::Code(c) => push_text(&c.text, events),
        Node::CodeBlock(cb) => push_text(&cb.text, events),
        Node::HtmlBlock(hb) => push_text(&hb.text, events),
        Node::HtmlInline(hi) => push_text(&hi.text, events),
        other => {
            for child in other.child_nodes().unwrap_or(&[]) {
                walk_node(child, events);
            }
        }
    }

    events.push(MarkupEvent::Close {
        name: node.tag_name().to_string(),
    });
}

fn push_text(text: &str, events: &mut Vec<MarkupEvent>) {
    if !text.is_empty() {
        events.push(MarkupEvent::Text(text.to_string()));
    }
}

/// The attribute encoding for a node's structural fields, matching what the
/// stream-to-tree builder expects on the corresponding open event.
fn node_attributes(node: &Node) -> Vec<(String, String)> {
    let mut attrs: Vec<(String, String)> = Vec::new();
    let mut push = |name: &str, value: &str| attrs.push((name.to_string(), value.to_string()));

    match node {
        Node::Document(d) => {
            if !d.xmlns.is_empty() {
                push("xmlns", &d.xmlns);
            }
        }
        Node::Heading(h) => push("level", &h.level),
        Node::List(l) => {
            push("type", &l.kind);
            if let Some(delimiter) = &l.delimiter {
                push("delimiter", delimiter);
            }
            if let Some(start) = &l.start {
                push("start", start);
            }
            if let Some(tight) = &l.tight {
                push("tight", tight);
            }
        }
        Node::CodeBlock(cb) => {
            if let Some(info) = &cb.info {
                push("info", info);
            }
        }
        Node::Link(link) => {
            push("destination", &link.destination);
            if !link.title.is_empty() {
                push("title", &link.title);
            }
        }
        Node::Clause(c) => {
            push("clauseid", &c.clauseid);
            push("src", &c.src);
            push("clauseText", &c.clause_text);
        }
        Node::Variable(v) => {
            push("id", &v.id);
            push("value", &v.value);
        }
        Node::ComputedVariable(v) => push("value", &v.value),
        _ => {}
    }

    attrs
}
