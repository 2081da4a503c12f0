//! XML parsing (XML → canonical tree import)
//!
//! Pipeline: XML string → roxmltree document → markup events → canonical
//! tree. The element walk is the markup event source of record: tag names
//! and attributes pass through untouched and the stream-to-tree builder
//! owns all structural interpretation.

use crate::common::stream_to_tree::events_to_tree;
use crate::common::ConvertOptions;
use crate::dom::events::MarkupEvent;
use crate::dom::nodes::Node;
use crate::error::FormatError;

/// Parse an XML document into a canonical document tree
pub fn parse_from_xml(source: &str, options: &ConvertOptions) -> Result<Node, FormatError> {
    let doc = roxmltree::Document::parse(source)
        .map_err(|e| FormatError::ParseError(format!("xml parsing error: {e}")))?;

    let mut events = Vec::new();
    collect_events(doc.root_element(), &mut events);

    events_to_tree(&events, options).map_err(Into::into)
}

fn collect_events(node: roxmltree::Node, events: &mut Vec<MarkupEvent>) {
    let name = node.tag_name().name().to_string();
    let attributes = node
        .attributes()
        .map(|a| (a.name().to_string(), a.value().to_string()))
        .collect();
    events.push(MarkupEvent::Open {
        name: name.clone(),
        attributes,
    });

    for child in node.children() {
        if child.is_element() {
            collect_events(child, events);
        } else if child.is_text() {
            if let Some(text) = child.text() {
                // Indentation between elements is whitespace with newlines;
                // whitespace without a newline is real character data.
                if !(text.trim().is_empty() && text.contains('\n')) {
                    events.push(MarkupEvent::Text(text.to_string()));
                }
            }
        }
    }

    events.push(MarkupEvent::Close { name });
}
