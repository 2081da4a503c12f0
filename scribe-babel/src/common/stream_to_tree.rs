//! Converts a flat markup event stream into a nested canonical tree.
//!
//! # The High-Level Concept
//!
//! The core challenge is to reconstruct a tree structure from a linear
//! sequence of events. The algorithm uses a stack to keep track of the
//! current nesting level. The stack acts as a memory of "open" containers:
//! an `Open` event builds a node of the matching variant and pushes it,
//! making it the new "current" container; the matching `Close` event pops it
//! and attaches it to its parent, returning to the parent container.
//!
//! The document root is the one exception: its close event leaves it on the
//! stack, so that after the stream ends the root is still retrievable as the
//! final result.
//!
//! # The Algorithm
//!
//! 1. **Processing `Open` Events:**
//!    - Build a node of the variant named by the tag, hoisting tag
//!      attributes into the variant's fields (`level`, `destination`, ...)
//!    - Push it onto the stack as the new current container
//!
//! 2. **Processing `Text` Events:**
//!    - Append the content to the top node when its variant carries text
//!      (text, code, code blocks, raw HTML); otherwise the text is
//!      inter-element whitespace and is dropped
//!    - For raw HTML nodes and code blocks, run the HTML fragment inspector
//!      and attach tag metadata when it parses (and when enabled)
//!
//! 3. **Processing `Close` Events:**
//!    - Validate that the top of the stack matches the closing tag
//!    - Pop it and attach it to the new top, unless it is the document root
//!
//! 4. **Completion:**
//!    - Exactly one node (the root) must remain on the stack; it is the
//!      reconstructed tree
//!
//! The stack is used strictly LIFO and no recursion is involved, so the
//! builder's own call depth is independent of the markup nesting depth.

use crate::common::html_inspect;
use crate::common::ConvertOptions;
use crate::dom::classify::class_tag;
use crate::dom::events::MarkupEvent;
use crate::dom::nodes::*;
use thiserror::Error;

/// Error type for stream-to-tree conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Close or end-of-stream arrived with no frame to act on
    #[error("unexpected end event: {0}")]
    UnexpectedEnd(String),
    /// Mismatched open/close events
    #[error("mismatched events: expected {expected}, found {found}")]
    MismatchedEvents { expected: String, found: String },
    /// A child was attached to a node that cannot contain it
    #[error("node {parent} cannot contain {child}")]
    UnexpectedChild { parent: String, child: String },
    /// Open event for a tag with no variant in the canonical model
    #[error("unhandled node: {0}")]
    UnknownTag(String),
    /// Open event missing an attribute the variant requires
    #[error("tag '{tag}' is missing required attribute '{attribute}'")]
    MissingAttribute { tag: String, attribute: String },
    /// Stack not empty at end (unclosed containers)
    #[error("unclosed containers: {0} nodes remain on stack")]
    UnclosedContainers(usize),
}

impl From<ConversionError> for crate::error::FormatError {
    fn from(err: ConversionError) -> Self {
        crate::error::FormatError::ParseError(err.to_string())
    }
}

/// Converts a markup event stream into a canonical tree.
///
/// The stream yields `Result` items so that an error raised by the event
/// source propagates unchanged; the stream is abandoned at the first error.
pub fn stream_to_tree<I>(events: I, options: &ConvertOptions) -> Result<Node, ConversionError>
where
    I: IntoIterator<Item = Result<MarkupEvent, ConversionError>>,
{
    let mut stack: Vec<Node> = Vec::new();

    for event in events {
        match event? {
            MarkupEvent::Open { name, attributes } => {
                let node = open_node(&name, &attributes)?;
                stack.push(node);
            }
            MarkupEvent::Text(content) => {
                if let Some(top) = stack.last_mut() {
                    append_text(top, &content, options);
                }
            }
            MarkupEvent::Close { name } => {
                let top = stack.last().ok_or_else(|| {
                    ConversionError::UnexpectedEnd(format!("close '{name}' with empty stack"))
                })?;
                if top.tag_name() != name {
                    return Err(ConversionError::MismatchedEvents {
                        expected: class_tag(top.tag_name()),
                        found: class_tag(&name),
                    });
                }
                // The document root stays on the stack until the stream ends.
                if stack.len() > 1 {
                    let node = stack.pop().unwrap();
                    let parent = stack.last_mut().unwrap();
                    attach_child(parent, node)?;
                }
            }
        }
    }

    match stack.len() {
        0 => Err(ConversionError::UnexpectedEnd(
            "empty event stream".to_string(),
        )),
        1 => Ok(stack.pop().unwrap()),
        n => Err(ConversionError::UnclosedContainers(n - 1)),
    }
}

/// Converts a slice of markup events into a canonical tree.
pub fn events_to_tree(
    events: &[MarkupEvent],
    options: &ConvertOptions,
) -> Result<Node, ConversionError> {
    stream_to_tree(events.iter().cloned().map(Ok), options)
}

/// Builds an empty node of the variant named by `name`, hoisting the event's
/// attributes into the variant's fields.
fn open_node(name: &str, attributes: &[(String, String)]) -> Result<Node, ConversionError> {
    let attr = |key: &str| {
        attributes
            .iter()
            .find(|(n, _)| n == key)
            .map(|(_, v)| v.clone())
    };
    let required = |key: &str| {
        attr(key).ok_or_else(|| ConversionError::MissingAttribute {
            tag: name.to_string(),
            attribute: key.to_string(),
        })
    };

    let node = match name {
        "document" => Node::Document(Document {
            xmlns: attr("xmlns").unwrap_or_default(),
            nodes: Vec::new(),
        }),
        "paragraph" => Node::Paragraph(Paragraph { nodes: Vec::new() }),
        "heading" => Node::Heading(Heading {
            level: required("level")?,
            nodes: Vec::new(),
        }),
        "block_quote" => Node::BlockQuote(BlockQuote { nodes: Vec::new() }),
        "list" => Node::List(List {
            kind: required("type")?,
            delimiter: attr("delimiter"),
            start: attr("start"),
            tight: attr("tight"),
            nodes: Vec::new(),
        }),
        "item" => Node::Item(Item { nodes: Vec::new() }),
        "text" => Node::Text(Text {
            text: String::new(),
        }),
        "emph" => Node::Emph(Emph { nodes: Vec::new() }),
        "strong" => Node::Strong(Strong { nodes: Vec::new() }),
        "code" => Node::Code(Code {
            text: String::new(),
        }),
        "code_block" => Node::CodeBlock(CodeBlock {
            info: attr("info"),
            tag: None,
            text: String::new(),
        }),
        "html_block" => Node::HtmlBlock(HtmlBlock {
            tag: None,
            text: String::new(),
        }),
        "html_inline" => Node::HtmlInline(HtmlInline {
            tag: None,
            text: String::new(),
        }),
        "link" => Node::Link(Link {
            destination: attr("destination").unwrap_or_default(),
            title: attr("title").unwrap_or_default(),
            nodes: Vec::new(),
        }),
        "thematic_break" => Node::ThematicBreak,
        "clause" => Node::Clause(Clause {
            clauseid: attr("clauseid").unwrap_or_default(),
            src: attr("src").unwrap_or_default(),
            clause_text: attr("clauseText").unwrap_or_default(),
            nodes: Vec::new(),
        }),
        "variable" => Node::Variable(Variable {
            id: attr("id").unwrap_or_default(),
            value: attr("value").unwrap_or_default(),
            nodes: Vec::new(),
        }),
        "computed_variable" => Node::ComputedVariable(ComputedVariable {
            value: attr("value").unwrap_or_default(),
            nodes: Vec::new(),
        }),
        other => return Err(ConversionError::UnknownTag(class_tag(other))),
    };
    Ok(node)
}

/// Appends text content to a text-bearing node, attaching tag metadata for
/// raw HTML and code block kinds when extraction is enabled.
fn append_text(node: &mut Node, content: &str, options: &ConvertOptions) {
    match node {
        Node::Text(t) => t.text.push_str(content),
        Node::Code(c) => c.text.push_str(content),
        Node::CodeBlock(cb) => {
            cb.text.push_str(content);
            if options.tag_info {
                if let Some(info) = &cb.info {
                    cb.tag = html_inspect::inspect(info);
                }
            }
        }
        Node::HtmlBlock(hb) => {
            hb.text.push_str(content);
            if options.tag_info {
                hb.tag = html_inspect::inspect(&hb.text);
            }
        }
        Node::HtmlInline(hi) => {
            hi.text.push_str(content);
            if options.tag_info {
                hi.tag = html_inspect::inspect(&hi.text);
            }
        }
        // Anything else is inter-element whitespace from the event source.
        _ => {}
    }
}

/// Attaches a completed child to its parent container.
fn attach_child(parent: &mut Node, child: Node) -> Result<(), ConversionError> {
    if let Node::List(list) = parent {
        if matches!(child, Node::Item(_)) {
            list.nodes.push(child);
            return Ok(());
        }
        return Err(ConversionError::MismatchedEvents {
            expected: class_tag("item"),
            found: child.class_tag().to_string(),
        });
    }
    let child_tag = child.class_tag();
    match parent.child_nodes_mut() {
        Some(nodes) => {
            nodes.push(child);
            Ok(())
        }
        None => Err(ConversionError::UnexpectedChild {
            parent: parent.class_tag().to_string(),
            child: child_tag.to_string(),
        }),
    }
}
