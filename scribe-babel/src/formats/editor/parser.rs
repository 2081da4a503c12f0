//! Editor parsing (editor tree → canonical tree import)
//!
//! A recursive walk that maps each editor node onto its canonical variant
//! and appends the result to the parent's children in order. Children of an
//! element recurse into the first pre-built child of the produced node when
//! one exists, which is how a list item redirects its content into the
//! synthetic paragraph it always owns; every other element attaches its
//! children directly.

use crate::dom::nodes::*;
use crate::error::FormatError;
use crate::formats::editor::nodes::{EditorDocument, EditorNode, ElementNode, TextRun};

/// Parse an editor JSON document into a canonical document tree
pub fn parse_from_editor(source: &str) -> Result<Node, FormatError> {
    let doc: EditorDocument = serde_json::from_str(source)
        .map_err(|e| FormatError::ParseError(format!("invalid editor document: {e}")))?;
    map_document(&doc)
}

/// Map a decoded editor document onto a canonical document tree
pub fn map_document(doc: &EditorDocument) -> Result<Node, FormatError> {
    let mut root = Node::Document(Document {
        xmlns: XMLNS.to_string(),
        nodes: Vec::new(),
    });
    map_children(&doc.nodes, &mut root)?;
    Ok(root)
}

fn map_children(children: &[EditorNode], parent: &mut Node) -> Result<(), FormatError> {
    for child in children {
        let mapped = match child {
            EditorNode::Text(run) => compose_marks(run),
            EditorNode::Block(el) | EditorNode::Inline(el) => {
                let mut node = element_to_node(el)?;
                map_element_children(el, &mut node)?;
                node
            }
        };

        if let Node::List(_) = parent {
            if !matches!(mapped, Node::Item(_)) {
                return Err(FormatError::ParseError(format!(
                    "list may only contain items, found {}",
                    mapped.class_tag()
                )));
            }
        }
        match parent.child_nodes_mut() {
            Some(nodes) => nodes.push(mapped),
            None => {
                return Err(FormatError::ParseError(format!(
                    "node {} cannot contain children",
                    parent.class_tag()
                )))
            }
        }
    }
    Ok(())
}

/// Recurse into the first existing child of the produced node when there is
/// one, otherwise into the node itself. Leaf nodes ignore editor children.
fn map_element_children(el: &ElementNode, node: &mut Node) -> Result<(), FormatError> {
    if el.nodes.is_empty() {
        return Ok(());
    }
    let has_inner = node.child_nodes().is_some_and(|nodes| !nodes.is_empty());
    if has_inner {
        if let Some(inner) = node.child_nodes_mut().and_then(|nodes| nodes.first_mut()) {
            return map_children(&el.nodes, inner);
        }
    }
    if node.child_nodes().is_some() {
        map_children(&el.nodes, node)?;
    }
    Ok(())
}

/// Builds the empty canonical node for an editor element.
fn element_to_node(el: &ElementNode) -> Result<Node, FormatError> {
    let data = &el.data;
    let node = match el.kind.as_str() {
        "paragraph" => Node::Paragraph(Paragraph { nodes: Vec::new() }),
        "heading_one" => heading("1"),
        "heading_two" => heading("2"),
        "heading_three" => heading("3"),
        "heading_four" => heading("4"),
        "heading_five" => heading("5"),
        "heading_six" => heading("6"),
        "quote" => Node::BlockQuote(BlockQuote { nodes: Vec::new() }),
        "ol_list" => list("ordered", el),
        "ul_list" => list("bullet", el),
        // A list item always wraps its content in a paragraph, even when
        // the editor node is empty: items contain block content.
        "list_item" => Node::Item(Item {
            nodes: vec![Node::Paragraph(Paragraph { nodes: Vec::new() })],
        }),
        "link" => Node::Link(Link {
            destination: require(&data.href, "link", "href")?,
            title: String::new(),
            nodes: Vec::new(),
        }),
        "horizontal_rule" => Node::ThematicBreak,
        "code_block" => Node::CodeBlock(CodeBlock {
            info: None,
            tag: None,
            text: el.text.clone().unwrap_or_default(),
        }),
        "html_block" => Node::HtmlBlock(HtmlBlock {
            tag: None,
            text: el.text.clone().unwrap_or_default(),
        }),
        "html_inline" => Node::HtmlInline(HtmlInline {
            tag: None,
            text: el.text.clone().unwrap_or_default(),
        }),
        "clause" => Node::Clause(Clause {
            clauseid: require(&data.clauseid, "clause", "clauseid")?,
            src: require(&data.src, "clause", "src")?,
            clause_text: require(&data.clause_text, "clause", "clauseText")?,
            nodes: Vec::new(),
        }),
        "variable" => Node::Variable(Variable {
            id: require(&data.id, "variable", "id")?,
            value: require(&data.value, "variable", "value")?,
            nodes: Vec::new(),
        }),
        "computed" => Node::ComputedVariable(ComputedVariable {
            value: require(&data.value, "computed", "value")?,
            nodes: Vec::new(),
        }),
        other => return Err(FormatError::UnhandledNode(other.to_string())),
    };
    Ok(node)
}

fn heading(level: &str) -> Node {
    Node::Heading(Heading {
        level: level.to_string(),
        nodes: Vec::new(),
    })
}

fn list(kind: &str, el: &ElementNode) -> Node {
    Node::List(List {
        kind: kind.to_string(),
        delimiter: el.data.delimiter.clone(),
        start: el.data.start.clone(),
        tight: el.data.tight.clone(),
        nodes: Vec::new(),
    })
}

fn require(value: &Option<String>, kind: &str, field: &str) -> Result<String, FormatError> {
    value
        .clone()
        .ok_or_else(|| FormatError::ParseError(format!("{kind} node missing data.{field}")))
}

/// Builds the inline node for a text run, folding its marks into wrappers.
///
/// A code mark wins outright: code spans are never wrapped in emphasis.
/// Otherwise bold wraps the text in Strong and italic wraps the result in
/// Emph, so a run with both marks always nests Emph outside Strong.
fn compose_marks(run: &TextRun) -> Node {
    let has_mark = |kind: &str| run.marks.iter().any(|m| m.kind == kind);

    if has_mark("code") {
        return Node::Code(Code {
            text: run.text.clone(),
        });
    }

    let mut node = Node::Text(Text {
        text: run.text.clone(),
    });
    if has_mark("bold") {
        node = Node::Strong(Strong { nodes: vec![node] });
    }
    if has_mark("italic") {
        node = Node::Emph(Emph { nodes: vec![node] });
    }
    node
}
