//! Core data structures for the canonical document tree.
//!
//! Every node carries a `$class` tag in its JSON form, produced by the
//! internally tagged serde representation. The JSON tree is the interchange
//! format handed to schema validation; deserializing it back through serde
//! is the validation step, and a type mismatch is the validation error.

use serde::{Deserialize, Serialize};

/// Namespace declaration carried by document roots.
pub const XMLNS: &str = "http://commonmark.org/xml/1.0";

/// A universal, semantic representation of a document node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$class")]
pub enum Node {
    #[serde(rename = "org.scribe.dom.Document")]
    Document(Document),
    #[serde(rename = "org.scribe.dom.Paragraph")]
    Paragraph(Paragraph),
    #[serde(rename = "org.scribe.dom.Heading")]
    Heading(Heading),
    #[serde(rename = "org.scribe.dom.BlockQuote")]
    BlockQuote(BlockQuote),
    #[serde(rename = "org.scribe.dom.List")]
    List(List),
    #[serde(rename = "org.scribe.dom.Item")]
    Item(Item),
    #[serde(rename = "org.scribe.dom.Text")]
    Text(Text),
    #[serde(rename = "org.scribe.dom.Emph")]
    Emph(Emph),
    #[serde(rename = "org.scribe.dom.Strong")]
    Strong(Strong),
    #[serde(rename = "org.scribe.dom.Code")]
    Code(Code),
    #[serde(rename = "org.scribe.dom.CodeBlock")]
    CodeBlock(CodeBlock),
    #[serde(rename = "org.scribe.dom.HtmlBlock")]
    HtmlBlock(HtmlBlock),
    #[serde(rename = "org.scribe.dom.HtmlInline")]
    HtmlInline(HtmlInline),
    #[serde(rename = "org.scribe.dom.Link")]
    Link(Link),
    #[serde(rename = "org.scribe.dom.ThematicBreak")]
    ThematicBreak,
    #[serde(rename = "org.scribe.dom.Clause")]
    Clause(Clause),
    #[serde(rename = "org.scribe.dom.Variable")]
    Variable(Variable),
    #[serde(rename = "org.scribe.dom.ComputedVariable")]
    ComputedVariable(ComputedVariable),
}

/// Represents the root of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub xmlns: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// Represents a paragraph of inline content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// Represents a heading. The level is carried as a string, "1" through "6".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// Represents a block quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockQuote {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// Represents a list. Children are always `Item` nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// "ordered" or "bullet".
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tight: Option<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// Represents an item in a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// Represents a run of plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    #[serde(default)]
    pub text: String,
}

/// Represents emphasized content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emph {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// Represents strongly emphasized content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strong {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// Represents an inline code span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    #[serde(default)]
    pub text: String,
}

/// Represents a code block with an optional info string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagInfo>,
    #[serde(default)]
    pub text: String,
}

/// Represents a block of raw HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagInfo>,
    #[serde(default)]
    pub text: String,
}

/// Represents an inline HTML snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlInline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagInfo>,
    #[serde(default)]
    pub text: String,
}

/// Represents a hyperlink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// Represents a clause, a block container with provenance metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    #[serde(default)]
    pub clauseid: String,
    #[serde(default)]
    pub src: String,
    #[serde(default, rename = "clauseText")]
    pub clause_text: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// Represents a named variable with a current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// Represents a derived variable carrying only its computed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedVariable {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// Structured metadata extracted from a raw HTML fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagInfo {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<TagAttribute>,
    #[serde(default, rename = "attributeString")]
    pub attribute_string: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub closed: bool,
}

/// A single name/value attribute pair on an HTML tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagAttribute {
    pub name: String,
    pub value: String,
}

impl Node {
    /// The underscore-delimited markup tag name for this variant.
    pub fn tag_name(&self) -> &'static str {
        match self {
            Node::Document(_) => "document",
            Node::Paragraph(_) => "paragraph",
            Node::Heading(_) => "heading",
            Node::BlockQuote(_) => "block_quote",
            Node::List(_) => "list",
            Node::Item(_) => "item",
            Node::Text(_) => "text",
            Node::Emph(_) => "emph",
            Node::Strong(_) => "strong",
            Node::Code(_) => "code",
            Node::CodeBlock(_) => "code_block",
            Node::HtmlBlock(_) => "html_block",
            Node::HtmlInline(_) => "html_inline",
            Node::Link(_) => "link",
            Node::ThematicBreak => "thematic_break",
            Node::Clause(_) => "clause",
            Node::Variable(_) => "variable",
            Node::ComputedVariable(_) => "computed_variable",
        }
    }

    /// The namespace-qualified class tag, as found in the `$class` field of
    /// the JSON form.
    pub fn class_tag(&self) -> &'static str {
        match self {
            Node::Document(_) => "org.scribe.dom.Document",
            Node::Paragraph(_) => "org.scribe.dom.Paragraph",
            Node::Heading(_) => "org.scribe.dom.Heading",
            Node::BlockQuote(_) => "org.scribe.dom.BlockQuote",
            Node::List(_) => "org.scribe.dom.List",
            Node::Item(_) => "org.scribe.dom.Item",
            Node::Text(_) => "org.scribe.dom.Text",
            Node::Emph(_) => "org.scribe.dom.Emph",
            Node::Strong(_) => "org.scribe.dom.Strong",
            Node::Code(_) => "org.scribe.dom.Code",
            Node::CodeBlock(_) => "org.scribe.dom.CodeBlock",
            Node::HtmlBlock(_) => "org.scribe.dom.HtmlBlock",
            Node::HtmlInline(_) => "org.scribe.dom.HtmlInline",
            Node::Link(_) => "org.scribe.dom.Link",
            Node::ThematicBreak => "org.scribe.dom.ThematicBreak",
            Node::Clause(_) => "org.scribe.dom.Clause",
            Node::Variable(_) => "org.scribe.dom.Variable",
            Node::ComputedVariable(_) => "org.scribe.dom.ComputedVariable",
        }
    }

    /// The children list of a container node, or `None` for leaf variants.
    pub fn child_nodes(&self) -> Option<&[Node]> {
        match self {
            Node::Document(n) => Some(&n.nodes),
            Node::Paragraph(n) => Some(&n.nodes),
            Node::Heading(n) => Some(&n.nodes),
            Node::BlockQuote(n) => Some(&n.nodes),
            Node::List(n) => Some(&n.nodes),
            Node::Item(n) => Some(&n.nodes),
            Node::Emph(n) => Some(&n.nodes),
            Node::Strong(n) => Some(&n.nodes),
            Node::Link(n) => Some(&n.nodes),
            Node::Clause(n) => Some(&n.nodes),
            Node::Variable(n) => Some(&n.nodes),
            Node::ComputedVariable(n) => Some(&n.nodes),
            Node::Text(_)
            | Node::Code(_)
            | Node::CodeBlock(_)
            | Node::HtmlBlock(_)
            | Node::HtmlInline(_)
            | Node::ThematicBreak => None,
        }
    }

    /// Mutable access to the children list of a container node.
    pub fn child_nodes_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Document(n) => Some(&mut n.nodes),
            Node::Paragraph(n) => Some(&mut n.nodes),
            Node::Heading(n) => Some(&mut n.nodes),
            Node::BlockQuote(n) => Some(&mut n.nodes),
            Node::List(n) => Some(&mut n.nodes),
            Node::Item(n) => Some(&mut n.nodes),
            Node::Emph(n) => Some(&mut n.nodes),
            Node::Strong(n) => Some(&mut n.nodes),
            Node::Link(n) => Some(&mut n.nodes),
            Node::Clause(n) => Some(&mut n.nodes),
            Node::Variable(n) => Some(&mut n.nodes),
            Node::ComputedVariable(n) => Some(&mut n.nodes),
            Node::Text(_)
            | Node::Code(_)
            | Node::CodeBlock(_)
            | Node::HtmlBlock(_)
            | Node::HtmlInline(_)
            | Node::ThematicBreak => None,
        }
    }
}
