//! Editor document model (deserialization only).
//!
//! The editor tree is read-only input to the mapper, so only `Deserialize`
//! is derived. Nodes split on the `object` discriminator: text runs carry
//! raw text plus marks, elements carry a `type` string, a typed `data` bag
//! and children. A document missing its discriminators fails at decode
//! time, before any mapping runs.

use serde::Deserialize;

/// A rich-text editor document: a `nodes` array at the root.
#[derive(Debug, Clone, Deserialize)]
pub struct EditorDocument {
    #[serde(default)]
    pub nodes: Vec<EditorNode>,
}

/// A single editor node, discriminated by its `object` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "object", rename_all = "lowercase")]
pub enum EditorNode {
    Text(TextRun),
    Block(ElementNode),
    Inline(ElementNode),
}

/// A run of text with formatting marks.
#[derive(Debug, Clone, Deserialize)]
pub struct TextRun {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<Mark>,
}

/// A formatting mark on a text run.
#[derive(Debug, Clone, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: String,
}

/// A typed element node.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: ElementData,
    #[serde(default)]
    pub nodes: Vec<EditorNode>,
    /// Raw text carried by code and HTML blocks.
    #[serde(default)]
    pub text: Option<String>,
}

/// Type-specific element fields. Which fields are required depends on the
/// element type and is enforced by the mapper; fields outside this set are
/// rejected at the decoding boundary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementData {
    pub href: Option<String>,
    pub delimiter: Option<String>,
    pub start: Option<String>,
    pub tight: Option<String>,
    pub clauseid: Option<String>,
    pub src: Option<String>,
    #[serde(rename = "clauseText")]
    pub clause_text: Option<String>,
    pub id: Option<String>,
    pub value: Option<String>,
}
