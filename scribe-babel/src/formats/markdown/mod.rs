//! Markdown format implementation
//!
//! This module implements bidirectional conversion between the canonical
//! tree and CommonMark Markdown.
//!
//! # Library Choice
//!
//! Parsing uses the `comrak` crate: a single, well-maintained crate with a
//! complete CommonMark AST. We never re-implement text-level Markdown
//! parsing; comrak's AST is walked into the markup event stream and the
//! generic stream-to-tree builder does the rest. Serialization is written
//! here directly because the output spacing and indentation rules are part
//! of this crate's contract (two calls on the same tree must be
//! byte-identical), which rules out delegating to a formatter with its own
//! normalization passes.
//!
//! # Element Mapping Table
//!
//! | Canonical node   | Markdown                | Notes                                |
//! |------------------|-------------------------|--------------------------------------|
//! | Paragraph        | paragraph               | blank-line separated                 |
//! | Heading          | `#`..`######` prefix    | level carried as "1".."6"            |
//! | BlockQuote       | `> ` prefixed lines     | rendered through a sub-writer        |
//! | List / Item      | `- ` or `1. ` markers   | honors type/start/delimiter/tight    |
//! | CodeBlock        | fenced block            | info string preserved                |
//! | HtmlBlock/Inline | raw passthrough         | tag metadata is not re-serialized    |
//! | Emph / Strong    | `*` / `**` wrapping     | emphasis always outside strong       |
//! | Code             | backtick span           |                                      |
//! | Link             | `[text](dest "title")`  | title omitted when empty             |
//! | ThematicBreak    | `---`                   |                                      |
//! | Clause           | transparent container   | children serialize as blocks         |
//! | Variable(s)      | children, else value    | markdown has no native syntax        |
//!
//! # Lossy Conversions
//!
//! - Soft and hard line breaks import as plain whitespace
//! - Images import as links (the canonical model has no image variant)
//! - Derived tag metadata on HTML nodes is not re-serialized

pub mod parser;
pub mod serializer;

use crate::common::ConvertOptions;
use crate::dom::nodes::Node;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for Markdown
#[derive(Default)]
pub struct MarkdownFormat {
    options: ConvertOptions,
}

impl MarkdownFormat {
    pub fn new(options: ConvertOptions) -> Self {
        MarkdownFormat { options }
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown format"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        parser::parse_from_markdown(source, &self.options)
    }

    fn serialize(&self, doc: &Node) -> Result<String, FormatError> {
        serializer::serialize_to_markdown(doc)
    }
}
