//! Editor document format (import only)
//!
//! The editor keeps documents as a tree of typed element nodes and marked
//! text runs. This module decodes that JSON shape (nodes.rs) and maps it
//! structurally onto the canonical tree (parser.rs). There is no reverse
//! mapping: the editor owns its own rendering of canonical documents.
//!
//! # Element Mapping Table
//!
//! | Editor type              | Canonical node                            |
//! |--------------------------|-------------------------------------------|
//! | paragraph                | Paragraph                                 |
//! | heading_one..heading_six | Heading, level "1".."6"                   |
//! | quote                    | BlockQuote                                |
//! | ol_list / ul_list        | List (ordered / bullet), data passthrough |
//! | list_item                | Item wrapping a synthetic Paragraph       |
//! | link                     | Link, destination from data.href          |
//! | horizontal_rule          | ThematicBreak                             |
//! | code_block / html_block  | CodeBlock / HtmlBlock, own text field     |
//! | html_inline              | HtmlInline                                |
//! | clause                   | Clause, metadata from data                |
//! | variable / computed      | Variable / ComputedVariable               |
//! | text runs                | Text, wrapped per marks (see parser.rs)   |
//!
//! Any other type is an unhandled node and fails the whole conversion;
//! silently dropping it would corrupt the document structure.

pub mod nodes;
pub mod parser;

use crate::dom::nodes::Node;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for editor documents
pub struct EditorFormat;

impl Format for EditorFormat {
    fn name(&self) -> &str {
        "editor"
    }

    fn description(&self) -> &str {
        "Rich-text editor document model"
    }

    fn file_extensions(&self) -> &[&str] {
        &["editor"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        parser::parse_from_editor(source)
    }
}
