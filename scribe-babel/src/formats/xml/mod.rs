//! XML format implementation
//!
//! The canonical tree has a natural XML rendering: element tag names are the
//! underscore-delimited markup names, structural fields are attributes, and
//! text-bearing nodes hold their text as character data. Parsing walks the
//! roxmltree document into the markup event stream and lets the generic
//! builder reassemble the tree; serialization flattens the tree back into
//! events and prints them with escaping and indentation.

pub mod parser;
pub mod serializer;

use crate::common::ConvertOptions;
use crate::dom::nodes::Node;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for the XML rendering of the canonical tree
#[derive(Default)]
pub struct XmlFormat {
    options: ConvertOptions,
}

impl XmlFormat {
    pub fn new(options: ConvertOptions) -> Self {
        XmlFormat { options }
    }
}

impl Format for XmlFormat {
    fn name(&self) -> &str {
        "xml"
    }

    fn description(&self) -> &str {
        "XML rendering of the canonical document tree"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        parser::parse_from_xml(source, &self.options)
    }

    fn serialize(&self, doc: &Node) -> Result<String, FormatError> {
        serializer::serialize_to_xml(doc)
    }
}
