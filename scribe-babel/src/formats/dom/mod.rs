//! Canonical JSON format
//!
//! The `$class`-tagged JSON form of the canonical tree, as handed to schema
//! validation. Parsing deserializes through the typed node model, so a tree
//! that does not match the class model is rejected with the serde error
//! surfaced verbatim; serialization pretty-prints the same shape.

use crate::dom::nodes::Node;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for the canonical JSON tree
pub struct DomFormat;

impl Format for DomFormat {
    fn name(&self) -> &str {
        "dom"
    }

    fn description(&self) -> &str {
        "Canonical $class-tagged JSON tree"
    }

    fn file_extensions(&self) -> &[&str] {
        &["dom"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("schema validation failed: {e}")))
    }

    fn serialize(&self, doc: &Node) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
