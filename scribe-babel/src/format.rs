//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations
//! must implement. The trait provides a uniform interface for parsing and
//! serializing documents against the canonical tree.

use crate::dom::nodes::Node;
use crate::error::FormatError;

/// Trait for document formats
///
/// Implementors provide conversion between a string representation and the
/// canonical document tree. Formats can support parsing, serialization, or
/// both; the capability flags let callers ask before dispatching.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "editor", "xml")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → canonical tree)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (canonical tree → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a canonical document tree
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<Node, FormatError> {
        Err(FormatError::NotSupported(format!(
            "format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a canonical document tree into source text
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize(&self, _doc: &Node) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "format '{}' does not support serialization",
            self.name()
        )))
    }
}
