//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("operation not supported: {0}")]
    NotSupported(String),
    /// Input contained a structural node with no mapping rule
    #[error("unhandled node: {0}")]
    UnhandledNode(String),
}
