//! Multi-format interoperability for scribe documents
//!
//!     This crate converts documents between three representations: the
//!     rich-text editor's native tree, a canonical $class-tagged document
//!     tree, and plain Markdown text. The canonical tree is the hub format;
//!     every direction funnels through it.
//!
//!     TLDR for format authors:
//!         - Babel never parses any text format itself, but relies on the
//!           format's own library (comrak for Markdown, roxmltree for XML)
//!         - A conversion adapts the format's representation to the markup
//!           event stream or the canonical tree, then runs the common code
//!           in ./common
//!         - Each format implements the Format trait and registers in the
//!           FormatRegistry
//!
//! Architecture
//!
//!     The goal is to split the logic shared by all conversions into a
//!     format-agnostic layer. Documents flow through a flat markup event
//!     stream (./dom/events.rs) and the canonical node tree
//!     (./dom/nodes.rs); the common code (./common) converts between the
//!     two. Format modules stay focused on their own data shape.
//!
//!     This is a pure lib: it is shell agnostic, and no code here should
//!     suppose a shell environment, be it to std print, env vars etc.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── dom                     # canonical tree, events, tag classification
//!     ├── common                  # stream/tree conversion, HTML inspection
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── parser.rs       # Parser implementation
//!     │   │   ├── serializer.rs   # Serializer implementation
//!     │   │   └── mod.rs
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     The most complex part of the work is reconstructing the nested tree
//!     from a flat event stream, followed by the reverse operation. Both
//!     are implemented once over the shared representations (see
//!     ./common/stream_to_tree.rs and ./common/tree_to_stream.rs), so all
//!     the heavy lifting is done by a core, well tested module, freeing
//!     format adaptations to be focused on the simpler data
//!     transformations.
//!
//!     The editor direction is different in kind: the editor tree is
//!     already nested, so it maps structurally onto the canonical tree
//!     (./formats/editor/parser.rs), reconciling formatting marks into
//!     nested wrapper nodes along the way.
//!
//! Format Selection
//!
//!     - Markdown: both in and out, as Markdown is the universal format
//!       for plain text editing.
//!     - Editor: inbound only; the editor owns its own rendering of
//!       canonical documents.
//!     - XML: both ways; serializing the canonical tree is trivial and
//!       useful as a structured format for storage.
//!     - Dom: the $class-tagged JSON tree itself, for interchange with
//!       schema validation.
//!
//! Conversions either fully succeed or fail outright: a structurally
//! invalid input is a fatal error, never a partially converted tree. The
//! one deliberate exception is HTML tag metadata, which degrades to absent
//! when a fragment does not parse.

pub mod common;
pub mod dom;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use common::ConvertOptions;
pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;

use dom::nodes::Node;

/// Converts Markdown text to a canonical document tree.
pub fn markdown_to_dom(source: &str) -> Result<Node, FormatError> {
    formats::markdown::parser::parse_from_markdown(source, &ConvertOptions::default())
}

/// Serializes a canonical document tree to Markdown text.
pub fn dom_to_markdown(doc: &Node) -> Result<String, FormatError> {
    formats::markdown::serializer::serialize_to_markdown(doc)
}

/// Converts an editor JSON document to a canonical document tree.
pub fn editor_to_dom(source: &str) -> Result<Node, FormatError> {
    formats::editor::parser::parse_from_editor(source)
}
