//! Format-agnostic core algorithms.
//!
//! The heavy lifting of every conversion lives here: rebuilding a nested
//! canonical tree from a flat markup event stream (stream_to_tree.rs), the
//! reverse walk that flattens a tree back into events (tree_to_stream.rs),
//! and the HTML fragment inspector that decorates raw HTML nodes with
//! structured tag metadata (html_inspect.rs). Format modules stay focused on
//! adapting their own representation to and from these two shapes.

pub mod html_inspect;
pub mod stream_to_tree;
pub mod tree_to_stream;

/// Options controlling event-stream conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Extract structured tag metadata from raw HTML nodes and code block
    /// info strings while building the tree.
    pub tag_info: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions { tag_info: true }
    }
}
