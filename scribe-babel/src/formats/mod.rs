//! Format implementations.
//!
//! Each format adapts one external representation to and from the canonical
//! tree. Formats never re-implement text-level parsing: markdown leans on
//! comrak, XML on roxmltree, and the editor and dom formats decode JSON
//! through serde. Whatever the source, the structural work funnels through
//! the shared event-stream algorithms in `crate::common`.

pub mod dom;
pub mod editor;
pub mod markdown;
pub mod xml;
