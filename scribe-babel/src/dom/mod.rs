//! The canonical document model (DOM).
//!
//! This module defines the hub representation that every format converts
//! through: the `$class`-tagged node tree (nodes.rs), the flat markup event
//! stream that describes the same tree linearly (events.rs), and the tag
//! classification rule that ties markup tag names to class tags
//! (classify.rs).

pub mod classify;
pub mod events;
pub mod nodes;
