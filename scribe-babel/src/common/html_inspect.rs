//! HTML fragment inspection.
//!
//! Raw HTML nodes in the canonical tree keep their text verbatim; when the
//! fragment happens to be well formed we additionally attach structured tag
//! metadata so downstream consumers can address the tag by name and
//! attributes. Inspection is strictly best effort: anything roxmltree cannot
//! parse as a single-rooted fragment yields `None`, and the caller must
//! treat that as "no metadata available", never as a failure.

use crate::dom::nodes::{TagAttribute, TagInfo};

/// Extracts tag metadata from a raw HTML fragment, or `None` when the
/// fragment is not parseable.
pub fn inspect(fragment: &str) -> Option<TagInfo> {
    let doc = roxmltree::Document::parse(fragment).ok()?;
    let root = doc.root_element();

    let mut attributes = Vec::new();
    let mut pairs = Vec::new();
    for attr in root.attributes() {
        pairs.push(format!("{}=\"{}\"", attr.name(), attr.value()));
        attributes.push(TagAttribute {
            name: attr.name().to_string(),
            value: attr.value().to_string(),
        });
    }

    let content: String = root
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();

    Some(TagInfo {
        name: root.tag_name().name().to_string(),
        attributes,
        attribute_string: pairs.join(" "),
        content,
        closed: fragment.trim_end().ends_with("/>"),
    })
}
