//! Tag classification: markup tag names to class tags.

/// Namespace prefix for all class tags in the canonical model.
pub const NAMESPACE: &str = "org.scribe.dom";

/// Converts an underscore-delimited markup tag name into its
/// namespace-qualified class tag.
///
/// `thematic_break` becomes `org.scribe.dom.ThematicBreak`. The function is
/// total: any tag name classifies, including ones the tree builder does not
/// model. Feeding it an unrecognized name is a caller contract violation,
/// not an error here.
pub fn class_tag(tag_name: &str) -> String {
    let mut camel = String::with_capacity(tag_name.len());
    let mut upper_next = true;
    for ch in tag_name.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            camel.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            camel.push(ch);
        }
    }
    format!("{NAMESPACE}.{camel}")
}
