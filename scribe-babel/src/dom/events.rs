//! Defines the flat event stream representation of a document.

/// Represents a single event in the markup stream.
///
/// A document is described linearly as open-tag, text and close-tag events,
/// which is the form produced by markup event sources and consumed by the
/// stream-to-tree builder. Structural fields such as a heading's level or a
/// list's start arrive as tag attributes on the open event.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupEvent {
    Open {
        name: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
    Close {
        name: String,
    },
}

impl MarkupEvent {
    /// An open event with no attributes.
    pub fn open(name: impl Into<String>) -> Self {
        MarkupEvent::Open {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// An open event carrying the given attributes.
    pub fn open_with(name: impl Into<String>, attributes: &[(&str, &str)]) -> Self {
        MarkupEvent::Open {
            name: name.into(),
            attributes: attributes
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// A text content event.
    pub fn text(content: impl Into<String>) -> Self {
        MarkupEvent::Text(content.into())
    }

    /// A close event.
    pub fn close(name: impl Into<String>) -> Self {
        MarkupEvent::Close { name: name.into() }
    }
}
