//! Round-trip tests for the XML rendering of the canonical tree.

use scribe_babel::dom::nodes::*;
use scribe_babel::format::Format;
use scribe_babel::formats::xml::XmlFormat;
use scribe_babel::markdown_to_dom;

use crate::common::{document, paragraph, text};

#[test]
fn test_tree_survives_xml_round_trip() {
    let doc = document(vec![
        Node::Heading(Heading {
            level: "1".to_string(),
            nodes: vec![text("Title")],
        }),
        Node::Clause(Clause {
            clauseid: "c-01".to_string(),
            src: "ap://acceptance@0.1.0".to_string(),
            clause_text: "Accepted.".to_string(),
            nodes: vec![paragraph(vec![
                text("Signed by "),
                Node::Variable(Variable {
                    id: "buyer".to_string(),
                    value: "Acme".to_string(),
                    nodes: vec![text("Acme")],
                }),
            ])],
        }),
        Node::ThematicBreak,
    ]);

    let format = XmlFormat::default();
    let xml = format.serialize(&doc).unwrap();
    let back = format.parse(&xml).unwrap();
    assert_eq!(doc, back);
}

#[test]
fn test_markdown_tree_serializes_to_xml() {
    // Cross-format: a parsed Markdown document renders to XML and back.
    let doc = markdown_to_dom("# T\n\nbody\n").unwrap();

    let format = XmlFormat::default();
    let xml = format.serialize(&doc).unwrap();
    assert!(xml.starts_with("<document xmlns=\"http://commonmark.org/xml/1.0\">"));
    assert!(xml.contains("<heading level=\"1\">"));

    let back = format.parse(&xml).unwrap();
    assert_eq!(doc, back);
}
