//! Import tests for the editor format (editor tree → canonical tree)

use proptest::prelude::*;
use scribe_babel::dom::nodes::*;
use scribe_babel::editor_to_dom;
use scribe_babel::error::FormatError;
use serde_json::json;

fn document_children(node: &Node) -> &[Node] {
    match node {
        Node::Document(d) => &d.nodes,
        other => panic!("expected Document, got {other:?}"),
    }
}

#[test]
fn test_bold_paragraph_scenario() {
    let source = json!({
        "nodes": [{
            "object": "block",
            "type": "paragraph",
            "nodes": [{
                "object": "text",
                "text": "hi",
                "marks": [{"type": "bold"}]
            }]
        }]
    });

    let doc = editor_to_dom(&source.to_string()).unwrap();
    let expected = Node::Document(Document {
        xmlns: XMLNS.to_string(),
        nodes: vec![Node::Paragraph(Paragraph {
            nodes: vec![Node::Strong(Strong {
                nodes: vec![Node::Text(Text {
                    text: "hi".to_string(),
                })],
            })],
        })],
    });
    assert_eq!(doc, expected);
}

#[test]
fn test_heading_level_fidelity() {
    let types = [
        ("heading_one", "1"),
        ("heading_two", "2"),
        ("heading_three", "3"),
        ("heading_four", "4"),
        ("heading_five", "5"),
        ("heading_six", "6"),
    ];

    for (editor_type, level) in types {
        let source = json!({
            "nodes": [{
                "object": "block",
                "type": editor_type,
                "nodes": [{"object": "text", "text": "T", "marks": []}]
            }]
        });

        let doc = editor_to_dom(&source.to_string()).unwrap();
        match &document_children(&doc)[0] {
            Node::Heading(h) => assert_eq!(h.level, level, "{editor_type}"),
            other => panic!("expected Heading for {editor_type}, got {other:?}"),
        }
    }
}

#[test]
fn test_list_item_child_redirection() {
    // A list item with N children produces an Item whose single child is a
    // paragraph containing exactly those N mapped children, in order.
    let source = json!({
        "nodes": [{
            "object": "block",
            "type": "ul_list",
            "data": {"tight": "true"},
            "nodes": [{
                "object": "block",
                "type": "list_item",
                "nodes": [
                    {"object": "text", "text": "a", "marks": []},
                    {"object": "text", "text": "b", "marks": [{"type": "bold"}]},
                    {"object": "text", "text": "c", "marks": []}
                ]
            }]
        }]
    });

    let doc = editor_to_dom(&source.to_string()).unwrap();
    let Node::List(list) = &document_children(&doc)[0] else {
        panic!("expected List");
    };
    assert_eq!(list.kind, "bullet");
    assert_eq!(list.nodes.len(), 1);

    let Node::Item(item) = &list.nodes[0] else {
        panic!("expected Item");
    };
    assert_eq!(item.nodes.len(), 1, "item children go inside the paragraph");

    let Node::Paragraph(inner) = &item.nodes[0] else {
        panic!("expected the synthetic Paragraph");
    };
    assert_eq!(inner.nodes.len(), 3);
    assert!(matches!(&inner.nodes[0], Node::Text(t) if t.text == "a"));
    assert!(matches!(&inner.nodes[1], Node::Strong(_)));
    assert!(matches!(&inner.nodes[2], Node::Text(t) if t.text == "c"));
}

#[test]
fn test_empty_list_item_keeps_synthetic_paragraph() {
    let source = json!({
        "nodes": [{
            "object": "block",
            "type": "ol_list",
            "data": {"start": "1", "delimiter": "period", "tight": "true"},
            "nodes": [{"object": "block", "type": "list_item", "nodes": []}]
        }]
    });

    let doc = editor_to_dom(&source.to_string()).unwrap();
    let Node::List(list) = &document_children(&doc)[0] else {
        panic!("expected List");
    };
    let Node::Item(item) = &list.nodes[0] else {
        panic!("expected Item");
    };
    assert_eq!(
        item.nodes,
        vec![Node::Paragraph(Paragraph { nodes: vec![] })]
    );
}

#[test]
fn test_ordered_list_data_passthrough() {
    let source = json!({
        "nodes": [{
            "object": "block",
            "type": "ol_list",
            "data": {"start": "4", "delimiter": "paren", "tight": "false"},
            "nodes": [{
                "object": "block",
                "type": "list_item",
                "nodes": [{"object": "text", "text": "x", "marks": []}]
            }]
        }]
    });

    let doc = editor_to_dom(&source.to_string()).unwrap();
    match &document_children(&doc)[0] {
        Node::List(l) => {
            assert_eq!(l.kind, "ordered");
            assert_eq!(l.start.as_deref(), Some("4"));
            assert_eq!(l.delimiter.as_deref(), Some("paren"));
            assert_eq!(l.tight.as_deref(), Some("false"));
        }
        other => panic!("expected List, got {other:?}"),
    }
}

#[test]
fn test_link_and_quote_and_rule() {
    let source = json!({
        "nodes": [
            {
                "object": "block",
                "type": "quote",
                "nodes": [{
                    "object": "block",
                    "type": "paragraph",
                    "nodes": [{
                        "object": "inline",
                        "type": "link",
                        "data": {"href": "https://example.com"},
                        "nodes": [{"object": "text", "text": "site", "marks": []}]
                    }]
                }]
            },
            {"object": "block", "type": "horizontal_rule", "nodes": []}
        ]
    });

    let doc = editor_to_dom(&source.to_string()).unwrap();
    let children = document_children(&doc);

    let Node::BlockQuote(quote) = &children[0] else {
        panic!("expected BlockQuote");
    };
    let Node::Paragraph(p) = &quote.nodes[0] else {
        panic!("expected Paragraph");
    };
    match &p.nodes[0] {
        Node::Link(l) => {
            assert_eq!(l.destination, "https://example.com");
            assert_eq!(l.title, "");
            assert!(matches!(&l.nodes[0], Node::Text(t) if t.text == "site"));
        }
        other => panic!("expected Link, got {other:?}"),
    }

    assert_eq!(children[1], Node::ThematicBreak);
}

#[test]
fn test_clause_and_variables() {
    let source = json!({
        "nodes": [{
            "object": "block",
            "type": "clause",
            "data": {
                "clauseid": "c-01",
                "src": "ap://acceptance@0.1.0",
                "clauseText": "Accepted."
            },
            "nodes": [{
                "object": "block",
                "type": "paragraph",
                "nodes": [
                    {
                        "object": "inline",
                        "type": "variable",
                        "data": {"id": "buyer", "value": "Acme"},
                        "nodes": [{"object": "text", "text": "Acme", "marks": []}]
                    },
                    {
                        "object": "inline",
                        "type": "computed",
                        "data": {"value": "42.0"},
                        "nodes": []
                    }
                ]
            }]
        }]
    });

    let doc = editor_to_dom(&source.to_string()).unwrap();
    let Node::Clause(clause) = &document_children(&doc)[0] else {
        panic!("expected Clause");
    };
    assert_eq!(clause.clauseid, "c-01");
    assert_eq!(clause.src, "ap://acceptance@0.1.0");
    assert_eq!(clause.clause_text, "Accepted.");

    let Node::Paragraph(p) = &clause.nodes[0] else {
        panic!("expected Paragraph");
    };
    match (&p.nodes[0], &p.nodes[1]) {
        (Node::Variable(v), Node::ComputedVariable(c)) => {
            assert_eq!(v.id, "buyer");
            assert_eq!(v.value, "Acme");
            assert_eq!(c.value, "42.0");
        }
        other => panic!("expected Variable and ComputedVariable, got {other:?}"),
    }
}

#[test]
fn test_code_block_uses_own_text() {
    let source = json!({
        "nodes": [{
            "object": "block",
            "type": "code_block",
            "text": "let x = 1;",
            "nodes": []
        }]
    });

    let doc = editor_to_dom(&source.to_string()).unwrap();
    match &document_children(&doc)[0] {
        Node::CodeBlock(cb) => assert_eq!(cb.text, "let x = 1;"),
        other => panic!("expected CodeBlock, got {other:?}"),
    }
}

#[test]
fn test_unknown_node_type_is_fatal() {
    let source = json!({
        "nodes": [{"object": "block", "type": "carousel", "nodes": []}]
    });

    let result = editor_to_dom(&source.to_string());
    assert_eq!(result, Err(FormatError::UnhandledNode("carousel".to_string())));
}

proptest! {
    /// Mark composition is deterministic: code wins outright, and bold with
    /// italic always nests Emph outside Strong.
    #[test]
    fn prop_mark_composition(bold: bool, italic: bool, code: bool) {
        let mut marks = Vec::new();
        if bold { marks.push(json!({"type": "bold"})); }
        if italic { marks.push(json!({"type": "italic"})); }
        if code { marks.push(json!({"type": "code"})); }

        let source = json!({
            "nodes": [{
                "object": "block",
                "type": "paragraph",
                "nodes": [{"object": "text", "text": "w", "marks": marks}]
            }]
        });

        let doc = editor_to_dom(&source.to_string()).unwrap();
        let Node::Document(d) = &doc else { panic!("expected Document") };
        let Node::Paragraph(p) = &d.nodes[0] else { panic!("expected Paragraph") };

        let mut node = &p.nodes[0];
        if code {
            prop_assert!(matches!(node, Node::Code(_)));
        } else {
            if italic {
                prop_assert!(matches!(node, Node::Emph(_)), "emphasis must be outermost");
                let Node::Emph(e) = node else { unreachable!() };
                node = &e.nodes[0];
            }
            if bold {
                prop_assert!(matches!(node, Node::Strong(_)), "strong must wrap the text");
                let Node::Strong(s) = node else { unreachable!() };
                node = &s.nodes[0];
            }
            prop_assert!(matches!(node, Node::Text(t) if t.text == "w"));
        }
    }
}
