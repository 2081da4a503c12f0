//! Import tests for the Markdown format (Markdown → canonical tree)

use scribe_babel::common::ConvertOptions;
use scribe_babel::dom::nodes::*;
use scribe_babel::format::Format;
use scribe_babel::formats::markdown::MarkdownFormat;
use scribe_babel::markdown_to_dom;

fn document_children(node: &Node) -> &[Node] {
    match node {
        Node::Document(d) => &d.nodes,
        other => panic!("expected Document, got {other:?}"),
    }
}

#[test]
fn test_document_root_carries_xmlns() {
    let doc = markdown_to_dom("hello\n").unwrap();
    match &doc {
        Node::Document(d) => assert_eq!(d.xmlns, XMLNS),
        other => panic!("expected Document, got {other:?}"),
    }
}

#[test]
fn test_tight_and_loose_lists() {
    let tight = markdown_to_dom("- a\n- b\n").unwrap();
    match &document_children(&tight)[0] {
        Node::List(l) => assert_eq!(l.tight.as_deref(), Some("true")),
        other => panic!("expected List, got {other:?}"),
    }

    let loose = markdown_to_dom("- a\n\n- b\n").unwrap();
    match &document_children(&loose)[0] {
        Node::List(l) => assert_eq!(l.tight.as_deref(), Some("false")),
        other => panic!("expected List, got {other:?}"),
    }
}

#[test]
fn test_block_quote_contains_paragraphs() {
    let doc = markdown_to_dom("> one\n>\n> two\n").unwrap();
    match &document_children(&doc)[0] {
        Node::BlockQuote(q) => {
            assert_eq!(q.nodes.len(), 2);
            assert!(matches!(&q.nodes[0], Node::Paragraph(_)));
            assert!(matches!(&q.nodes[1], Node::Paragraph(_)));
        }
        other => panic!("expected BlockQuote, got {other:?}"),
    }
}

#[test]
fn test_thematic_break() {
    let doc = markdown_to_dom("above\n\n---\n\nbelow\n").unwrap();
    let children = document_children(&doc);
    assert_eq!(children.len(), 3);
    assert_eq!(children[1], Node::ThematicBreak);
}

#[test]
fn test_html_block_gets_tag_metadata() {
    let doc = markdown_to_dom("<div id=\"intro\">welcome</div>\n").unwrap();
    match &document_children(&doc)[0] {
        Node::HtmlBlock(hb) => {
            let tag = hb.tag.as_ref().expect("tag metadata");
            assert_eq!(tag.name, "div");
            assert_eq!(tag.attributes[0].name, "id");
            assert_eq!(tag.attributes[0].value, "intro");
            assert_eq!(tag.content, "welcome");
        }
        other => panic!("expected HtmlBlock, got {other:?}"),
    }
}

#[test]
fn test_tag_metadata_respects_options() {
    let format = MarkdownFormat::new(ConvertOptions { tag_info: false });
    let doc = format.parse("<div id=\"intro\">welcome</div>\n").unwrap();
    match &document_children(&doc)[0] {
        Node::HtmlBlock(hb) => assert!(hb.tag.is_none()),
        other => panic!("expected HtmlBlock, got {other:?}"),
    }
}

#[test]
fn test_soft_break_imports_as_whitespace() {
    let doc = markdown_to_dom("line one\nline two\n").unwrap();
    let Node::Paragraph(p) = &document_children(&doc)[0] else {
        panic!("expected Paragraph");
    };
    // text / whitespace / text
    assert_eq!(p.nodes.len(), 3);
    assert!(matches!(&p.nodes[1], Node::Text(t) if t.text == " "));
}
