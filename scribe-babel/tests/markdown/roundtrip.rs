//! Round-trip tests: markdown → canonical → markdown → canonical.
//!
//! The two canonical trees must agree up to whitespace in text leaves.

use proptest::prelude::*;
use scribe_babel::dom::nodes::*;
use scribe_babel::{dom_to_markdown, markdown_to_dom};

use crate::common::{document, normalized, paragraph, text};

fn assert_round_trip(source: &str) {
    let first = markdown_to_dom(source).unwrap();
    let rendered = dom_to_markdown(&first).unwrap();
    let second = markdown_to_dom(&rendered).unwrap();
    assert_eq!(
        normalized(&first),
        normalized(&second),
        "round trip diverged; intermediate markdown:\n{rendered}"
    );
}

#[test]
fn test_kitchen_sink_round_trip() {
    let source = "\
# Guide

Intro with **bold**, *italic*, `code` and a [link](https://example.com \"Ex\").

> Quoted thought.
>
> Second thought.

- first
- second

1. one
2. two

```rust
fn main() {}
```

---

Done.
";
    assert_round_trip(source);
}

#[test]
fn test_loose_list_round_trip() {
    assert_round_trip("- alpha\n\n- beta\n");
}

#[test]
fn test_nested_list_round_trip() {
    assert_round_trip("- outer\n  - inner\n");
}

#[test]
fn test_ordered_start_round_trip() {
    assert_round_trip("4. four\n5. five\n");
}

#[test]
fn test_html_block_round_trip() {
    assert_round_trip("<div id=\"x\">hi</div>\n");
}

#[test]
fn test_multiline_paragraph_round_trip() {
    assert_round_trip("line one\nline two\n");
}

proptest! {
    /// Any document of plain-word paragraphs survives the round trip.
    #[test]
    fn prop_paragraphs_round_trip(
        texts in proptest::collection::vec("[a-z]{1,12}( [a-z]{1,12}){0,5}", 1..4)
    ) {
        let doc = document(texts.iter().map(|t| paragraph(vec![text(t)])).collect());
        let md = dom_to_markdown(&doc).unwrap();
        let back = markdown_to_dom(&md).unwrap();
        prop_assert_eq!(normalized(&doc), normalized(&back));
    }

    /// Headings keep their level and title through the round trip.
    #[test]
    fn prop_headings_round_trip(
        level in 1usize..=6,
        title in "[a-z]{1,12}",
    ) {
        let doc = document(vec![Node::Heading(Heading {
            level: level.to_string(),
            nodes: vec![text(&title)],
        })]);
        let md = dom_to_markdown(&doc).unwrap();
        let back = markdown_to_dom(&md).unwrap();
        prop_assert_eq!(normalized(&doc), normalized(&back));
    }
}
