//! Markdown serialization (canonical tree → Markdown export)
//!
//! A depth-first walk over the canonical tree that accumulates the output
//! string directly. Two pieces of traversal state are threaded through the
//! walk: the indentation level, raised around nested list content, and a
//! first-token flag that suppresses the leading blank-line separator at the
//! start of the document and right after a list marker. The result is a
//! fixed, deterministic function of the tree; serializing the same tree
//! twice yields byte-identical output.

use crate::dom::nodes::Node;
use crate::error::FormatError;

/// Serialize a canonical document tree to Markdown
pub fn serialize_to_markdown(doc: &Node) -> Result<String, FormatError> {
    let mut writer = MarkdownWriter::new();
    writer.visit(doc)?;
    Ok(writer.finish())
}

struct MarkdownWriter {
    out: String,
    indent: usize,
    first: bool,
}

impl MarkdownWriter {
    fn new() -> Self {
        MarkdownWriter {
            out: String::new(),
            indent: 0,
            first: true,
        }
    }

    fn finish(self) -> String {
        self.out.trim().to_string()
    }

    /// Blank-line separation before a block, suppressed for the first token.
    fn block_sep(&mut self) {
        if self.first {
            self.first = false;
        } else {
            self.out.push_str("\n\n");
            self.push_indent();
        }
    }

    /// Single-newline separation, used between tight list items.
    fn line_sep(&mut self) {
        if self.first {
            self.first = false;
        } else {
            self.out.push('\n');
            self.push_indent();
        }
    }

    fn push_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str("   ");
        }
    }

    fn visit_all(&mut self, nodes: &[Node]) -> Result<(), FormatError> {
        for node in nodes {
            self.visit(node)?;
        }
        Ok(())
    }

    fn visit(&mut self, node: &Node) -> Result<(), FormatError> {
        match node {
            Node::Document(doc) => self.visit_all(&doc.nodes)?,

            // Clauses are transparent: their children are ordinary blocks.
            Node::Clause(clause) => self.visit_all(&clause.nodes)?,

            Node::Paragraph(p) => {
                self.block_sep();
                self.visit_all(&p.nodes)?;
            }

            Node::Heading(h) => {
                self.block_sep();
                let level: usize = h.level.parse().map_err(|_| {
                    FormatError::SerializationError(format!("invalid heading level '{}'", h.level))
                })?;
                for _ in 0..level.clamp(1, 6) {
                    self.out.push('#');
                }
                self.out.push(' ');
                self.visit_all(&h.nodes)?;
            }

            Node::BlockQuote(quote) => {
                self.block_sep();
                let mut inner = MarkdownWriter::new();
                inner.visit_all(&quote.nodes)?;
                let rendered = inner.finish();
                for (index, line) in rendered.lines().enumerate() {
                    if index > 0 {
                        self.out.push('\n');
                        self.push_indent();
                    }
                    if line.is_empty() {
                        self.out.push('>');
                    } else {
                        self.out.push_str("> ");
                        self.out.push_str(line);
                    }
                }
            }

            Node::List(list) => {
                let ordered = list.kind == "ordered";
                let start: usize = list
                    .start
                    .as_deref()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1);
                let delimiter = match list.delimiter.as_deref() {
                    Some("paren") => ')',
                    _ => '.',
                };
                let tight = list.tight.as_deref() == Some("true");

                for (index, item) in list.nodes.iter().enumerate() {
                    if tight {
                        self.line_sep();
                    } else {
                        self.block_sep();
                    }
                    if ordered {
                        self.out.push_str(&format!("{}{} ", start + index, delimiter));
                    } else {
                        self.out.push_str("- ");
                    }

                    let Node::Item(item) = item else {
                        return Err(FormatError::SerializationError(format!(
                            "list child must be an item, found {}",
                            item.class_tag()
                        )));
                    };
                    self.indent += 1;
                    self.first = true;
                    self.visit_all(&item.nodes)?;
                    self.indent -= 1;
                    self.first = false;
                }
            }

            Node::Item(_) => {
                return Err(FormatError::SerializationError(
                    "item outside of a list".to_string(),
                ));
            }

            Node::Text(t) => self.out.push_str(&t.text),

            Node::Emph(e) => {
                self.out.push('*');
                self.visit_all(&e.nodes)?;
                self.out.push('*');
            }

            Node::Strong(s) => {
                self.out.push_str("**");
                self.visit_all(&s.nodes)?;
                self.out.push_str("**");
            }

            Node::Code(c) => {
                self.out.push('`');
                self.out.push_str(&c.text);
                self.out.push('`');
            }

            Node::Link(link) => {
                self.out.push('[');
                self.visit_all(&link.nodes)?;
                self.out.push_str("](");
                self.out.push_str(&link.destination);
                if !link.title.is_empty() {
                    self.out.push_str(&format!(" \"{}\"", link.title));
                }
                self.out.push(')');
            }

            Node::CodeBlock(cb) => {
                self.block_sep();
                self.out.push_str("```");
                if let Some(info) = &cb.info {
                    self.out.push_str(info);
                }
                for line in cb.text.lines() {
                    self.out.push('\n');
                    self.push_indent();
                    self.out.push_str(line);
                }
                self.out.push('\n');
                self.push_indent();
                self.out.push_str("```");
            }

            Node::HtmlBlock(hb) => {
                self.block_sep();
                self.out.push_str(hb.text.trim_end());
            }

            Node::HtmlInline(hi) => self.out.push_str(&hi.text),

            Node::ThematicBreak => {
                self.block_sep();
                self.out.push_str("---");
            }

            // Markdown has no syntax for variables: rendered content wins,
            // the bound value is the fallback.
            Node::Variable(v) => {
                if v.nodes.is_empty() {
                    self.out.push_str(&v.value);
                } else {
                    self.visit_all(&v.nodes)?;
                }
            }
            Node::ComputedVariable(v) => {
                if v.nodes.is_empty() {
                    self.out.push_str(&v.value);
                } else {
                    self.visit_all(&v.nodes)?;
                }
            }
        }
        Ok(())
    }
}
