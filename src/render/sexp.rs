//! S-expression tree dump, one node per line.
//!
//! ```text
//! (source_file
//!   (doc_comment
//!     (function_tag
//!       (identifier "calculateSum"))
//!     (returns_tag
//!       (type "number")
//!       (description "sum"))))
//! ```

use crate::render::Renderer;
use anyhow::Result;
use apidoc::{Document, Entry};

pub struct SexpRenderer;

impl Renderer for SexpRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut out = String::new();
        write_node(&mut out, &document_node(doc), 0);
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "sexp"
    }
}

struct Node<'a> {
    kind: &'static str,
    text: Option<&'a str>,
    children: Vec<Node<'a>>,
}

impl<'a> Node<'a> {
    fn branch(kind: &'static str, children: Vec<Node<'a>>) -> Self {
        Node {
            kind,
            text: None,
            children,
        }
    }

    fn leaf(kind: &'static str, text: &'a str) -> Self {
        Node {
            kind,
            text: Some(text),
            children: Vec::new(),
        }
    }
}

fn document_node(doc: &Document) -> Node<'_> {
    let blocks = doc
        .blocks()
        .iter()
        .map(|block| {
            let entries = block.entries.iter().map(entry_node).collect();
            Node::branch("doc_comment", entries)
        })
        .collect();
    Node::branch("source_file", blocks)
}

fn entry_node(entry: &Entry) -> Node<'_> {
    let children = match entry {
        Entry::FunctionTag { name } | Entry::ClassTag { name } => {
            vec![Node::leaf("identifier", name)]
        }
        Entry::ParamTag {
            ty,
            name,
            description,
        }
        | Entry::PropertyTag {
            ty,
            name,
            description,
        } => vec![
            Node::leaf("type", ty),
            Node::leaf("identifier", name),
            Node::leaf("description", description),
        ],
        Entry::ReturnsTag { ty, description } => vec![
            Node::leaf("type", ty),
            Node::leaf("description", description),
        ],
        Entry::TextLine { content } => return Node::leaf(entry.kind(), content),
    };
    Node::branch(entry.kind(), children)
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    out.push('(');
    out.push_str(node.kind);
    if let Some(text) = node.text {
        out.push(' ');
        out.push_str(&quote(text));
    }
    for child in &node.children {
        out.push('\n');
        write_node(out, child, depth + 1);
    }
    out.push(')');
}

fn quote(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\t', "\\t");
    format!("\"{}\"", escaped)
}
