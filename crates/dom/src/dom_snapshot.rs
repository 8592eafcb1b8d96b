use crate::Node;
use std::fmt::{self, Write};

/// Deterministic line serialization of a tree for widget tests.
/// Not a public stable format; intended for internal test comparisons.
///
/// One line per node, indented two spaces per level. Attributes are written
/// in stored order, text leaves by their displayed value.
#[derive(Debug)]
pub struct DomSnapshot {
    lines: Vec<String>,
}

impl DomSnapshot {
    pub fn new(root: &Node) -> Self {
        let mut lines = Vec::new();
        walk_snapshot(root, 0, &mut lines);
        Self { lines }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for DomSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

fn walk_snapshot(node: &Node, depth: usize, out: &mut Vec<String>) {
    const INDENT_STEP: usize = 2;
    let mut line = " ".repeat(depth.saturating_mul(INDENT_STEP));
    write_node_line(&mut line, node);
    out.push(line);
    for child in node.children() {
        walk_snapshot(child, depth + 1, out);
    }
}

fn write_node_line(out: &mut String, node: &Node) {
    match node {
        Node::Document { doctype, .. } => {
            out.push_str("#document");
            if let Some(dt) = doctype {
                out.push_str(" doctype=\"");
                write_escaped(out, dt);
                out.push('"');
            }
        }
        Node::Element(element) => {
            out.push('<');
            out.push_str(element.name());
            for (attr, value) in element.attributes() {
                out.push(' ');
                out.push_str(attr);
                out.push_str("=\"");
                write_escaped(out, value);
                out.push('"');
            }
            out.push('>');
        }
        Node::Text(value) => {
            out.push('"');
            write_escaped(out, &value.to_string());
            out.push('"');
        }
    }
}

fn write_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ if ch.is_ascii() => out.push(ch),
            _ => {
                let _ = write!(out, "\\u{{{:X}}}", ch as u32);
            }
        }
    }
}
