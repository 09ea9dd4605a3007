//! HTML serialization for [`Node`] trees.

use std::fmt;
use std::fmt::Write;

use crate::markup::Element;
use crate::markup::Node;

/// Serializes `node` to an HTML string.
pub fn to_html(node: &Node) -> String {
    node.to_string()
}

/// Writes `node` as HTML into `out`.
///
/// Text and attribute values are escaped; [`Node::Raw`] is written verbatim. Attributes keep their
/// insertion order and no whitespace is added between elements.
pub fn write_html<W: Write>(node: &Node, out: &mut W) -> fmt::Result {
    match node {
        Node::Text(text) => write_escaped(out, text),
        Node::Raw(markup) => out.write_str(markup),
        Node::Fragment(children) => children.iter().try_for_each(|c| write_html(c, out)),
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element<W: Write>(el: &Element, out: &mut W) -> fmt::Result {
    write!(out, "<{}", el.tag())?;
    for (name, value) in el.attributes().iter() {
        if value.is_omitted() {
            continue;
        }
        write!(out, " {name}=\"")?;
        write_escaped(out, &value.as_text())?;
        out.write_char('"')?;
    }
    if el.is_void() {
        return out.write_str("/>");
    }
    out.write_char('>')?;
    for child in el.child_nodes() {
        write_html(child, out)?;
    }
    write!(out, "</{}>", el.tag())
}

/// Writes `input` with `&`, `<`, `>`, `"` and `'` replaced by entities.
pub fn write_escaped<W: Write>(out: &mut W, input: &str) -> fmt::Result {
    let mut last = 0;
    for (i, ch) in input.char_indices() {
        let entity = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#39;",
            _ => continue,
        };
        out.write_str(&input[last..i])?;
        out.write_str(entity)?;
        last = i + ch.len_utf8();
    }
    out.write_str(&input[last..])
}

/// Returns `input` HTML-escaped.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    // Writing into a `String` cannot fail.
    let _ = write_escaped(&mut out, input);
    out
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_html(self, f)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(self, f)
    }
}
