//! A small element tree used as the renderable output of the table.
//!
//! The tree is deliberately framework-neutral: [`crate::html`] serializes it to HTML, and terminal
//! renderers only look at [`Node::text_content`].

use std::borrow::Cow;
use std::fmt;

/// Elements that never carry children and are written self-closing.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "path", "source",
    "track", "wbr",
];

/// Insertion-ordered CSS property map rendered as `prop: value; prop: value`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle {
    props: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`InlineStyle::set`].
    pub fn with(mut self, prop: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(prop, value);
        self
    }

    /// Sets `prop`, replacing an existing value in place.
    pub fn set(&mut self, prop: impl Into<String>, value: impl Into<String>) {
        let prop = prop.into();
        let value = value.into();
        match self.props.iter_mut().find(|(p, _)| *p == prop) {
            Some(slot) => slot.1 = value,
            None => self.props.push((prop, value)),
        }
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(p, _)| p == prop)
            .map(|(_, v)| v.as_str())
    }

    /// Applies every property of `other` on top of `self`.
    pub fn merge(&mut self, other: &InlineStyle) {
        for (prop, value) in &other.props {
            self.set(prop.clone(), value.clone());
        }
    }

    /// Returns `true` if no property has a non-empty value.
    pub fn is_empty(&self) -> bool {
        self.props.iter().all(|(_, v)| v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (prop, value) in self.props.iter().filter(|(_, v)| !v.is_empty()) {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{prop}: {value}")?;
            first = false;
        }
        Ok(())
    }
}

/// The value of one attribute in an [`Attrs`] bag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Style(InlineStyle),
}

impl AttrValue {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            AttrValue::Text(s) => Cow::Borrowed(s),
            AttrValue::Style(style) => Cow::Owned(style.to_string()),
        }
    }

    /// Empty style maps are omitted from the output entirely.
    pub(crate) fn is_omitted(&self) -> bool {
        matches!(self, AttrValue::Style(style) if style.is_empty())
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<usize> for AttrValue {
    fn from(value: usize) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<InlineStyle> for AttrValue {
    fn from(value: InlineStyle) -> Self {
        AttrValue::Style(value)
    }
}

/// Insertion-ordered attribute bag.
///
/// Setting an attribute that already exists replaces its value without moving it, which mirrors
/// how spreading props onto an element behaves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: Vec<(String, AttrValue)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attrs::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Appends a class to the `class` attribute, creating it if needed.
    pub fn add_class(&mut self, class: &str) {
        if class.is_empty() {
            return;
        }
        let joined = match self.get("class") {
            Some(AttrValue::Text(existing)) if !existing.is_empty() => {
                format!("{existing} {class}")
            }
            _ => class.to_string(),
        };
        self.set("class", joined);
    }

    /// Applies `other` on top of `self`: later values win, except that two `style` maps are merged
    /// property by property.
    pub fn merge(&mut self, other: &Attrs) {
        for (name, value) in &other.entries {
            if let AttrValue::Style(incoming) = value {
                if let Some((_, AttrValue::Style(existing))) =
                    self.entries.iter_mut().find(|(n, _)| n == name)
                {
                    existing.merge(incoming);
                    continue;
                }
            }
            self.set(name.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// An element with a tag name, attributes and children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Attrs,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Appends a class; empty class names are ignored.
    pub fn class(mut self, class: &str) -> Self {
        self.attrs.add_class(class);
        self
    }

    /// Merges a caller-supplied attribute bag onto this element.
    pub fn attrs(mut self, attrs: &Attrs) -> Self {
        self.attrs.merge(attrs);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &Attrs {
        &self.attrs
    }

    pub fn attributes_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    pub fn is_void(&self) -> bool {
        self.children.is_empty() && VOID_TAGS.contains(&self.tag.as_str())
    }

    /// Depth-first search for the first descendant element (or `self`) with `tag`.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(tag))
    }

    /// Collects every descendant element (including `self`) with `tag`, in document order.
    pub fn find_all<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
        if self.tag == tag {
            out.push(self);
        }
        for child in &self.children {
            child.find_all(tag, out);
        }
    }
}

/// A renderable node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text content; escaped on output.
    Text(String),
    /// Trusted markup written verbatim.
    Raw(String),
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }

    /// A node that renders nothing.
    pub fn empty() -> Self {
        Node::Fragment(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Node::Element(_) => false,
            Node::Text(s) | Node::Raw(s) => s.is_empty(),
            Node::Fragment(children) => children.iter().all(Node::is_empty),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Concatenated text of every `Text` descendant. `Raw` markup is skipped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(s),
            Node::Raw(_) => {}
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            Node::Fragment(children) => children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    pub fn find(&self, tag: &str) -> Option<&Element> {
        match self {
            Node::Element(el) => el.find(tag),
            Node::Fragment(children) => children.iter().find_map(|c| c.find(tag)),
            Node::Text(_) | Node::Raw(_) => None,
        }
    }

    pub fn find_all<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
        match self {
            Node::Element(el) => el.find_all(tag, out),
            Node::Fragment(children) => children.iter().for_each(|c| c.find_all(tag, out)),
            Node::Text(_) | Node::Raw(_) => {}
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::empty()
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Fragment(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attrs_replace_in_place() {
        let mut attrs = Attrs::new().with("id", "a").with("title", "t");
        attrs.set("id", "b");
        let names: Vec<_> = attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["id", "title"]);
        assert_eq!(attrs.get("id"), Some(&AttrValue::from("b")));
    }

    #[test]
    fn merge_combines_styles_and_overrides_text() {
        let mut base = Attrs::new()
            .with("class", "x")
            .with("style", InlineStyle::new().with("color", "red"));
        let incoming = Attrs::new()
            .with("class", "y")
            .with("style", InlineStyle::new().with("width", "10px"));
        base.merge(&incoming);

        assert_eq!(base.get("class"), Some(&AttrValue::from("y")));
        assert_eq!(
            base.get("style").map(|v| v.as_text().into_owned()),
            Some("color: red; width: 10px".to_string())
        );
    }

    #[test]
    fn add_class_appends() {
        let mut attrs = Attrs::new();
        attrs.add_class("a");
        attrs.add_class("");
        attrs.add_class("b");
        assert_eq!(attrs.get("class"), Some(&AttrValue::from("a b")));
    }

    #[test]
    fn text_content_skips_raw() {
        let node: Node = Element::new("h2")
            .child("No items")
            .child(Node::raw("<svg></svg>"))
            .into();
        assert_eq!(node.text_content(), "No items");
    }

    #[test]
    fn empty_fragments_are_empty() {
        assert!(Node::empty().is_empty());
        assert!(Node::Fragment(vec![Node::text(""), Node::empty()]).is_empty());
        assert!(!Node::from(Element::new("br")).is_empty());
    }

    #[test]
    fn inline_style_skips_blank_values() {
        let style = InlineStyle::new().with("height", "").with("cursor", "pointer");
        assert_eq!(style.to_string(), "cursor: pointer");
        assert!(InlineStyle::new().with("height", "").is_empty());
    }
}
