use std::borrow::Cow;

use crate::markup::Element;
use crate::markup::Node;

/// The content of one data cell.
///
/// Booleans are the only coerced variant: they render as the text `true` / `false`. Everything
/// else renders as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Markup(Node),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Markup(node) => node.is_empty(),
            CellValue::Bool(_) | CellValue::Int(_) | CellValue::Float(_) => false,
        }
    }

    /// Converts the value into a renderable node.
    pub fn to_node(&self) -> Node {
        match self {
            CellValue::Empty => Node::empty(),
            CellValue::Markup(node) => node.clone(),
            _ => Node::Text(self.to_text().into_owned()),
        }
    }

    /// Plain-text form of the value. Markup contributes its text content.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Empty => Cow::Borrowed(""),
            CellValue::Text(s) => Cow::Borrowed(s),
            CellValue::Bool(true) => Cow::Borrowed("true"),
            CellValue::Bool(false) => Cow::Borrowed("false"),
            CellValue::Int(n) => Cow::Owned(n.to_string()),
            CellValue::Float(n) => Cow::Owned(n.to_string()),
            CellValue::Markup(node) => Cow::Owned(node.text_content()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(value.into())
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Int(value.into())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<Node> for CellValue {
    fn from(value: Node) -> Self {
        CellValue::Markup(value)
    }
}

impl From<Element> for CellValue {
    fn from(value: Element) -> Self {
        CellValue::Markup(value.into())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
