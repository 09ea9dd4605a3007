//! Column descriptors.

use crate::label::capitalize_first;
use crate::label::derive_label;
use crate::markup::Attrs;
use crate::markup::InlineStyle;

/// Configuration for one table column.
///
/// `key` identifies the column: it is used for the data lookup, for scoped slots and filter
/// slots, and as the sort column name. Keys must be unique within one table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub label: Option<String>,
    /// Whether this column takes part in column filtering. Informational for hosts; the filter
    /// row itself is driven by the table's `column_filter` option and slot map.
    pub filter: Option<bool>,
    /// `Some(false)` hides the sort indicator even when table-level sorting is on.
    pub sorter: Option<bool>,
    /// Attributes for the header cell.
    pub th: Attrs,
    /// Attributes for the filter-row cell.
    pub th_filter: Attrs,
    /// Attributes for every data cell of this column.
    pub td: Attrs,
    /// Inline style applied to the header cell.
    pub style: InlineStyle,
}

impl Field {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn filter(mut self, filter: bool) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sorter(mut self, sorter: bool) -> Self {
        self.sorter = Some(sorter);
        self
    }

    pub fn th(mut self, attrs: Attrs) -> Self {
        self.th = attrs;
        self
    }

    pub fn th_filter(mut self, attrs: Attrs) -> Self {
        self.th_filter = attrs;
        self
    }

    pub fn td(mut self, attrs: Attrs) -> Self {
        self.td = attrs;
        self
    }

    pub fn style(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }

    /// The header text: the explicit label when present and non-empty, otherwise the key with its
    /// first character upper-cased.
    pub fn resolved_label(&self) -> String {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => capitalize_first(&self.key),
        }
    }

    /// Whether the sort indicator is shown for this column given the table-level `sorter` flag.
    pub fn is_sortable(&self, table_sorter: bool) -> bool {
        table_sorter && self.sorter != Some(false)
    }

    /// Attributes of the header cell with [`Field::style`] merged into its `style`.
    pub fn header_attrs(&self) -> Attrs {
        let mut attrs = self.th.clone();
        if !self.style.is_empty() {
            attrs.merge(&Attrs::new().with("style", self.style.clone()));
        }
        attrs
    }
}

/// A field as declared by the caller: a bare key or a full descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldSpec {
    Key(String),
    Field(Field),
}

impl FieldSpec {
    /// Expands a bare key into a descriptor whose label is derived from the key.
    pub fn normalize(self) -> Field {
        match self {
            FieldSpec::Key(key) => {
                let label = derive_label(&key);
                Field::new(key).label(label)
            }
            FieldSpec::Field(field) => field,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            FieldSpec::Key(key) => key,
            FieldSpec::Field(field) => &field.key,
        }
    }
}

impl From<&str> for FieldSpec {
    fn from(value: &str) -> Self {
        FieldSpec::Key(value.to_string())
    }
}

impl From<String> for FieldSpec {
    fn from(value: String) -> Self {
        FieldSpec::Key(value)
    }
}

impl From<Field> for FieldSpec {
    fn from(value: Field) -> Self {
        FieldSpec::Field(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::AttrValue;

    #[test]
    fn bare_keys_get_derived_labels() {
        let field = FieldSpec::from("userName").normalize();
        assert_eq!(field.key, "userName");
        assert_eq!(field.resolved_label(), "User Name");
    }

    #[test]
    fn structured_fields_without_label_only_capitalize() {
        let field = FieldSpec::from(Field::new("userName")).normalize();
        assert_eq!(field.resolved_label(), "UserName");
        let field = Field::new("userName").label("");
        assert_eq!(field.resolved_label(), "UserName");
        let field = Field::new("userName").label("Login");
        assert_eq!(field.resolved_label(), "Login");
    }

    #[test]
    fn sorter_flag_only_disables() {
        assert!(Field::new("a").is_sortable(true));
        assert!(Field::new("a").sorter(true).is_sortable(true));
        assert!(!Field::new("a").sorter(false).is_sortable(true));
        assert!(!Field::new("a").sorter(true).is_sortable(false));
    }

    #[test]
    fn header_attrs_merge_style() {
        let field = Field::new("a")
            .th(Attrs::new().with("style", InlineStyle::new().with("color", "red")))
            .style(InlineStyle::new().with("width", "20%"));
        let attrs = field.header_attrs();
        assert_eq!(
            attrs.get("style").map(AttrValue::as_text).as_deref(),
            Some("color: red; width: 20%")
        );
    }
}
