use serde::Deserialize;
use serde::Serialize;

/// Table-level switches.
///
/// Deserializable so a host can keep them in its own configuration; missing keys take the
/// defaults below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Adds the `table-bordered` class.
    pub border: bool,
    /// Enables the filter row (it still needs at least one filter slot to render).
    pub column_filter: bool,
    /// Enables sort indicators in the header.
    pub sorter: bool,
    /// Shows a pointer cursor over rows. Styling only.
    pub clickable_rows: bool,
    pub striped: bool,
    pub hover: bool,
    /// Additional classes for the `table` element.
    pub extra_classes: Vec<String>,
    /// Message of the empty-state row.
    pub empty_message: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            border: true,
            column_filter: false,
            sorter: false,
            clickable_rows: false,
            striped: true,
            hover: true,
            extra_classes: Vec::new(),
            empty_message: "No items".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = TableOptions::default();
        assert!(o.border);
        assert!(!o.column_filter);
        assert!(!o.sorter);
        assert!(!o.clickable_rows);
        assert_eq!(o.empty_message, "No items");
    }

    #[test]
    fn loads_partial_json() {
        let o: TableOptions =
            serde_json::from_str(r#"{"sorter": true, "border": false, "extra_classes": ["compact"]}"#)
                .unwrap();
        assert!(o.sorter);
        assert!(!o.border);
        assert!(o.striped);
        assert_eq!(o.extra_classes, vec!["compact".to_string()]);
    }
}
