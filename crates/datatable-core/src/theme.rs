use serde::Deserialize;
use serde::Serialize;

/// Class names applied to the generated markup.
///
/// Maps the table's structural roles onto a stylesheet. Swap the values to match whatever CSS
/// module the host ships; empty names are skipped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Scrolling wrapper around the `table` element.
    pub scroll_table: String,
    pub row_header: String,
    /// Added to the header row when table-level sorting is off.
    pub no_filter: String,
    pub row_filter: String,
    pub indicator_group: String,
    /// Added to an indicator group when its column sorts ascending.
    pub ascending: String,
    /// Added to an indicator group when its column sorts descending.
    pub descending: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            scroll_table: "scroll-table".to_string(),
            row_header: "row-header".to_string(),
            no_filter: "no-filter".to_string(),
            row_filter: "row-filter".to_string(),
            indicator_group: "indicator-group".to_string(),
            ascending: "asc".to_string(),
            descending: "desc".to_string(),
        }
    }
}

/// Joins non-empty class names with single spaces.
pub fn join_classes<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    classes
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
