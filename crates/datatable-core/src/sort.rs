//! Sort intent types.

use serde::Deserialize;
use serde::Serialize;

/// The direction a sort indicator asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_asc(asc: bool) -> Self {
        if asc {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Ascending)
    }

    /// Short name used in markup data attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// The three states a sort indicator can display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IndicatorState {
    Ascending,
    Descending,
    /// The column is not the active sort column.
    #[default]
    Neutral,
}

impl From<SortDirection> for IndicatorState {
    fn from(value: SortDirection) -> Self {
        match value {
            SortDirection::Ascending => IndicatorState::Ascending,
            SortDirection::Descending => IndicatorState::Descending,
        }
    }
}

impl From<Option<SortDirection>> for IndicatorState {
    fn from(value: Option<SortDirection>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// The two click targets of a sort indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortControl {
    Up,
    Down,
}

impl SortControl {
    /// The direction this control requests.
    pub fn direction(self) -> SortDirection {
        match self {
            SortControl::Up => SortDirection::Ascending,
            SortControl::Down => SortDirection::Descending,
        }
    }
}

impl From<SortDirection> for SortControl {
    fn from(value: SortDirection) -> Self {
        match value {
            SortDirection::Ascending => SortControl::Up,
            SortDirection::Descending => SortControl::Down,
        }
    }
}

/// The active sort column and direction of a table.
///
/// Advisory only: the table reports it to the caller and never reorders items itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub column: String,
    pub asc: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: String::new(),
            asc: true,
        }
    }
}

impl SortState {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            asc: direction.is_ascending(),
        }
    }

    pub fn direction(&self) -> SortDirection {
        SortDirection::from_asc(self.asc)
    }

    /// `false` until a sort indicator has been clicked.
    pub fn is_active(&self) -> bool {
        !self.column.is_empty()
    }

    /// The indicator state for the column `key`.
    pub fn indicator_for(&self, key: &str) -> IndicatorState {
        if self.is_active() && self.column == key {
            self.direction().into()
        } else {
            IndicatorState::Neutral
        }
    }
}
