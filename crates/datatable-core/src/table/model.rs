use crate::markup::Node;
use crate::sort::IndicatorState;
use crate::sort_indicator::SortIndicator;
use crate::value::CellValue;

/// Everything a surface needs to draw one render pass of a table.
///
/// Produced by [`super::Table::model`]; the HTML and terminal surfaces both consume it, so they
/// always agree on labels, indicator states and cell contents.
#[derive(Clone, Debug, PartialEq)]
pub struct TableModel {
    pub headers: Vec<HeaderCell>,
    /// One entry per field when the filter row is shown.
    pub filters: Option<Vec<Option<Node>>>,
    pub body: Body,
}

impl TableModel {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    /// Present when the column shows a sort indicator.
    pub indicator: Option<IndicatorModel>,
}

impl HeaderCell {
    pub fn sort_indicator(&self) -> Option<SortIndicator<'_>> {
        self.indicator.map(|ind| {
            SortIndicator::new(&self.key)
                .disabled(ind.disabled)
                .state(ind.state)
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorModel {
    pub disabled: bool,
    pub state: IndicatorState,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Rows(Vec<RowModel>),
    /// No items: a single placeholder row spanning `colspan` columns.
    Empty { colspan: usize, message: String },
}

impl Body {
    pub fn rows(&self) -> &[RowModel] {
        match self {
            Body::Rows(rows) => rows,
            Body::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowModel {
    /// Position of the item in the slice passed to the render call.
    pub index: usize,
    /// Row key, unique within the render pass.
    pub key: String,
    /// One resolved value per field.
    pub cells: Vec<CellValue>,
}
