//! The data table component.
//!
//! A [`Table`] owns its field list, its options and one piece of state: the current
//! [`SortState`]. Items are passed to every render and event call, because sorting them is the
//! caller's job; the table only reports the sort intent through [`TableAction::SortChanged`] and
//! the `on_sort_change` callback.
//!
//! ```
//! use datatable_core::event::TableAction;
//! use datatable_core::event::TableEvent;
//! use datatable_core::record::JsonRecord;
//! use datatable_core::sort::SortControl;
//! use datatable_core::table::Table;
//! use serde_json::json;
//!
//! let mut items = JsonRecord::from_array(
//!     json!([{"id": 1, "name": "b"}, {"id": 2, "name": "a"}]),
//!     "id",
//! )
//! .unwrap();
//!
//! let mut table = Table::builder(["id", "name"]).sorter(true).build().unwrap();
//!
//! let action = table.handle_event(&items, TableEvent::sort_click("name", SortControl::Up));
//! if let TableAction::SortChanged(state) = action {
//!     items.sort_by_key(|r| r.fields()[&state.column].to_string());
//! }
//! assert!(table.to_html(&items).contains("<td>a</td>"));
//! ```

mod builder;
mod model;
mod render;

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;

use crate::event::MouseEvent;
use crate::event::TableAction;
use crate::event::TableEvent;
use crate::field::Field;
use crate::field::FieldSpec;
use crate::icons::IconSet;
use crate::markup::Attrs;
use crate::markup::Node;
use crate::options::TableOptions;
use crate::record::Record;
use crate::sort::SortControl;
use crate::sort::SortState;
use crate::sort_indicator::SortIndicator;
use crate::theme::ClassNames;
use crate::value::CellValue;

pub use builder::TableBuilder;
pub use model::Body;
pub use model::HeaderCell;
pub use model::IndicatorModel;
pub use model::RowModel;
pub use model::TableModel;

pub type SortCallback = Box<dyn FnMut(&SortState)>;
pub type RowClickCallback<T> = Box<dyn FnMut(&T, usize, &MouseEvent)>;
pub type ScopedSlot<T> = Box<dyn Fn(&T) -> CellValue>;
pub type RowPropsFn<T> = Box<dyn Fn(&T) -> Attrs>;

pub struct Table<T> {
    fields: Vec<Field>,
    options: TableOptions,
    class_names: ClassNames,
    icons: Box<dyn IconSet>,
    filter_slots: BTreeMap<String, Node>,
    scoped_slots: HashMap<String, ScopedSlot<T>>,
    on_sort_change: Option<SortCallback>,
    on_row_click: Option<RowClickCallback<T>>,
    row_props: Option<RowPropsFn<T>>,
    sort: SortState,
}

impl<T> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut slots: Vec<_> = self.scoped_slots.keys().collect();
        slots.sort();
        f.debug_struct("Table")
            .field("fields", &self.fields)
            .field("options", &self.options)
            .field("filter_slots", &self.filter_slots)
            .field("scoped_slots", &slots)
            .field("sort", &self.sort)
            .finish_non_exhaustive()
    }
}

impl<T> Table<T> {
    pub fn builder<I>(fields: I) -> TableBuilder<T>
    where
        I: IntoIterator,
        I::Item: Into<FieldSpec>,
    {
        TableBuilder::new(fields)
    }

    /// The normalized field list.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn class_names(&self) -> &ClassNames {
        &self.class_names
    }

    pub fn icons(&self) -> &dyn IconSet {
        self.icons.as_ref()
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Sets or replaces the filter-row content for column `key`.
    pub fn set_column_filter_slot(&mut self, key: impl Into<String>, slot: impl Into<Node>) {
        self.filter_slots.insert(key.into(), slot.into());
    }

    pub fn remove_column_filter_slot(&mut self, key: &str) -> Option<Node> {
        self.filter_slots.remove(key)
    }

    /// Whether the filter row is rendered.
    pub fn shows_filter_row(&self) -> bool {
        self.options.column_filter && !self.filter_slots.is_empty()
    }

    fn indicator_for<'a>(&self, field: &'a Field, item_count: usize) -> Option<SortIndicator<'a>> {
        if !field.is_sortable(self.options.sorter) {
            return None;
        }
        Some(
            SortIndicator::new(&field.key)
                .disabled(item_count == 0)
                .state(self.sort.indicator_for(&field.key)),
        )
    }

    /// The only place the sort state changes.
    fn apply_sort(&mut self, state: SortState) -> TableAction {
        log::debug!(
            "[table] sort changed: column={} asc={} (was column={:?} asc={})",
            state.column,
            state.asc,
            self.sort.column,
            self.sort.asc
        );
        self.sort = state.clone();
        if let Some(on_change) = self.on_sort_change.as_mut() {
            on_change(&state);
        }
        TableAction::SortChanged(state)
    }
}

impl<T: Record> Table<T> {
    /// Computes the content of one render pass over `items`.
    pub fn model(&self, items: &[T]) -> TableModel {
        let headers = self
            .fields
            .iter()
            .map(|field| HeaderCell {
                key: field.key.clone(),
                label: field.resolved_label(),
                indicator: self
                    .indicator_for(field, items.len())
                    .map(|ind| IndicatorModel {
                        disabled: ind.is_disabled(),
                        state: ind.indicator_state(),
                    }),
            })
            .collect();

        let filters = self.shows_filter_row().then(|| {
            self.fields
                .iter()
                .map(|field| self.filter_slots.get(&field.key).cloned())
                .collect()
        });

        let body = if items.is_empty() {
            Body::Empty {
                colspan: self.fields.len(),
                message: self.options.empty_message.clone(),
            }
        } else {
            Body::Rows(self.row_models(items))
        };

        TableModel {
            headers,
            filters,
            body,
        }
    }

    fn row_models(&self, items: &[T]) -> Vec<RowModel> {
        let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let base = item.row_key();
                let mut key = base.to_string();
                if seen.contains(&key) {
                    log::warn!(
                        "[table] duplicate row key {:?} at index {index}; rows should carry unique ids",
                        base
                    );
                    key = format!("{base}#{index}");
                    let mut bump = 1usize;
                    while seen.contains(&key) {
                        key = format!("{base}#{index}.{bump}");
                        bump += 1;
                    }
                }
                seen.insert(key.clone());
                RowModel {
                    index,
                    key,
                    cells: self.fields.iter().map(|f| self.cell_value(item, f)).collect(),
                }
            })
            .collect()
    }

    /// The scoped slot result for the field's key when one is registered, else the raw value.
    pub fn cell_value(&self, item: &T, field: &Field) -> CellValue {
        match self.scoped_slots.get(&field.key) {
            Some(slot) => slot(item),
            None => item.value(&field.key),
        }
    }

    /// Applies an input event.
    ///
    /// Sort clicks are resolved through the column's [`SortIndicator`], so clicks on columns
    /// without an indicator, on a disabled indicator, or on the already active direction do
    /// nothing. Row clicks run the `on_row_click` callback when one is configured.
    pub fn handle_event(&mut self, items: &[T], event: TableEvent) -> TableAction {
        match event {
            TableEvent::SortClick { column, control } => {
                self.handle_sort_click(items.len(), &column, control)
            }
            TableEvent::RowClick { index, mouse } => self.handle_row_click(items, index, &mouse),
        }
    }

    fn handle_sort_click(
        &mut self,
        item_count: usize,
        column: &str,
        control: SortControl,
    ) -> TableAction {
        let Some(field) = self.field(column) else {
            log::trace!("[table] sort click on unknown column {column:?}");
            return TableAction::None;
        };
        let Some(direction) = self
            .indicator_for(field, item_count)
            .and_then(|ind| ind.click(control))
        else {
            return TableAction::None;
        };
        self.apply_sort(SortState::new(column, direction))
    }

    fn handle_row_click(&mut self, items: &[T], index: usize, mouse: &MouseEvent) -> TableAction {
        let Some(item) = items.get(index) else {
            return TableAction::None;
        };
        let Some(on_click) = self.on_row_click.as_mut() else {
            return TableAction::None;
        };
        log::debug!("[table] row {index} clicked (key={:?})", item.row_key());
        on_click(item, index, mouse);
        TableAction::RowClicked(index)
    }
}
