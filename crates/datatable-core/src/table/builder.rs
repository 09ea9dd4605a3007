use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;

use crate::error::TableError;
use crate::event::MouseEvent;
use crate::field::FieldSpec;
use crate::icons::IconSet;
use crate::icons::SvgIcons;
use crate::markup::Attrs;
use crate::markup::Node;
use crate::options::TableOptions;
use crate::sort::SortState;
use crate::theme::ClassNames;
use crate::value::CellValue;

use super::RowClickCallback;
use super::RowPropsFn;
use super::ScopedSlot;
use super::SortCallback;
use super::Table;

/// Builder for [`Table`]. Every setting except the field list is optional.
pub struct TableBuilder<T> {
    fields: Vec<FieldSpec>,
    options: TableOptions,
    class_names: ClassNames,
    icons: Box<dyn IconSet>,
    filter_slots: BTreeMap<String, Node>,
    scoped_slots: HashMap<String, ScopedSlot<T>>,
    on_sort_change: Option<SortCallback>,
    on_row_click: Option<RowClickCallback<T>>,
    row_props: Option<RowPropsFn<T>>,
}

impl<T> TableBuilder<T> {
    pub fn new<I>(fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldSpec>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            options: TableOptions::default(),
            class_names: ClassNames::default(),
            icons: Box::new(SvgIcons),
            filter_slots: BTreeMap::new(),
            scoped_slots: HashMap::new(),
            on_sort_change: None,
            on_row_click: None,
            row_props: None,
        }
    }

    /// Replaces all table-level switches at once, e.g. with a set loaded from configuration.
    pub fn options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    pub fn border(mut self, border: bool) -> Self {
        self.options.border = border;
        self
    }

    pub fn column_filter(mut self, column_filter: bool) -> Self {
        self.options.column_filter = column_filter;
        self
    }

    /// Content of the filter-row cell for column `key`.
    pub fn column_filter_slot(mut self, key: impl Into<String>, slot: impl Into<Node>) -> Self {
        self.filter_slots.insert(key.into(), slot.into());
        self
    }

    pub fn sorter(mut self, sorter: bool) -> Self {
        self.options.sorter = sorter;
        self
    }

    /// Called with the new sort state every time a sort indicator fires.
    pub fn on_sort_change(mut self, f: impl FnMut(&SortState) + 'static) -> Self {
        self.on_sort_change = Some(Box::new(f));
        self
    }

    /// Custom cell renderer for column `key`. Overrides the raw property lookup for that column.
    pub fn scoped_slot<F, V>(mut self, key: impl Into<String>, slot: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> V + 'static,
        V: Into<CellValue>,
    {
        self.scoped_slots.insert(
            key.into(),
            Box::new(move |item: &T| -> CellValue { slot(item).into() }),
        );
        self
    }

    pub fn clickable_rows(mut self, clickable_rows: bool) -> Self {
        self.options.clickable_rows = clickable_rows;
        self
    }

    /// Called with `(item, row_index, event)` when a row is clicked.
    pub fn on_row_click(mut self, f: impl FnMut(&T, usize, &MouseEvent) + 'static) -> Self {
        self.on_row_click = Some(Box::new(f));
        self
    }

    /// Extra attributes merged onto each row element.
    pub fn row_props(mut self, f: impl Fn(&T) -> Attrs + 'static) -> Self {
        self.row_props = Some(Box::new(f));
        self
    }

    pub fn striped(mut self, striped: bool) -> Self {
        self.options.striped = striped;
        self
    }

    pub fn hover(mut self, hover: bool) -> Self {
        self.options.hover = hover;
        self
    }

    pub fn extra_class(mut self, class: impl Into<String>) -> Self {
        self.options.extra_classes.push(class.into());
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.options.empty_message = message.into();
        self
    }

    pub fn class_names(mut self, class_names: ClassNames) -> Self {
        self.class_names = class_names;
        self
    }

    pub fn icons(mut self, icons: impl IconSet + 'static) -> Self {
        self.icons = Box::new(icons);
        self
    }

    /// Normalizes the fields and creates the table with its initial sort state.
    ///
    /// Fails if a field key is empty or declared twice.
    pub fn build(self) -> Result<Table<T>, TableError> {
        let mut seen = HashSet::new();
        for (index, spec) in self.fields.iter().enumerate() {
            let key = spec.key();
            if key.is_empty() {
                return Err(TableError::EmptyKey { index });
            }
            if !seen.insert(key) {
                return Err(TableError::DuplicateKey(key.to_string()));
            }
        }

        let fields = self.fields.into_iter().map(FieldSpec::normalize).collect();
        Ok(Table {
            fields,
            options: self.options,
            class_names: self.class_names,
            icons: self.icons,
            filter_slots: self.filter_slots,
            scoped_slots: self.scoped_slots,
            on_sort_change: self.on_sort_change,
            on_row_click: self.on_row_click,
            row_props: self.row_props,
            sort: SortState::default(),
        })
    }
}
