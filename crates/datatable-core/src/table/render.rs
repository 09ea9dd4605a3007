use crate::field::Field;
use crate::html;
use crate::markup::Attrs;
use crate::markup::Element;
use crate::markup::InlineStyle;
use crate::markup::Node;
use crate::record::Record;
use crate::theme::join_classes;

use super::Body;
use super::HeaderCell;
use super::Table;
use super::TableModel;

/// Height given to header content without a sort indicator, so all header cells line up.
const PLAIN_HEADER_HEIGHT: &str = "36px";

impl<T: Record> Table<T> {
    /// Renders the table markup for `items`.
    ///
    /// The structure is `div > table > (thead, tbody)`; `thead` holds the header row and, when
    /// enabled, the filter row.
    pub fn render(&self, items: &[T]) -> Node {
        let model = self.model(items);
        log::trace!(
            "[table] render: {} columns, {} rows, filter_row={}",
            model.column_count(),
            items.len(),
            model.filters.is_some()
        );

        let mut thead = Element::new("thead").child(self.render_header_row(&model));
        if let Some(filters) = &model.filters {
            thead = thead.child(self.render_filter_row(filters));
        }

        let table = Element::new("table")
            .attr("class", self.table_class())
            .child(thead)
            .child(self.render_body(items, &model));

        Element::new("div")
            .class(&self.class_names.scroll_table)
            .child(table)
            .into()
    }

    /// Renders the table for `items` straight to HTML.
    pub fn to_html(&self, items: &[T]) -> String {
        html::to_html(&self.render(items))
    }

    fn table_class(&self) -> String {
        let o = &self.options;
        let flags = [
            ("table", true),
            ("table-striped", o.striped),
            ("table-hover", o.hover),
            ("table-bordered", o.border),
        ];
        join_classes(
            flags
                .iter()
                .filter(|(_, on)| *on)
                .map(|(class, _)| *class)
                .chain(o.extra_classes.iter().map(String::as_str)),
        )
    }

    fn render_header_row(&self, model: &TableModel) -> Element {
        let no_filter = if self.options.sorter {
            ""
        } else {
            self.class_names.no_filter.as_str()
        };
        Element::new("tr")
            .attr(
                "class",
                join_classes([self.class_names.row_header.as_str(), no_filter]),
            )
            .children(
                self.fields
                    .iter()
                    .zip(&model.headers)
                    .map(|(field, header)| self.render_header_cell(field, header)),
            )
    }

    fn render_header_cell(&self, field: &Field, header: &HeaderCell) -> Element {
        let indicator = header.sort_indicator();
        let mut content = Element::new("div");
        if indicator.is_none() {
            content = content.attr(
                "style",
                InlineStyle::new().with("height", PLAIN_HEADER_HEIGHT),
            );
        }
        content = content.child(
            Element::new("div")
                .attr("class", "d-inline")
                .child(header.label.as_str()),
        );
        if let Some(indicator) = indicator {
            content = content.child(indicator.render(&self.class_names, self.icons.as_ref()));
        }
        Element::new("th").attrs(&field.header_attrs()).child(content)
    }

    fn render_filter_row(&self, filters: &[Option<Node>]) -> Element {
        Element::new("tr")
            .class(&self.class_names.row_filter)
            .children(self.fields.iter().zip(filters).map(|(field, slot)| {
                Element::new("th")
                    .attrs(&field.th_filter)
                    .child(slot.clone().unwrap_or_default())
            }))
    }

    fn render_body(&self, items: &[T], model: &TableModel) -> Element {
        let mut tbody = Element::new("tbody");
        if self.options.clickable_rows && !items.is_empty() {
            tbody = tbody.attr("style", InlineStyle::new().with("cursor", "pointer"));
        }

        match &model.body {
            Body::Empty { colspan, message } => tbody.child(self.render_empty_row(*colspan, message)),
            Body::Rows(rows) => tbody.children(rows.iter().map(|row| {
                let item = &items[row.index];
                let mut attrs = Attrs::new().with("data-row-key", row.key.as_str());
                if self.on_row_click.is_some() {
                    attrs.set("data-row-index", row.index);
                }
                if let Some(row_props) = &self.row_props {
                    attrs.merge(&row_props(item));
                }
                Element::new("tr")
                    .attrs(&attrs)
                    .children(self.fields.iter().zip(&row.cells).map(|(field, cell)| {
                        Element::new("td").attrs(&field.td).child(cell.to_node())
                    }))
            })),
        }
    }

    fn render_empty_row(&self, colspan: usize, message: &str) -> Element {
        let heading = Element::new("h2")
            .child(message)
            .child(self.icons.empty());
        Element::new("tr").child(
            Element::new("td").attr("colspan", colspan).child(
                Element::new("div")
                    .attr("class", "text-center my-5")
                    .child(heading),
            ),
        )
    }
}
