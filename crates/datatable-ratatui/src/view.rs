use crate::render;
use crate::theme::Theme;
use datatable_core::event::MouseEvent;
use datatable_core::event::TableAction;
use datatable_core::event::TableEvent;
use datatable_core::record::Record;
use datatable_core::sort::IndicatorState;
use datatable_core::sort::SortControl;
use datatable_core::table::Body;
use datatable_core::table::Table;
use datatable_core::table::TableModel;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Columns taken by a sort indicator: a space plus the two arrows.
const INDICATOR_WIDTH: usize = 3;

/// Options for [`TableView`].
#[derive(Clone, Debug)]
pub struct TableViewOptions {
    pub min_col_width: u16,
    pub max_col_width: u16,
    /// Draws a rule between the header and the rest of the table.
    pub show_header_separator: bool,
}

impl Default for TableViewOptions {
    fn default() -> Self {
        Self {
            min_col_width: 3,
            max_col_width: 32,
            show_header_separator: true,
        }
    }
}

/// What a screen cell maps back to after a render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Sort { column: String, control: SortControl },
    Row(usize),
}

/// Draws a [`Table`] into a ratatui [`Buffer`] and maps mouse clicks back to table events.
///
/// The view keeps no data of its own: every `render` rebuilds the table model from the items
/// passed in and records where the sort controls and rows landed, so `handle_mouse` always
/// resolves clicks against the last frame.
#[derive(Debug, Default)]
pub struct TableView {
    options: TableViewOptions,
    hits: Vec<(Rect, HitTarget)>,
}

struct Layout {
    x: Vec<u16>,
    widths: Vec<u16>,
    total: u16,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TableViewOptions) -> Self {
        Self {
            options,
            hits: Vec::new(),
        }
    }

    pub fn options(&self) -> &TableViewOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TableViewOptions) {
        self.options = options;
    }

    /// Clickable regions recorded by the last render.
    pub fn hits(&self) -> &[(Rect, HitTarget)] {
        &self.hits
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<&HitTarget> {
        self.hits
            .iter()
            .find(|(rect, _)| {
                x >= rect.x
                    && x < rect.x.saturating_add(rect.width)
                    && y >= rect.y
                    && y < rect.y.saturating_add(rect.height)
            })
            .map(|(_, target)| target)
    }

    /// Routes a mouse event through the table. Only left-button presses do anything.
    pub fn handle_mouse<T: Record>(
        &self,
        table: &mut Table<T>,
        items: &[T],
        mouse: MouseEvent,
    ) -> TableAction {
        if !mouse.is_left_click() {
            return TableAction::None;
        }
        let event = match self.hit_test(mouse.x, mouse.y) {
            Some(HitTarget::Sort { column, control }) => TableEvent::sort_click(column, *control),
            Some(HitTarget::Row(index)) => TableEvent::row_click(*index, mouse),
            None => {
                log::trace!("[table-view] click at ({}, {}) hit nothing", mouse.x, mouse.y);
                return TableAction::None;
            }
        };
        table.handle_event(items, event)
    }

    pub fn render<T: Record>(
        &mut self,
        table: &Table<T>,
        items: &[T],
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
    ) {
        self.hits.clear();
        if area.width == 0 || area.height == 0 {
            return;
        }
        let model = table.model(items);
        if model.column_count() == 0 {
            return;
        }
        buf.set_style(area, theme.text_primary);

        let border = table.options().border;
        let layout = self.layout(&model, border, area);
        let mut y = area.y;

        self.render_header(&model, &layout, border, area, y, buf, theme);
        y += 1;

        if self.options.show_header_separator && y < area.bottom() {
            render_rule(&layout, border, area, y, buf, theme.border);
            y += 1;
        }

        if let Some(filters) = &model.filters {
            if y < area.bottom() {
                let texts: Vec<String> = filters
                    .iter()
                    .map(|slot| slot.as_ref().map(|n| n.text_content()).unwrap_or_default())
                    .collect();
                render_line(&layout, border, area, y, buf, &texts, theme.text_muted, theme);
                y += 1;
            }
        }

        match &model.body {
            Body::Rows(rows) => {
                let striped = table.options().striped;
                for (n, row) in rows.iter().enumerate() {
                    if y >= area.bottom() {
                        break;
                    }
                    let style = if striped && n % 2 == 1 {
                        theme.text_primary.patch(theme.stripe)
                    } else {
                        theme.text_primary
                    };
                    let texts: Vec<String> =
                        row.cells.iter().map(|c| c.to_text().into_owned()).collect();
                    render_line(&layout, border, area, y, buf, &texts, style, theme);
                    let width = layout.total.min(area.width);
                    self.hits
                        .push((Rect::new(area.x, y, width, 1), HitTarget::Row(row.index)));
                    y += 1;
                }
            }
            Body::Empty { message, .. } => {
                if y < area.bottom() {
                    let text = format!("{message} {}", theme.empty_icon);
                    let avail = layout.total.min(area.width);
                    let w = (render::display_width(&text) as u16).min(avail);
                    let x = area.x + (avail - w) / 2;
                    render::render_str_clipped(x, y, w, buf, &text, theme.text_muted);
                }
            }
        }
    }

    fn layout(&self, model: &TableModel, border: bool, area: Rect) -> Layout {
        let mut widths: Vec<usize> = model
            .headers
            .iter()
            .map(|h| {
                render::display_width(&h.label)
                    + if h.indicator.is_some() {
                        INDICATOR_WIDTH
                    } else {
                        0
                    }
            })
            .collect();
        if let Some(filters) = &model.filters {
            for (w, slot) in widths.iter_mut().zip(filters) {
                if let Some(node) = slot {
                    *w = (*w).max(render::display_width(&node.text_content()));
                }
            }
        }
        for row in model.body.rows() {
            for (w, cell) in widths.iter_mut().zip(&row.cells) {
                *w = (*w).max(render::display_width(&cell.to_text()));
            }
        }

        let min = self.options.min_col_width as usize;
        let max = (self.options.max_col_width as usize).max(min);
        let gap = gap_width(border);
        let mut x = Vec::with_capacity(widths.len());
        let mut cursor = area.x;
        let widths: Vec<u16> = widths
            .into_iter()
            .zip(&model.headers)
            .map(|(w, header)| {
                let mut w = w.clamp(min, max);
                // Sort arrows are never clipped away.
                if header.indicator.is_some() {
                    w = w.max(INDICATOR_WIDTH);
                }
                let w = w as u16;
                x.push(cursor);
                cursor = cursor.saturating_add(w).saturating_add(gap);
                w
            })
            .collect();
        let total = cursor.saturating_sub(area.x).saturating_sub(gap);
        Layout { x, widths, total }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_header(
        &mut self,
        model: &TableModel,
        layout: &Layout,
        border: bool,
        area: Rect,
        y: u16,
        buf: &mut Buffer,
        theme: &Theme,
    ) {
        for (i, header) in model.headers.iter().enumerate() {
            let x = layout.x[i];
            let width = layout.widths[i];
            if x >= area.right() {
                break;
            }
            let indicator = header.sort_indicator();
            let label_width = if indicator.is_some() {
                width.saturating_sub(INDICATOR_WIDTH as u16)
            } else {
                width
            };
            render_cell(x, y, label_width, area, buf, &header.label, theme.header);

            if let Some(indicator) = indicator {
                let state = indicator.visual_state();
                let controls = [
                    (SortControl::Up, &theme.sort_up, IndicatorState::Ascending),
                    (SortControl::Down, &theme.sort_down, IndicatorState::Descending),
                ];
                let mut cx = x.saturating_add(width.saturating_sub(2));
                for (control, glyph, active) in controls {
                    if cx < area.right() {
                        let style = if state == active {
                            theme.accent
                        } else {
                            theme.text_muted
                        };
                        render::render_str_clipped(cx, y, 1, buf, glyph, style);
                        if !indicator.is_disabled() {
                            self.hits.push((
                                Rect::new(cx, y, 1, 1),
                                HitTarget::Sort {
                                    column: header.key.clone(),
                                    control,
                                },
                            ));
                        }
                    }
                    cx = cx.saturating_add(1);
                }
            }

            if border && i + 1 < layout.widths.len() {
                render_separator(separator_x(x, width), y, area, buf, "│", theme.border);
            }
        }
    }
}

fn gap_width(border: bool) -> u16 {
    if border { 3 } else { 2 }
}

fn separator_x(x: u16, width: u16) -> u16 {
    x.saturating_add(width).saturating_add(1)
}

fn render_cell(
    x: u16,
    y: u16,
    width: u16,
    area: Rect,
    buf: &mut Buffer,
    text: &str,
    style: Style,
) {
    if x >= area.right() {
        return;
    }
    let avail = width.min(area.right() - x);
    render::render_str_clipped(x, y, avail, buf, text, style);
}

fn render_separator(x: u16, y: u16, area: Rect, buf: &mut Buffer, symbol: &str, style: Style) {
    if x < area.right() {
        render::fill_line(x, y, 1, buf, symbol, style);
    }
}

#[allow(clippy::too_many_arguments)]
fn render_line(
    layout: &Layout,
    border: bool,
    area: Rect,
    y: u16,
    buf: &mut Buffer,
    texts: &[String],
    style: Style,
    theme: &Theme,
) {
    let last = layout.widths.len().saturating_sub(1);
    for (i, text) in texts.iter().enumerate() {
        let x = layout.x[i];
        render_cell(x, y, layout.widths[i], area, buf, text, style);
        if border && i < last {
            render_separator(separator_x(x, layout.widths[i]), y, area, buf, "│", theme.border);
        }
    }
}

fn render_rule(layout: &Layout, border: bool, area: Rect, y: u16, buf: &mut Buffer, style: Style) {
    let width = layout.total.min(area.width);
    render::fill_line(area.x, y, width, buf, "─", style);
    if border {
        let last = layout.widths.len().saturating_sub(1);
        for i in 0..last {
            let x = separator_x(layout.x[i], layout.widths[i]);
            render_separator(x, y, area, buf, "┼", style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datatable_core::event::MouseButton;
    use datatable_core::sort::SortDirection;
    use datatable_core::sort::SortState;
    use datatable_core::value::CellValue;
    use std::borrow::Cow;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Person {
        id: u32,
        name: &'static str,
        age: i64,
    }

    impl Record for Person {
        fn row_key(&self) -> Cow<'_, str> {
            Cow::Owned(self.id.to_string())
        }

        fn value(&self, key: &str) -> CellValue {
            match key {
                "name" => self.name.into(),
                "age" => self.age.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn people() -> Vec<Person> {
        vec![
            Person {
                id: 1,
                name: "Ada",
                age: 36,
            },
            Person {
                id: 2,
                name: "Grace",
                age: 45,
            },
        ]
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn sort_hit(view: &TableView, column: &str, control: SortControl) -> Rect {
        view.hits()
            .iter()
            .find(|(_, t)| {
                *t == HitTarget::Sort {
                    column: column.to_string(),
                    control,
                }
            })
            .map(|(r, _)| *r)
            .unwrap()
    }

    #[test]
    fn draws_header_rule_and_rows() {
        let table = Table::builder(["name", "age"]).sorter(true).build().unwrap();
        let mut view = TableView::new();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        view.render(&table, &people(), area, &mut buf, &Theme::default());

        assert_eq!(row_text(&buf, 0), "Name ▲▼ │ Age ▲▼");
        assert_eq!(row_text(&buf, 1), "────────┼───────");
        assert_eq!(row_text(&buf, 2), "Ada     │ 36");
        assert_eq!(row_text(&buf, 3), "Grace   │ 45");
        assert_eq!(row_text(&buf, 4), "");
    }

    #[test]
    fn clicking_down_arrow_requests_descending() {
        let mut table = Table::builder(["name", "age"]).sorter(true).build().unwrap();
        let items = people();
        let mut view = TableView::new();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        view.render(&table, &items, area, &mut buf, &Theme::default());

        let down = sort_hit(&view, "age", SortControl::Down);
        let action = view.handle_mouse(&mut table, &items, MouseEvent::click(down.x, down.y));
        assert_eq!(
            action,
            TableAction::SortChanged(SortState::new("age", SortDirection::Descending))
        );

        // Same control again is a no-op once the next frame shows it active.
        view.render(&table, &items, area, &mut buf, &Theme::default());
        let down = sort_hit(&view, "age", SortControl::Down);
        let action = view.handle_mouse(&mut table, &items, MouseEvent::click(down.x, down.y));
        assert_eq!(action, TableAction::None);
    }

    #[test]
    fn only_left_presses_are_handled() {
        let mut table = Table::builder(["name"]).sorter(true).build().unwrap();
        let items = people();
        let mut view = TableView::new();
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        view.render(&table, &items, area, &mut buf, &Theme::default());

        let up = sort_hit(&view, "name", SortControl::Up);
        let right = MouseEvent::click(up.x, up.y).with_button(MouseButton::Right);
        assert_eq!(view.handle_mouse(&mut table, &items, right), TableAction::None);
        assert!(!table.sort_state().is_active());
    }

    #[test]
    fn empty_table_centers_message_and_has_no_sort_targets() {
        let table = Table::<Person>::builder(["name", "age"])
            .sorter(true)
            .build()
            .unwrap();
        let mut view = TableView::new();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        view.render(&table, &[], area, &mut buf, &Theme::default());

        assert_eq!(row_text(&buf, 2), "   No items ⊘");
        assert!(view.hits().is_empty());
    }

    #[test]
    fn row_clicks_reach_the_callback() {
        let clicked = Rc::new(RefCell::new(Vec::new()));
        let sink = clicked.clone();
        let mut table = Table::builder(["name", "age"])
            .clickable_rows(true)
            .on_row_click(move |p: &Person, index, _mouse| sink.borrow_mut().push((p.id, index)))
            .build()
            .unwrap();
        let items = people();
        let mut view = TableView::new();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        view.render(&table, &items, area, &mut buf, &Theme::default());

        assert_eq!(view.hit_test(3, 3), Some(&HitTarget::Row(1)));
        let action = view.handle_mouse(&mut table, &items, MouseEvent::click(3, 3));
        assert_eq!(action, TableAction::RowClicked(1));
        assert_eq!(*clicked.borrow(), vec![(2, 1)]);
    }

    #[test]
    fn narrow_columns_keep_their_sort_arrows() {
        let mut table = Table::builder(["name"]).sorter(true).build().unwrap();
        let items = people();
        let mut view = TableView::with_options(TableViewOptions {
            min_col_width: 1,
            max_col_width: 1,
            ..TableViewOptions::default()
        });
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        view.render(&table, &items, area, &mut buf, &Theme::default());

        assert_eq!(row_text(&buf, 0), " ▲▼");
        assert_eq!(row_text(&buf, 1), "───");
        assert_eq!(row_text(&buf, 3), "Gra");

        let down = sort_hit(&view, "name", SortControl::Down);
        assert_eq!((down.x, down.y), (2, 0));
        let action = view.handle_mouse(&mut table, &items, MouseEvent::click(down.x, down.y));
        assert_eq!(
            action,
            TableAction::SortChanged(SortState::new("name", SortDirection::Descending))
        );
    }

    #[test]
    fn borderless_tables_drop_separators() {
        let table = Table::builder(["name", "age"])
            .border(false)
            .build()
            .unwrap();
        let mut view = TableView::with_options(TableViewOptions {
            show_header_separator: false,
            ..TableViewOptions::default()
        });
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        view.render(&table, &people(), area, &mut buf, &Theme::default());

        assert_eq!(row_text(&buf, 0), "Name   Age");
        assert_eq!(row_text(&buf, 1), "Ada    36");
    }
}
