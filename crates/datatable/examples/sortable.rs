use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use datatable::event::TableAction;
use datatable::record::JsonRecord;
use datatable::sort::SortState;
use datatable::table::Table;
use datatable::tui::crossterm_input::mouse_event_from_crossterm;
use datatable::tui::theme::Theme;
use datatable::tui::view::TableView;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use serde_json::Value;
use serde_json::json;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res
}

fn sample_items() -> Vec<JsonRecord> {
    let rows = json!([
        {"id": 1, "firstName": "Ada", "lastName": "Lovelace", "born": 1815, "admin": true},
        {"id": 2, "firstName": "Grace", "lastName": "Hopper", "born": 1906, "admin": false},
        {"id": 3, "firstName": "Linus", "lastName": "Torvalds", "born": 1969, "admin": false},
        {"id": 4, "firstName": "Barbara", "lastName": "Liskov", "born": 1939, "admin": true},
        {"id": 5, "firstName": "Ken", "lastName": "Thompson", "born": 1943, "admin": false},
    ]);
    JsonRecord::from_array(rows, "id").unwrap_or_default()
}

fn sort_items(items: &mut [JsonRecord], state: &SortState) {
    items.sort_by(|a, b| {
        let (a, b) = (a.fields().get(&state.column), b.fields().get(&state.column));
        match (a, b) {
            (Some(Value::Number(a)), Some(Value::Number(b))) => a
                .as_f64()
                .partial_cmp(&b.as_f64())
                .unwrap_or(std::cmp::Ordering::Equal),
            (a, b) => a.map(Value::to_string).cmp(&b.map(Value::to_string)),
        }
    });
    if !state.asc {
        items.reverse();
    }
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let theme = Theme::default();
    let mut items = sample_items();
    let status = Rc::new(RefCell::new(String::from("click ▲/▼ to sort, a row to select")));

    let sink = status.clone();
    let mut table = Table::builder(["firstName", "lastName", "born", "admin"])
        .sorter(true)
        .clickable_rows(true)
        .on_row_click(move |item: &JsonRecord, index, _| {
            *sink.borrow_mut() = format!("clicked row {index} (id {})", item.id());
        })
        .build()
        .map_err(io::Error::other)?;
    let mut view = TableView::new();

    loop {
        terminal.draw(|f| {
            let area = f.area();
            let block = Block::default()
                .title("datatable (mouse: sort/select, q: quit)")
                .borders(Borders::ALL);
            let inner = block.inner(area);
            f.render_widget(block, area);

            let buf = f.buffer_mut();
            let table_area = Rect::new(
                inner.x,
                inner.y,
                inner.width,
                inner.height.saturating_sub(1),
            );
            view.render(&table, &items, table_area, buf, &theme);

            let status_y = inner.y + table_area.height;
            let span = Span::styled(status.borrow().clone(), theme.text_muted);
            buf.set_span(inner.x, status_y, &span, inner.width);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        match crossterm::event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    return Ok(());
                }
            }
            Event::Mouse(m) => {
                let Some(mouse) = mouse_event_from_crossterm(m) else {
                    continue;
                };
                if let TableAction::SortChanged(state) =
                    view.handle_mouse(&mut table, &items, mouse)
                {
                    sort_items(&mut items, &state);
                    *status.borrow_mut() =
                        format!("sorted by {} {}", state.column, state.direction().as_str());
                }
            }
            _ => {}
        }
    }
}
