use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;

use datatable_core::event::TableAction;
use datatable_core::event::TableEvent;
use datatable_core::label::derive_label;
use datatable_core::markup::Element;
use datatable_core::record::JsonRecord;
use datatable_core::sort::SortControl;
use datatable_core::sort::SortDirection;
use datatable_core::sort::SortState;
use datatable_core::table::Table;
use serde_json::json;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TestLogger;

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn people() -> Vec<JsonRecord> {
    JsonRecord::from_array(
        json!([
            {"id": 1, "firstName": "Ada", "age": 36, "admin": true},
            {"id": 2, "firstName": "Grace", "age": 45, "admin": false},
            {"id": 3, "firstName": "Linus", "age": 28, "admin": false},
        ]),
        "id",
    )
    .unwrap()
}

fn cells_of(html_node: &datatable_core::markup::Node) -> Vec<String> {
    let mut tds = Vec::new();
    html_node.find_all("td", &mut tds);
    tds.iter()
        .map(|td| datatable_core::markup::Node::from((*td).clone()).text_content())
        .collect()
}

#[test]
fn labels_split_on_case_and_dots() {
    let cases = [
        ("firstName", "First Name"),
        ("a.bC", "A B C"),
        ("userName", "User Name"),
        ("a.b", "A B"),
        ("address.zipCode", "Address Zip Code"),
        ("createdAtDate", "Created At Date"),
    ];
    for (key, label) in cases {
        assert_eq!(derive_label(key), label, "key {key:?}");
    }
}

#[test]
fn ascending_click_reports_once() {
    init_logging();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let mut table = Table::builder(["firstName", "age"])
        .sorter(true)
        .on_sort_change(move |s| sink.borrow_mut().push(s.clone()))
        .build()
        .unwrap();
    let items = people();

    let action = table.handle_event(&items, TableEvent::sort_click("age", SortControl::Up));
    let expected = SortState::new("age", SortDirection::Ascending);
    assert_eq!(action, TableAction::SortChanged(expected.clone()));
    assert_eq!(*calls.borrow(), vec![expected.clone()]);

    // Already ascending: nothing changes, nothing fires.
    let action = table.handle_event(&items, TableEvent::sort_click("age", SortControl::Up));
    assert_eq!(action, TableAction::None);
    assert_eq!(table.sort_state(), &expected);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn zero_items_disable_indicators() {
    init_logging();
    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    let mut table = Table::<JsonRecord>::builder(["firstName", "age", "admin"])
        .sorter(true)
        .on_sort_change(move |_| counter.set(counter.get() + 1))
        .build()
        .unwrap();

    let html = table.to_html(&[]);
    assert_eq!(html.matches("aria-disabled=\"true\"").count(), 6);

    for column in ["firstName", "age", "admin"] {
        for control in [SortControl::Up, SortControl::Down] {
            table.handle_event(&[], TableEvent::sort_click(column, control));
        }
    }
    assert_eq!(fired.get(), 0);
}

#[test]
fn empty_items_render_one_spanning_row() {
    let table = Table::<JsonRecord>::builder(["firstName", "age", "admin"])
        .build()
        .unwrap();
    let node = table.render(&[]);
    let tbody = node.find("tbody").unwrap();
    let mut rows = Vec::new();
    tbody.find_all("tr", &mut rows);
    assert_eq!(rows.len(), 1);

    let td = rows[0].find("td").unwrap();
    assert_eq!(
        td.attributes().get("colspan").map(|v| v.as_text().into_owned()),
        Some("3".to_string())
    );
    let h2 = td.find("h2").unwrap();
    assert!(
        datatable_core::markup::Node::from(h2.clone())
            .text_content()
            .starts_with("No items")
    );
}

#[test]
fn booleans_render_as_text() {
    let table = Table::builder(["admin"]).build().unwrap();
    let cells = cells_of(&table.render(&people()));
    assert_eq!(cells, vec!["true", "false", "false"]);
}

#[test]
fn scoped_slot_overrides_one_column() {
    let table = Table::builder(["firstName", "age"])
        .scoped_slot("age", |item: &JsonRecord| {
            format!("{} yrs", item.fields()["age"])
        })
        .build()
        .unwrap();
    let cells = cells_of(&table.render(&people()));
    assert_eq!(
        cells,
        vec!["Ada", "36 yrs", "Grace", "45 yrs", "Linus", "28 yrs"]
    );
}

#[test]
fn scoped_slots_may_return_markup() {
    let table = Table::builder(["firstName"])
        .scoped_slot("firstName", |item: &JsonRecord| {
            Element::new("strong").child(item.id().to_string())
        })
        .build()
        .unwrap();
    let html = table.to_html(&people());
    assert!(html.contains("<td><strong>1</strong></td>"));
}

#[test]
fn caller_reorders_items_between_renders() {
    init_logging();
    let mut table = Table::builder(["firstName", "age"]).sorter(true).build().unwrap();
    let mut items = people();

    if let TableAction::SortChanged(state) =
        table.handle_event(&items, TableEvent::sort_click("age", SortControl::Down))
    {
        items.sort_by_key(|r| r.fields()[&state.column].as_i64().unwrap_or_default());
        if !state.asc {
            items.reverse();
        }
    }

    let names: Vec<_> = table
        .model(&items)
        .body
        .rows()
        .iter()
        .map(|r| r.cells[0].to_text().into_owned())
        .collect();
    assert_eq!(names, vec!["Grace", "Ada", "Linus"]);
    assert!(table.to_html(&items).contains("indicator-group desc"));
}

#[test]
fn dom_data_attributes_round_trip_into_events() {
    let mut table = Table::builder(["age"]).sorter(true).build().unwrap();
    let items = people();
    let node = table.render(&items);
    let mut anchors = Vec::new();
    node.find_all("a", &mut anchors);
    let down = anchors
        .iter()
        .find(|a| {
            a.attributes()
                .get("data-sort-direction")
                .is_some_and(|v| v.as_text() == "desc")
        })
        .unwrap();
    let column = down.attributes().get("data-sort-column").unwrap().as_text();
    let event = TableEvent::from_sort_data(&column, "desc").unwrap();

    assert_eq!(
        table.handle_event(&items, event),
        TableAction::SortChanged(SortState::new("age", SortDirection::Descending))
    );
}
