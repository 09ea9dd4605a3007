use datatable::event::TableAction;
use datatable::event::TableEvent;
use datatable::field::Field;
use datatable::field::FieldSpec;
use datatable::options::TableOptions;
use datatable::record::JsonRecord;
use datatable::sort::SortControl;
use datatable::table::Table;
use serde_json::json;

#[test]
fn options_load_from_json_config() {
    let options: TableOptions = serde_json::from_value(json!({
        "sorter": true,
        "border": false,
        "empty_message": "Nothing here"
    }))
    .unwrap();
    let table = Table::<JsonRecord>::builder(["name"])
        .options(options)
        .build()
        .unwrap();

    let html = table.to_html(&[]);
    assert!(html.contains("Nothing here"));
    assert!(!html.contains("table-bordered"));
    assert!(html.contains("aria-disabled=\"true\""));
}

#[test]
fn reexports_drive_a_full_render_cycle() {
    let mut items = JsonRecord::from_array(
        json!([
            {"id": "a", "name": "Zed", "score": 3},
            {"id": "b", "name": "Amy", "score": 9},
        ]),
        "id",
    )
    .unwrap();
    let mut table = Table::builder([
        FieldSpec::from("name"),
        Field::new("score").label("Points").into(),
    ])
    .sorter(true)
    .build()
    .unwrap();

    let action = table.handle_event(&items, TableEvent::sort_click("name", SortControl::Up));
    let TableAction::SortChanged(state) = action else {
        panic!("expected a sort change, got {action:?}");
    };
    items.sort_by(|a, b| {
        let (a, b) = (&a.fields()[&state.column], &b.fields()[&state.column]);
        a.as_str().cmp(&b.as_str())
    });

    let html = table.to_html(&items);
    let amy = html.find("Amy").unwrap();
    let zed = html.find("Zed").unwrap();
    assert!(amy < zed);
    assert!(html.contains("Points"));
}
