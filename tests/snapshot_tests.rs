//! Tests for JSON snapshots: decoding, derived state and rendered output.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;
mod fixtures;

use common::{cell, cell_text, rowids, TableBuilder};
use gridview::{GridError, PaneSide, TableController, TableState};
use serde_json::json;

const SNAPSHOT: &str = r#"{
    "config": {
        "rowId": "id",
        "stripe": true,
        "showOverflow": "ellipsis",
        "treeConfig": {"childrenField": "items", "indent": 16}
    },
    "view": {"rowHeight": 40},
    "columns": [
        {"id": "c1", "field": "name", "title": "Name", "treeNode": true, "width": 120},
        {"id": "c2", "field": "size", "width": 80, "fixed": "right"}
    ],
    "data": [
        {"id": "docs", "name": "Docs", "size": 3, "items": [
            {"id": "a b", "name": "A B", "size": 1}
        ]},
        {"name": "Loose", "size": 2}
    ],
    "treeExpanded": ["docs"],
    "rowHeights": {"docs": 52}
}"#;

#[test]
fn test_snapshot_decodes_and_renders() {
    let table = TableState::from_json(SNAPSHOT).unwrap();
    assert!(table.config.stripe);
    assert_eq!(table.view.row_height, 40.0);
    assert_eq!(table.columns().len(), 2);

    let body = table.render(PaneSide::Main);
    // keys are URI-component encoded; keyless rows get generated ids
    assert_eq!(rowids(&body), vec!["docs", "a%20b", "row_3"]);
    assert_eq!(cell_text(cell(&body, "a%20b", "c1")), "A B");
    assert_eq!(cell_text(cell(&body, "docs", "c2")), "3");
}

#[test]
fn test_snapshot_derives_view_state() {
    let table = TableState::from_json(SNAPSHOT).unwrap();
    assert_eq!(table.view.data_len, 2);
    assert!(table.view.has_fixed_column);

    let docs = table.row_meta("docs").unwrap();
    assert_eq!(docs.height, 52.0);
    assert_eq!(docs.level, 0);
    let child = table.row_meta("a%20b").unwrap();
    assert_eq!(child.level, 1);
    assert_eq!(table.visible_row_index("row_3"), Some(2));
}

#[test]
fn test_empty_snapshot() {
    let table = TableState::from_json("{}").unwrap();
    let body = table.render(PaneSide::Main);
    assert!(body.rows.is_empty());
    assert!(body.colgroup.is_empty());
    assert!(body.empty.is_some());
}

#[test]
fn test_invalid_snapshot() {
    let err = TableState::from_json(r#"{"data": 3}"#).unwrap_err();
    assert!(matches!(err, GridError::Json(_)));
    assert!(err.to_string().starts_with("JSON decode"));
}

#[test]
fn test_unknown_pane_name() {
    assert_eq!(PaneSide::parse("").unwrap(), PaneSide::Main);
    assert_eq!(PaneSide::parse("right").unwrap(), PaneSide::Right);
    let err = PaneSide::parse("top").unwrap_err();
    assert!(matches!(err, GridError::UnknownPane(ref name) if name == "top"));
}

#[test]
fn test_rendered_body_json_shape() {
    let table = TableBuilder::new()
        .columns(&["name"])
        .records(1)
        .config(|c| c.row_config.is_hover = true)
        .build();
    let value = serde_json::to_value(table.render(PaneSide::Main)).unwrap();

    assert_eq!(value["pane"], json!("main"));
    assert_eq!(value["colgroup"], json!(["name"]));
    assert_eq!(value["hasXSpace"], json!(true));
    let row = &value["rows"][0];
    assert_eq!(row["kind"], json!("data"));
    assert_eq!(row["rowid"], json!("r1"));
    assert_eq!(row["rowIndex"], json!(0));
    assert!(row["class"]
        .as_array()
        .unwrap()
        .contains(&json!("vxe-body--row")));
    assert_eq!(row["cells"][0]["params"]["colid"], json!("name"));
    assert_eq!(row["cells"][0]["params"]["seq"], json!(1));
    assert!(row.get("expanded").is_none());
}

#[test]
fn test_header_rows_from_snapshot() {
    let table = TableState::from_json(
        r#"{"columns": [
            {"id": "g", "title": "Group", "children": [
                {"id": "x", "field": "x"},
                {"id": "y", "field": "y"}
            ]}
        ]}"#,
    )
    .unwrap();
    let value = serde_json::to_value(table.header_rows()).unwrap();
    assert_eq!(value[0][0]["colSpan"], json!(2));
    assert_eq!(value[0][0]["title"], json!("Group"));
    assert_eq!(value[1][1]["parentId"], json!("g"));
}
