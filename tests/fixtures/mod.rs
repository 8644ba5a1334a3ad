//! Test fixtures for building table snapshots in memory.
//!
//! This module provides a builder for table state, so tests can describe a
//! table (columns, records, edit and tree state) and render it directly.
//!
//! # Example
//!
//! ```rust
//! use fixtures::TableBuilder;
//!
//! let table = TableBuilder::new()
//!     .columns(&["name", "age"])
//!     .records(3)
//!     .config(|c| c.stripe = true)
//!     .build();
//!
//! let body = table.render(gridview::PaneSide::Main);
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::merge::MergeSpan;
use gridview::snapshot::CellError;
use gridview::{
    ActiveEdit, Column, FixedSide, RendererConf, TableConfig, TableSnapshot, TableState, TreeOpts,
    ValidError, ViewState,
};
use serde_json::{json, Value};

// ============================================================================
// Table Builder
// ============================================================================

/// Builder for table snapshots. Rows are keyed by their `id` field.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    snapshot: TableSnapshot,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        let mut snapshot = TableSnapshot::default();
        snapshot.config.row_id = Some("id".to_string());
        Self { snapshot }
    }

    /// Add plain columns whose id and field are the same.
    pub fn columns(mut self, ids: &[&str]) -> Self {
        self.snapshot
            .columns
            .extend(ids.iter().map(|id| Column::new(id, id).width(100.0)));
        self
    }

    pub fn column(mut self, column: Column) -> Self {
        self.snapshot.columns.push(column);
        self
    }

    /// Add a left-fixed column.
    pub fn left(self, id: &str) -> Self {
        self.column(Column::new(id, id).width(80.0).fixed(FixedSide::Left))
    }

    /// Add a right-fixed column.
    pub fn right(self, id: &str) -> Self {
        self.column(Column::new(id, id).width(80.0).fixed(FixedSide::Right))
    }

    pub fn record(mut self, record: Value) -> Self {
        self.snapshot.data.push(record);
        self
    }

    /// Add `count` flat records `r1..rN` with `name`, `age` and `city`.
    pub fn records(mut self, count: usize) -> Self {
        let start = self.snapshot.data.len();
        for i in start + 1..=start + count {
            self.snapshot.data.push(json!({
                "id": format!("r{i}"),
                "name": format!("Name {i}"),
                "age": 20 + i,
                "city": "Oslo",
            }));
        }
        self
    }

    pub fn config(mut self, f: impl FnOnce(&mut TableConfig)) -> Self {
        f(&mut self.snapshot.config);
        self
    }

    pub fn view(mut self, f: impl FnOnce(&mut ViewState)) -> Self {
        f(&mut self.snapshot.view);
        self
    }

    /// Enable tree mode with default options.
    pub fn tree(self) -> Self {
        self.config(|c| c.tree_config = Some(TreeOpts::default()))
    }

    /// Enable tree mode with guide lines.
    pub fn tree_lines(self) -> Self {
        self.config(|c| {
            c.tree_config = Some(TreeOpts {
                show_line: true,
                ..TreeOpts::default()
            });
        })
    }

    pub fn expand_tree(mut self, rowid: &str) -> Self {
        self.snapshot.tree_expanded.push(rowid.to_string());
        self
    }

    pub fn expand_row(mut self, rowid: &str) -> Self {
        self.snapshot.row_expanded.push(rowid.to_string());
        self
    }

    pub fn inserted(mut self, rowid: &str) -> Self {
        self.snapshot.inserted.push(rowid.to_string());
        self
    }

    pub fn updated(mut self, rowid: &str, field: &str) -> Self {
        self.snapshot
            .updated
            .entry(rowid.to_string())
            .or_default()
            .push(field.to_string());
        self
    }

    pub fn checked(mut self, rowid: &str) -> Self {
        self.snapshot.checked.push(rowid.to_string());
        self
    }

    pub fn radio(mut self, rowid: &str) -> Self {
        self.snapshot.radio_row = Some(rowid.to_string());
        self
    }

    pub fn pending(mut self, rowid: &str) -> Self {
        self.snapshot.pending.push(rowid.to_string());
        self
    }

    /// Put a cell (or a whole row with `colid = None`) into edit.
    pub fn editing(mut self, rowid: &str, colid: Option<&str>) -> Self {
        self.snapshot.active_edit = Some(ActiveEdit {
            rowid: rowid.to_string(),
            colid: colid.map(str::to_string),
        });
        self
    }

    pub fn valid_error(mut self, rowid: &str, colid: &str, message: &str) -> Self {
        self.snapshot.valid_errors.push(CellError {
            rowid: rowid.to_string(),
            colid: colid.to_string(),
            error: ValidError {
                content: message.to_string(),
                max_width: None,
            },
        });
        self
    }

    pub fn renderer(mut self, name: &str, conf: RendererConf) -> Self {
        self.snapshot.renderers.insert(name.to_string(), conf);
        self
    }

    pub fn merge(mut self, row: usize, col: usize, rowspan: usize, colspan: usize) -> Self {
        self.snapshot
            .view
            .merge_list
            .push(MergeSpan::new(row, col, rowspan, colspan));
        self
    }

    pub fn row_height(mut self, rowid: &str, height: f64) -> Self {
        self.snapshot.row_heights.insert(rowid.to_string(), height);
        self
    }

    pub fn snapshot(self) -> TableSnapshot {
        self.snapshot
    }

    pub fn build(self) -> TableState {
        TableState::from_snapshot(self.snapshot)
    }
}

// ============================================================================
// Canned Data
// ============================================================================

/// A two-level tree:
///
/// ```text
/// a
/// ├── a1
/// │   ├── a1x
/// │   └── a1y
/// └── a2
/// b
/// c
/// └── c1
/// ```
pub fn tree_records() -> Vec<Value> {
    vec![
        json!({"id": "a", "name": "A", "children": [
            {"id": "a1", "name": "A1", "children": [
                {"id": "a1x", "name": "A1x"},
                {"id": "a1y", "name": "A1y"}
            ]},
            {"id": "a2", "name": "A2"}
        ]}),
        json!({"id": "b", "name": "B"}),
        json!({"id": "c", "name": "C", "children": [{"id": "c1", "name": "C1"}]}),
    ]
}

/// Tree table with a tree-node `name` column and an `age` column.
pub fn tree_table() -> TableBuilder {
    tree_records().into_iter().fold(
        TableBuilder::new()
            .tree()
            .column(Column::new("name", "name").tree_node().width(200.0))
            .columns(&["age"]),
        TableBuilder::record,
    )
}

/// A chain of `depth` nested rows `d0 > d1 > ...`, every level expanded.
pub fn deep_chain(depth: usize) -> TableBuilder {
    let mut node = json!({"id": format!("d{}", depth - 1), "name": "leaf"});
    for level in (0..depth - 1).rev() {
        node = json!({"id": format!("d{level}"), "name": "node", "children": [node]});
    }
    let mut builder = TableBuilder::new()
        .tree()
        .column(Column::new("name", "name").tree_node())
        .record(node);
    for level in 0..depth - 1 {
        builder = builder.expand_tree(&format!("d{level}"));
    }
    builder
}
