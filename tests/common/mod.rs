//! Common test utilities and assertion helpers.
//!
//! Lookup helpers for rendered bodies plus an in-memory pane set for the
//! scroll tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::render::{RenderedBody, RenderedCell, RenderedRow};
use gridview::scroll::{MemoryPane, PaneRegistry, PaneRole};

// Re-export fixtures for convenience
pub use super::fixtures::*;

// ============================================================================
// Rendered Body Lookups
// ============================================================================

/// Rowids of the data rows, in render order.
pub fn rowids(body: &RenderedBody) -> Vec<&str> {
    body.rows
        .iter()
        .filter(|r| !r.is_expanded_row())
        .map(|r| r.rowid.as_str())
        .collect()
}

/// The data row with `rowid`. Panics when missing.
pub fn row<'a>(body: &'a RenderedBody, rowid: &str) -> &'a RenderedRow {
    body.rows
        .iter()
        .find(|r| !r.is_expanded_row() && r.rowid == rowid)
        .unwrap_or_else(|| panic!("row {rowid} not rendered"))
}

/// The cell at (`rowid`, `colid`). Panics when missing.
pub fn cell<'a>(body: &'a RenderedBody, rowid: &str, colid: &str) -> &'a RenderedCell {
    row(body, rowid)
        .cell(colid)
        .unwrap_or_else(|| panic!("cell {rowid}/{colid} not rendered"))
}

/// Column ids of the cells a row emitted.
pub fn cell_ids(row: &RenderedRow) -> Vec<&str> {
    row.cells.iter().map(|c| c.params.colid.as_str()).collect()
}

/// Text of the `vxe-cell` content wrapper.
pub fn cell_text(cell: &RenderedCell) -> String {
    cell.content()
        .map(|n| n.text_content())
        .unwrap_or_default()
}

// ============================================================================
// Assertions
// ============================================================================

pub fn assert_cell_class(cell: &RenderedCell, class: &str) {
    assert!(
        cell.has_class(class),
        "cell {}/{} lacks class {class}: {:?}",
        cell.params.rowid,
        cell.params.colid,
        cell.class.iter().collect::<Vec<_>>()
    );
}

pub fn assert_no_cell_class(cell: &RenderedCell, class: &str) {
    assert!(
        !cell.has_class(class),
        "cell {}/{} unexpectedly has class {class}",
        cell.params.rowid,
        cell.params.colid
    );
}

pub fn assert_row_class(row: &RenderedRow, class: &str) {
    assert!(
        row.has_class(class),
        "row {} lacks class {class}: {:?}",
        row.rowid,
        row.class.iter().collect::<Vec<_>>()
    );
}

pub fn assert_no_row_class(row: &RenderedRow, class: &str) {
    assert!(
        !row.has_class(class),
        "row {} unexpectedly has class {class}",
        row.rowid
    );
}

// ============================================================================
// Scroll Panes
// ============================================================================

/// Body panes of a table with 1000px of content in a 200px viewport, plus
/// header, footer and both scroll handles.
pub fn mounted_panes() -> PaneRegistry<MemoryPane> {
    let mut panes = PaneRegistry::new();
    for role in [PaneRole::MainBody, PaneRole::LeftBody, PaneRole::RightBody] {
        panes.mount(role, MemoryPane::new(1_000.0, 200.0).with_width(1_500.0, 500.0));
    }
    panes.mount(PaneRole::ScrollYHandle, MemoryPane::new(1_000.0, 200.0));
    for role in [PaneRole::Header, PaneRole::Footer, PaneRole::ScrollXHandle] {
        panes.mount(role, MemoryPane::new(0.0, 0.0).with_width(1_500.0, 500.0));
    }
    panes
}

pub fn top(panes: &PaneRegistry<MemoryPane>, role: PaneRole) -> f64 {
    panes.get(role).map(|p| p.top).unwrap()
}

pub fn left(panes: &PaneRegistry<MemoryPane>, role: PaneRole) -> f64 {
    panes.get(role).map(|p| p.left).unwrap()
}

pub fn writes(panes: &PaneRegistry<MemoryPane>, role: PaneRole) -> usize {
    panes.get(role).map(|p| p.writes).unwrap()
}
