//! Static table state driven from JSON.
//!
//! `TableState` implements the controller and scroll sink traits from plain
//! data, so the engine can run without a live table: the CLI, the WASM
//! export and the tests all go through it. Sink calls are recorded in
//! `events`.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::body::{render_body, BodyEvent};
use crate::controller::{RenderPass, RowDrag, TableController};
use crate::error::Result;
use crate::header::{convert_header_columns_to_rows, HeaderCell};
use crate::render::{CellParams, RenderedBody};
use crate::scroll::{ScrollNotice, ScrollSink};
use crate::types::{
    visible_leaf_columns, ActiveEdit, Column, FixedSide, PaneSide, Record, RendererConf,
    RowBuffer, RowId, RowIndex, RowMeta, TableConfig, ValidError, ViewState,
};

/// A stored validation failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CellError {
    pub rowid: RowId,
    pub colid: String,
    #[serde(flatten)]
    pub error: ValidError,
}

/// Serialized table state. Row ids are given in their encoded form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableSnapshot {
    pub config: TableConfig,
    pub view: ViewState,
    /// Column tree, header groups included
    pub columns: Vec<Column>,
    pub data: Vec<Record>,
    pub tree_expanded: Vec<RowId>,
    pub row_expanded: Vec<RowId>,
    pub inserted: Vec<RowId>,
    /// rowid -> fields changed since load
    pub updated: HashMap<RowId, Vec<String>>,
    pub checked: Vec<RowId>,
    pub radio_row: Option<RowId>,
    pub pending: Vec<RowId>,
    pub active_edit: Option<ActiveEdit>,
    pub valid_errors: Vec<CellError>,
    pub renderers: HashMap<String, RendererConf>,
    /// Measured row heights
    pub row_heights: HashMap<RowId, f64>,
}

/// A recorded controller or scroll sink call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TableEvent {
    Dispatch { name: String, rowid: RowId, colid: String },
    BodyTooltip { rowid: RowId, colid: String },
    TargetLeave,
    CellTitle { rowid: RowId, colid: String },
    CellClick { rowid: RowId, colid: String },
    CellDblclick { rowid: RowId, colid: String },
    CellMousedown { rowid: RowId, colid: String },
    Hover { rowid: RowId, row_index: usize },
    ClearHover,
    RowDrag { rowid: RowId, phase: String },
    ScrollY { top: f64 },
    ScrollX { left: f64 },
    HandleScroll { notice: ScrollNotice },
    Scroll { notice: ScrollNotice },
    ScrollTo { left: Option<f64>, top: Option<f64> },
    ClearScroll,
}

fn cell_ids(params: &CellParams) -> (RowId, String) {
    (params.rowid.clone(), params.colid.clone())
}

/// Controller state built from a snapshot.
#[derive(Debug, Default)]
pub struct TableState {
    pub config: TableConfig,
    pub view: ViewState,
    header: Vec<Column>,
    columns: Vec<Column>,
    rows: RowBuffer,
    index: RowIndex,
    visible: HashMap<RowId, usize>,
    tree_expanded: HashSet<RowId>,
    row_expanded: HashSet<RowId>,
    inserted: HashSet<RowId>,
    updated: HashMap<RowId, Vec<String>>,
    checked: HashSet<RowId>,
    radio_row: Option<RowId>,
    pending: HashSet<RowId>,
    active_edit: Option<ActiveEdit>,
    valid_errors: HashMap<(RowId, String), ValidError>,
    renderers: HashMap<String, RendererConf>,
    pub events: Vec<TableEvent>,
}

impl TableState {
    pub fn from_snapshot(snapshot: TableSnapshot) -> Self {
        let TableSnapshot {
            config,
            mut view,
            columns,
            data,
            tree_expanded,
            row_expanded,
            inserted,
            updated,
            checked,
            radio_row,
            pending,
            active_edit,
            valid_errors,
            renderers,
            row_heights,
        } = snapshot;

        let rows = RowBuffer::from_records(data, config.row_key_field(), config.children_field());
        let mut index = RowIndex::build(&rows, config.tree_config.is_some());
        for (rowid, height) in &row_heights {
            index.set_height(rowid, *height);
        }
        let leaves = visible_leaf_columns(&columns);
        view.data_len = rows.roots().len();
        view.has_fixed_column = leaves.iter().any(|c| c.fixed.is_some());

        let tree_expanded: HashSet<RowId> = tree_expanded.into_iter().collect();
        let visible = rows
            .visible_order(|rowid| tree_expanded.contains(rowid))
            .into_iter()
            .enumerate()
            .filter_map(|(position, slot)| rows.get(slot).map(|s| (s.rowid.clone(), position)))
            .collect();

        Self {
            config,
            view,
            header: columns,
            columns: leaves,
            index,
            visible,
            tree_expanded,
            row_expanded: row_expanded.into_iter().collect(),
            inserted: inserted.into_iter().collect(),
            updated,
            checked: checked.into_iter().collect(),
            radio_row,
            pending: pending.into_iter().collect(),
            active_edit,
            valid_errors: valid_errors
                .into_iter()
                .map(|e| ((e.rowid, e.colid), e.error))
                .collect(),
            renderers,
            rows,
            events: Vec::new(),
        }
    }

    /// Parse a JSON snapshot.
    ///
    /// # Errors
    /// Returns `GridError::Json` when the document does not match the
    /// snapshot shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: TableSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn rows(&self) -> &RowBuffer {
        &self.rows
    }

    pub fn row_index_map(&self) -> &RowIndex {
        &self.index
    }

    /// Visible leaf columns in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn pass(&self) -> RenderPass<'_, Self> {
        RenderPass::new(&self.config, &self.view, &self.rows, &self.columns, self)
    }

    /// Rows handed to the body: top-level rows when the body expands tree
    /// children itself, else the pre-flattened visible order.
    pub fn body_rows(&self) -> Vec<usize> {
        match self.config.tree_config.as_ref() {
            Some(tree) if self.view.scroll_y_load || tree.transform => self
                .rows
                .visible_order(|rowid| self.tree_expanded.contains(rowid)),
            _ => self.rows.roots().to_vec(),
        }
    }

    /// Rowids of the visible rows, in display order.
    pub fn visible_rowids(&self) -> Vec<&str> {
        self.rows
            .visible_order(|rowid| self.tree_expanded.contains(rowid))
            .into_iter()
            .filter_map(|slot| self.rows.get(slot).map(|s| s.rowid.as_str()))
            .collect()
    }

    /// The pane's own column list.
    pub fn pane_columns(&self, pane: PaneSide) -> Vec<Column> {
        match pane.fixed() {
            None => self.columns.clone(),
            Some(side) => self
                .columns
                .iter()
                .filter(|c| c.fixed == Some(side))
                .cloned()
                .collect(),
        }
    }

    pub fn fixed_columns(&self, side: FixedSide) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(move |c| c.fixed == Some(side))
    }

    /// Render one pane's body.
    pub fn render(&self, pane: PaneSide) -> RenderedBody {
        let columns = self.pane_columns(pane);
        render_body(&self.pass(), pane, &self.body_rows(), &columns)
    }

    pub fn header_rows(&self) -> Vec<Vec<HeaderCell>> {
        convert_header_columns_to_rows(&self.header)
    }

    pub fn set_tree_expanded(&mut self, rowid: &str, expanded: bool) {
        if expanded {
            self.tree_expanded.insert(rowid.to_string());
        } else {
            self.tree_expanded.remove(rowid);
        }
        let order = self
            .rows
            .visible_order(|id| self.tree_expanded.contains(id));
        self.visible = order
            .into_iter()
            .enumerate()
            .filter_map(|(position, slot)| {
                self.rows.get(slot).map(|s| (s.rowid.clone(), position))
            })
            .collect();
    }
}

impl TableController for TableState {
    fn row_meta(&self, rowid: &str) -> Option<&RowMeta> {
        self.index.get(rowid)
    }

    fn visible_row_index(&self, rowid: &str) -> Option<usize> {
        self.visible.get(rowid).copied()
    }

    fn is_tree_expanded(&self, rowid: &str) -> bool {
        self.tree_expanded.contains(rowid)
    }

    fn is_row_expanded(&self, rowid: &str) -> bool {
        self.row_expanded.contains(rowid)
    }

    fn is_inserted(&self, rowid: &str) -> bool {
        self.inserted.contains(rowid)
    }

    fn is_updated(&self, rowid: &str, field: &str) -> bool {
        self.updated
            .get(rowid)
            .is_some_and(|fields| fields.iter().any(|f| f == field))
    }

    fn is_checked(&self, rowid: &str) -> bool {
        self.checked.contains(rowid)
    }

    fn is_radio_selected(&self, rowid: &str) -> bool {
        self.radio_row.as_deref() == Some(rowid)
    }

    fn is_pending(&self, rowid: &str) -> bool {
        self.pending.contains(rowid)
    }

    fn active_edit(&self) -> Option<&ActiveEdit> {
        self.active_edit.as_ref()
    }

    fn valid_error(&self, rowid: &str, colid: &str) -> Option<&ValidError> {
        self.valid_errors
            .get(&(rowid.to_string(), colid.to_string()))
    }

    fn renderer(&self, name: &str) -> Option<&RendererConf> {
        self.renderers.get(name)
    }

    fn dispatch_event(&mut self, event: BodyEvent) {
        let name = event.name().to_string();
        let (BodyEvent::CellMouseenter(params) | BodyEvent::CellMouseleave(params)) = event;
        self.events.push(TableEvent::Dispatch {
            name,
            rowid: params.rowid,
            colid: params.colid,
        });
    }

    fn trigger_body_tooltip(&mut self, params: &CellParams) {
        let (rowid, colid) = cell_ids(params);
        self.events.push(TableEvent::BodyTooltip { rowid, colid });
    }

    fn handle_target_leave(&mut self) {
        self.events.push(TableEvent::TargetLeave);
    }

    fn update_cell_title(&mut self, params: &CellParams) {
        let (rowid, colid) = cell_ids(params);
        self.events.push(TableEvent::CellTitle { rowid, colid });
    }

    fn trigger_cell_click(&mut self, params: &CellParams) {
        let (rowid, colid) = cell_ids(params);
        self.events.push(TableEvent::CellClick { rowid, colid });
    }

    fn trigger_cell_dblclick(&mut self, params: &CellParams) {
        let (rowid, colid) = cell_ids(params);
        self.events.push(TableEvent::CellDblclick { rowid, colid });
    }

    fn trigger_cell_mousedown(&mut self, params: &CellParams) {
        let (rowid, colid) = cell_ids(params);
        self.events.push(TableEvent::CellMousedown { rowid, colid });
    }

    fn trigger_hover(&mut self, rowid: &str, row_index: usize) {
        self.events.push(TableEvent::Hover {
            rowid: rowid.to_string(),
            row_index,
        });
    }

    fn clear_hover_row(&mut self) {
        self.events.push(TableEvent::ClearHover);
    }

    fn handle_row_drag(&mut self, drag: RowDrag, rowid: &str) {
        let phase = match drag {
            RowDrag::Start => "start",
            RowDrag::End => "end",
            RowDrag::Over => "over",
        };
        self.events.push(TableEvent::RowDrag {
            rowid: rowid.to_string(),
            phase: phase.to_string(),
        });
    }
}

impl ScrollSink for TableState {
    fn trigger_scroll_y(&mut self, top: f64) {
        self.events.push(TableEvent::ScrollY { top });
    }

    fn trigger_scroll_x(&mut self, left: f64) {
        self.events.push(TableEvent::ScrollX { left });
    }

    fn handle_scroll(&mut self, notice: &ScrollNotice) {
        self.events.push(TableEvent::HandleScroll { notice: *notice });
    }

    fn dispatch_scroll(&mut self, notice: &ScrollNotice) {
        self.events.push(TableEvent::Scroll { notice: *notice });
    }

    fn clear_hover_row(&mut self) {
        self.events.push(TableEvent::ClearHover);
    }

    fn scroll_to(&mut self, left: Option<f64>, top: Option<f64>) {
        self.events.push(TableEvent::ScrollTo { left, top });
    }

    fn clear_scroll(&mut self) {
        self.events.push(TableEvent::ClearScroll);
    }
}
