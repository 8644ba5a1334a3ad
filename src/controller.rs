//! Seam between the body engine and the table controller that owns row,
//! column and edit state.
//!
//! Queries take `&self` and are made during a render pass. Event sinks take
//! `&mut self` and are only reached through `body::events`.

use crate::body::BodyEvent;
use crate::render::{CellParams, Node};
use crate::types::{
    field_value, value_label, ActiveEdit, CellSpan, Column, Record, RendererConf, RowBuffer,
    RowMeta, TableConfig, ValidError, ViewState,
};

/// Default empty-state text key.
pub const EMPTY_TEXT_KEY: &str = "vxe.table.emptyText";

/// Row drag phases forwarded to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDrag {
    Start,
    End,
    Over,
}

pub trait TableController {
    /// Cached metadata of a row. `None` degrades to level 0, seq -1, index 0.
    fn row_meta(&self, rowid: &str) -> Option<&RowMeta>;

    /// Index of the row in the full data.
    fn row_index(&self, rowid: &str) -> usize {
        self.row_meta(rowid).map(|meta| meta.index).unwrap_or_default()
    }

    /// Position of the row among the rows currently visible in the table.
    fn visible_row_index(&self, rowid: &str) -> Option<usize> {
        self.row_meta(rowid).map(|meta| meta.index)
    }

    fn is_first_visible_row(&self, rowid: &str) -> bool {
        self.visible_row_index(rowid) == Some(0)
    }

    /// Index of a column among all columns, hidden ones included.
    fn column_index(&self, _colid: &str) -> Option<usize> {
        None
    }

    fn is_tree_expanded(&self, rowid: &str) -> bool;

    fn is_row_expanded(&self, _rowid: &str) -> bool {
        false
    }

    fn is_inserted(&self, _rowid: &str) -> bool {
        false
    }

    /// The field differs from its original value.
    fn is_updated(&self, _rowid: &str, _field: &str) -> bool {
        false
    }

    fn is_checked(&self, _rowid: &str) -> bool {
        false
    }

    fn is_radio_selected(&self, _rowid: &str) -> bool {
        false
    }

    fn is_pending(&self, _rowid: &str) -> bool {
        false
    }

    fn active_edit(&self) -> Option<&ActiveEdit> {
        None
    }

    fn valid_error(&self, _rowid: &str, _colid: &str) -> Option<&ValidError> {
        None
    }

    /// Registered renderer by name.
    fn renderer(&self, _name: &str) -> Option<&RendererConf> {
        None
    }

    fn has_span_method(&self) -> bool {
        false
    }

    /// Custom span callback, used when no merge list is registered.
    /// `None` means a plain 1x1 cell.
    fn span_method(&self, _params: &CellParams) -> Option<CellSpan> {
        None
    }

    fn cell_label(&self, record: &Record, column: &Column) -> String {
        value_label(field_value(record, &column.field))
    }

    /// Cell body content.
    fn render_cell(&self, record: &Record, column: &Column, _params: &CellParams) -> Vec<Node> {
        vec![Node::text(self.cell_label(record, column))]
    }

    /// Content of an expansion row.
    fn render_expand(&self, _record: &Record, _column: &Column, _params: &CellParams) -> Vec<Node> {
        Vec::new()
    }

    /// Custom validation message content. `None` falls back to the plain message.
    fn render_valid(&self, _error: &ValidError, _params: &CellParams) -> Option<Vec<Node>> {
        None
    }

    /// Custom tree line content. `None` draws the built-in guide line.
    fn render_tree_line(&self, _params: &CellParams) -> Option<Vec<Node>> {
        None
    }

    /// Custom empty-state content.
    fn render_empty(&self) -> Option<Vec<Node>> {
        None
    }

    fn i18n(&self, key: &str) -> String {
        match key {
            EMPTY_TEXT_KEY => "No data".to_string(),
            other => other.to_string(),
        }
    }

    fn dispatch_event(&mut self, _event: BodyEvent) {}

    fn trigger_body_tooltip(&mut self, _params: &CellParams) {}

    fn handle_target_leave(&mut self) {}

    /// Refresh the `title` attribute of a clipped cell.
    fn update_cell_title(&mut self, _params: &CellParams) {}

    fn trigger_cell_click(&mut self, _params: &CellParams) {}

    fn trigger_cell_dblclick(&mut self, _params: &CellParams) {}

    fn trigger_cell_mousedown(&mut self, _params: &CellParams) {}

    fn trigger_hover(&mut self, _rowid: &str, _row_index: usize) {}

    fn clear_hover_row(&mut self) {}

    fn handle_row_drag(&mut self, _drag: RowDrag, _rowid: &str) {}
}

/// Everything one body render pass reads. Built once, never mutated mid-pass.
pub struct RenderPass<'a, C: TableController + ?Sized> {
    pub config: &'a TableConfig,
    pub view: &'a ViewState,
    pub rows: &'a RowBuffer,
    /// Every visible leaf column, in display order
    pub columns: &'a [Column],
    pub controller: &'a C,
}

impl<C: TableController + ?Sized> Clone for RenderPass<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: TableController + ?Sized> Copy for RenderPass<'_, C> {}

impl<'a, C: TableController + ?Sized> RenderPass<'a, C> {
    pub fn new(
        config: &'a TableConfig,
        view: &'a ViewState,
        rows: &'a RowBuffer,
        columns: &'a [Column],
        controller: &'a C,
    ) -> Self {
        Self {
            config,
            view,
            rows,
            columns,
            controller,
        }
    }

    /// Position of a column among the visible columns, used for span lookups.
    pub fn visible_column_index(&self, column: &Column) -> usize {
        self.columns
            .iter()
            .position(|c| c.id == column.id)
            .unwrap_or_default()
    }

    pub fn column_index(&self, column: &Column) -> usize {
        self.controller
            .column_index(&column.id)
            .unwrap_or_else(|| self.visible_column_index(column))
    }
}
