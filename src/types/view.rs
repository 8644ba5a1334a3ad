//! Reactive view state the body reads during a render pass.

use serde::{Deserialize, Serialize};

use super::column::{Align, Column};
use crate::merge::MergeSpan;

/// Snapshot of the table controller's reactive state for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewState {
    /// Columns overflow the main pane horizontally
    pub overflow_x: bool,
    /// Virtual (windowed) rendering of columns is active
    pub scroll_x_load: bool,
    /// Virtual (windowed) rendering of rows is active
    pub scroll_y_load: bool,
    pub merge_list: Vec<MergeSpan>,
    /// Every column clips its content
    pub is_all_overflow: bool,
    /// Column holding the row-expand toggle, if any
    pub expand_column: Option<Column>,
    pub has_fixed_column: bool,
    /// Default row height in pixels
    pub row_height: f64,
    /// Id of the current (highlighted) column
    pub current_column: Option<String>,
    /// Number of rows in the current data set
    pub data_len: usize,
    /// A column is being resized
    pub resizing: bool,
    /// Rows are being drag-moved (enables move transitions)
    pub is_drag_row_move: bool,
    /// Columns are being drag-moved
    pub is_drag_col_move: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            overflow_x: false,
            scroll_x_load: false,
            scroll_y_load: false,
            merge_list: Vec::new(),
            is_all_overflow: false,
            expand_column: None,
            has_fixed_column: false,
            row_height: 48.0,
            current_column: None,
            data_len: 0,
            resizing: false,
            is_drag_row_move: false,
            is_drag_col_move: false,
        }
    }
}

/// A stored validation failure for one cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidError {
    pub content: String,
    /// Max width of the error tip in pixels
    pub max_width: Option<f64>,
}

/// Cell currently being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActiveEdit {
    pub rowid: String,
    /// `None` in row edit mode
    pub colid: Option<String>,
}

/// Cell-level hooks a registered renderer contributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RendererConf {
    pub cell_class_name: Option<String>,
    pub cell_style: Vec<(String, String)>,
    pub cell_align: Option<Align>,
}

/// Span returned by a custom span callback. Zero in either axis hides the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellSpan {
    pub rowspan: usize,
    pub colspan: usize,
}

impl Default for CellSpan {
    fn default() -> Self {
        Self {
            rowspan: 1,
            colspan: 1,
        }
    }
}
