//! Renderable rows and cells produced by a body render pass.
//!
//! Everything here is ephemeral: rebuilt on every pass, never persisted.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::node::{ClassList, Node, Style};
use crate::types::{Overflow, PaneSide, RowId, Seq};

bitflags! {
    /// Handlers wired on a body cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct CellEvents: u8 {
        const MOUSE_ENTER = 0b0000_0001;
        const MOUSE_LEAVE = 0b0000_0010;
        const MOUSE_DOWN  = 0b0000_0100;
        const CLICK       = 0b0000_1000;
        const DBL_CLICK   = 0b0001_0000;
    }
}

bitflags! {
    /// Handlers wired on a body row.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct RowEvents: u8 {
        const MOUSE_ENTER = 0b0000_0001;
        const MOUSE_LEAVE = 0b0000_0010;
        const DRAG_START  = 0b0000_0100;
        const DRAG_END    = 0b0000_1000;
        const DRAG_OVER   = 0b0001_0000;
    }
}

/// Coordinates and identity of one body cell, handed to renderers and event
/// sinks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellParams {
    pub rowid: RowId,
    pub colid: String,
    pub field: String,
    pub seq: Seq,
    pub level: usize,
    /// Index of the row in the full data
    pub row_index: usize,
    /// Position of the row within the list being rendered
    pub visible_row_index: usize,
    /// Position in the table's visible row order, used for span resolution
    pub data_row_index: usize,
    pub column_index: usize,
    /// Position of the column within the pane's column list
    pub visible_column_index: usize,
    /// Index used for span resolution
    pub data_column_index: usize,
    pub pane: PaneSide,
    pub is_hidden: bool,
}

/// One `td` of the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCell {
    pub key: String,
    pub class: ClassList,
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rowspan: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colspan: Option<usize>,
    pub overflow: Overflow,
    pub events: CellEvents,
    pub params: CellParams,
    pub children: Vec<Node>,
}

impl RenderedCell {
    pub fn has_class(&self, class: &str) -> bool {
        self.class.contains(class)
    }

    pub fn is_hidden(&self) -> bool {
        self.params.is_hidden
    }

    /// The `vxe-cell` content wrapper.
    pub fn content(&self) -> Option<&Node> {
        self.children.iter().find_map(|n| n.find_class("vxe-cell"))
    }

    /// Find a descendant node by class.
    pub fn find(&self, class: &str) -> Option<&Node> {
        self.children.iter().find_map(|n| n.find_class(class))
    }
}

/// Single full-width cell of an expansion row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedCell {
    pub class: ClassList,
    pub colspan: usize,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Data,
    Expanded,
}

/// One `tr` of the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedRow {
    pub kind: RowKind,
    pub key: String,
    pub rowid: RowId,
    pub level: usize,
    pub row_index: usize,
    pub class: ClassList,
    pub events: RowEvents,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cells: Vec<RenderedCell>,
    /// Cells move with a transition group (`None` unless columns are draggable)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_transition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded: Option<ExpandedCell>,
}

impl RenderedRow {
    pub fn has_class(&self, class: &str) -> bool {
        self.class.contains(class)
    }

    pub fn cell(&self, colid: &str) -> Option<&RenderedCell> {
        self.cells.iter().find(|c| c.params.colid == colid)
    }

    pub fn is_expanded_row(&self) -> bool {
        self.kind == RowKind::Expanded
    }
}

/// Output of one pane's body render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedBody {
    pub pane: PaneSide,
    pub class: ClassList,
    /// Column ids of the colgroup, in order
    pub colgroup: Vec<String>,
    pub rows: Vec<RenderedRow>,
    /// Row list uses a move transition (`None` when rows are not draggable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_transition: Option<String>,
    /// Main pane only: horizontal virtual space element
    pub has_x_space: bool,
    /// Cell area overlay is rendered (mouse area selection)
    pub cell_area: bool,
    /// Extension handle inside the cell area
    pub cell_area_extension: bool,
    /// Host routes wheel events over the pane through the smoother
    pub wheel: bool,
    /// Main pane only: empty-state content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<Vec<Node>>,
}
