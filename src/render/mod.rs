//! Render output model.
//!
//! This module provides:
//! - A minimal node tree for cell content
//! - Typed row/cell output with class lists, styles, spans and wired events

mod node;
mod output;

pub use node::{ClassList, Node, Style};
pub use output::{
    CellEvents, CellParams, ExpandedCell, RenderedBody, RenderedCell, RenderedRow, RowEvents,
    RowKind,
};
