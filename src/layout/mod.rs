//! Row/cell layout engine.
//!
//! This module handles:
//! - Resolving overflow, alignment and fixed-pane visibility per cell
//! - Span attributes from the merge list or a custom span callback
//! - Dirty, active and validation decoration
//! - Tree indentation guide lines

mod cell;
mod tree_line;

pub use cell::{is_fixed_hidden, render_cell, shows_valid_tip, RowContext, DEFAULT_CELL_HEIGHT};
pub use tree_line::{calc_tree_line, count_tree_expand, render_line, tree_line_left};
