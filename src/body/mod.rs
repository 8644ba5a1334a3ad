//! Row assembler and pane body output.
//!
//! `render_body` is the entry point the host renderer calls once per pane on
//! every reactive update. `events` runs the handlers the output wires.

mod events;
mod pane;
mod rows;

pub use events::{
    dispatch_cell_event, dispatch_row_event, BodyEvent, CellEventKind, HoverGuard, RowEventKind,
};
pub use pane::{empty_content, render_body, select_pane_columns};
pub use rows::{assemble_rows, is_stripe_row, row_key};
