//! Pane-level body output: column selection, row list, empty state.

use super::rows::assemble_rows;
use crate::controller::{RenderPass, TableController, EMPTY_TEXT_KEY};
use crate::render::{ClassList, Node, RenderedBody};
use crate::types::{Column, PaneSide};

/// Columns a pane actually renders.
///
/// The main pane renders `columns` as given. A fixed pane renders only its
/// own fixed columns when it can: no expansion column, rows are virtual or
/// every column overflows, and no span source (merge list, span callback or
/// keyboard merge) could reach across the fixed boundary. Otherwise it
/// renders every visible column and hides the foreign ones.
pub fn select_pane_columns<'c, C: TableController + ?Sized>(
    pass: &RenderPass<'c, C>,
    pane: PaneSide,
    columns: &'c [Column],
) -> &'c [Column] {
    if pane.fixed().is_none() {
        return columns;
    }
    let config = pass.config;
    let view = pass.view;
    let all_overflow = config
        .show_overflow
        .is_some_and(|mode| mode.has_ellipsis() && view.is_all_overflow);
    let compact = view.expand_column.is_none() && (view.scroll_y_load || all_overflow);
    let has_spans = !view.merge_list.is_empty()
        || pass.controller.has_span_method()
        || config.keyboard_config.as_ref().is_some_and(|k| k.is_merge);
    if compact && !has_spans {
        columns
    } else {
        pass.columns
    }
}

/// Empty-state content of the main pane.
pub fn empty_content<C: TableController + ?Sized>(pass: &RenderPass<'_, C>) -> Vec<Node> {
    if let Some(custom) = pass.controller.render_empty() {
        return custom;
    }
    let text = pass
        .config
        .empty_text
        .clone()
        .unwrap_or_else(|| pass.controller.i18n(EMPTY_TEXT_KEY));
    vec![Node::text(text)]
}

/// Render one pane's body.
///
/// `columns` is the pane's own column list: the (possibly windowed) table
/// columns for the main pane, the fixed columns for a fixed pane.
pub fn render_body<C: TableController + ?Sized>(
    pass: &RenderPass<'_, C>,
    pane: PaneSide,
    rows: &[usize],
    columns: &[Column],
) -> RenderedBody {
    let config = pass.config;
    let columns = select_pane_columns(pass, pane, columns);

    let mut class = ClassList::from(&["vxe-table--body-wrapper"][..]);
    match pane.fixed() {
        Some(_) => class.push(&format!("fixed-{}--wrapper", pane.as_str())),
        None => class.push("body--wrapper"),
    }

    let row_transition = (config.row_config.drag || config.column_config.drag).then(|| {
        let suffix = if pass.view.is_drag_row_move {
            ""
        } else {
            "-disabled"
        };
        format!("vxe-body--row-list{suffix}")
    });
    let mouse = config.mouse_config.as_ref();
    let is_main = pane == PaneSide::Main;

    RenderedBody {
        pane,
        class,
        colgroup: columns.iter().map(|c| c.id.clone()).collect(),
        rows: assemble_rows(pass, pane, rows, columns),
        row_transition,
        has_x_space: is_main,
        cell_area: mouse.is_some_and(|m| m.area),
        cell_area_extension: mouse.is_some_and(|m| m.area && m.extension),
        wheel: config.wheel_mode(),
        empty: is_main.then(|| empty_content(pass)),
    }
}
