//! Row assembly: data rows, expansion rows and expanded tree children.

use crate::controller::{RenderPass, TableController};
use crate::layout::{render_cell, RowContext};
use crate::render::{
    ClassList, ExpandedCell, Node, RenderedRow, RowEvents, RowKind, Style,
};
use crate::types::{Column, Overflow, PaneSide, RowSlot};

/// Handlers wired on every data row of this pass.
fn row_events<C: TableController + ?Sized>(pass: &RenderPass<'_, C>, level: usize) -> RowEvents {
    let mut events = RowEvents::empty();
    if pass.config.hover_rows() {
        events |= RowEvents::MOUSE_ENTER | RowEvents::MOUSE_LEAVE;
    }
    if pass.config.row_config.drag && level == 0 {
        events |= RowEvents::DRAG_START | RowEvents::DRAG_END | RowEvents::DRAG_OVER;
    }
    events
}

/// Row key: the rowid when rows need a stable identity, else the position.
pub fn row_key<C: TableController + ?Sized>(pass: &RenderPass<'_, C>, rowid: &str, position: usize) -> String {
    if pass.config.uses_row_identity() {
        rowid.to_string()
    } else {
        position.to_string()
    }
}

/// Move transition of a row's cells while columns are draggable.
fn cell_transition<C: TableController + ?Sized>(pass: &RenderPass<'_, C>) -> Option<String> {
    pass.config.column_config.drag.then(|| {
        let suffix = if pass.view.is_drag_col_move {
            ""
        } else {
            "-disabled"
        };
        format!("vxe-header--col-list{suffix}")
    })
}

/// Stripe rows at odd visible positions.
pub fn is_stripe_row(visible_index: usize) -> bool {
    (visible_index + 1) % 2 == 0
}

fn expanded_row<C: TableController + ?Sized>(
    pass: &RenderPass<'_, C>,
    pane: PaneSide,
    slot: &RowSlot,
    row: &RowContext<'_>,
    expand_column: &Column,
    columns: &[Column],
    events: RowEvents,
) -> RenderedRow {
    let config = pass.config;
    let expand = &config.expand_config;

    let mut style = Style::new();
    if let Some(height) = expand.height {
        style.set_px("height", height);
    }
    if let Some(tree) = config.tree_config.as_ref() {
        style.set_px("padding-left", row.level as f64 * tree.indent + 30.0);
    }
    let mut inner_class = ClassList::from(&["vxe-body--expanded-cell"][..]);
    inner_class.push_if(expand.height.is_some(), "is--ellipsis");

    let mut params = row.params.clone();
    params.colid = expand_column.id.clone();
    params.field = expand_column.field.clone();
    let content = pass
        .controller
        .render_expand(&slot.record, expand_column, &params);

    let mut cell_class = ClassList::from(&["vxe-body--expanded-column"][..]);
    cell_class.push_if(
        pane.fixed().is_some() && !pass.view.has_fixed_column,
        "fixed--hidden",
    );
    cell_class.push_if(
        Overflow::resolve(expand_column.overflow, config.show_overflow).has_ellipsis(),
        "col--ellipsis",
    );

    let mut class = ClassList::from(&["vxe-body--expanded-row"][..]);
    class.push_if(expand.padding, "is--padding");

    RenderedRow {
        kind: RowKind::Expanded,
        key: format!("expand_{}", slot.rowid),
        rowid: slot.rowid.clone(),
        level: row.level,
        row_index: row.params.row_index,
        class,
        events,
        cells: Vec::new(),
        cell_transition: None,
        expanded: Some(ExpandedCell {
            class: cell_class,
            colspan: columns.len(),
            children: vec![Node::element("div", inner_class, style, content)],
        }),
    }
}

/// Assemble renderable rows for `rows` (buffer slot indices) in one pane.
///
/// Expansion rows follow their data row. Expanded tree children follow
/// next, unless rows arrive pre-flattened (virtual-y or transformed trees).
pub fn assemble_rows<C: TableController + ?Sized>(
    pass: &RenderPass<'_, C>,
    pane: PaneSide,
    rows: &[usize],
    columns: &[Column],
) -> Vec<RenderedRow> {
    let config = pass.config;
    let view = pass.view;
    let controller = pass.controller;
    let walk_children = config
        .tree_config
        .as_ref()
        .is_some_and(|tree| !view.scroll_y_load && !tree.transform);
    let transition = cell_transition(pass);

    let mut out = Vec::with_capacity(rows.len());
    // (slot index, position within its own list)
    let mut stack: Vec<(usize, usize)> = rows
        .iter()
        .enumerate()
        .rev()
        .map(|(position, &index)| (index, position))
        .collect();

    while let Some((index, position)) = stack.pop() {
        let Some(slot) = pass.rows.get(index) else {
            continue;
        };
        let rowid = slot.rowid.as_str();
        let meta = controller.row_meta(rowid);
        let level = meta.map(|m| m.level).unwrap_or_default();
        let seq = meta.map(|m| m.seq.clone()).unwrap_or_default();
        let row_index = controller.row_index(rowid);
        // spans address rows in display order, collapsed subtrees excluded
        let visible_index = controller.visible_row_index(rowid).unwrap_or(position);

        let mut row = RowContext::new(
            &slot.record,
            rowid,
            seq,
            level,
            row_index,
            position,
            visible_index,
            pane,
        );
        if let Some(meta) = meta {
            row = row.with_tree(meta.sibling_index, &meta.items, meta.height);
        }

        let expand_column = view
            .expand_column
            .as_ref()
            .filter(|_| controller.is_row_expanded(rowid));
        let is_new = config.edit_config.is_some() && controller.is_inserted(rowid);
        let children = if walk_children {
            pass.rows.children(index)
        } else {
            &[]
        };
        let is_expand_tree = !children.is_empty() && controller.is_tree_expanded(rowid);
        let events = row_events(pass, level);

        let mut class = ClassList::from(&["vxe-body--row"][..]);
        if config.tree_config.is_some() {
            class.push(&format!("row--level-{level}"));
        }
        class.push_if(config.stripe && is_stripe_row(visible_index), "row--stripe");
        class.push_if(is_new, "is--new");
        class.push_if(expand_column.is_some(), "is--expand-row");
        class.push_if(is_expand_tree, "is--expand-tree");
        class.push_if(
            is_new
                && config
                    .edit_config
                    .as_ref()
                    .is_some_and(|edit| edit.show_status || edit.show_insert_status),
            "row--new",
        );
        class.push_if(
            config.radio_config.highlight && controller.is_radio_selected(rowid),
            "row--radio",
        );
        class.push_if(
            config.checkbox_config.highlight && controller.is_checked(rowid),
            "row--checked",
        );
        class.push_if(controller.is_pending(rowid), "row--pending");
        class.extend_from(config.row_class_name.as_deref());

        let cells = columns
            .iter()
            .enumerate()
            .filter_map(|(col_pos, column)| render_cell(pass, &row, column, col_pos, columns.len()))
            .collect();

        out.push(RenderedRow {
            kind: RowKind::Data,
            key: row_key(pass, rowid, position),
            rowid: slot.rowid.clone(),
            level,
            row_index,
            class,
            events,
            cells,
            cell_transition: transition.clone(),
            expanded: None,
        });

        if let Some(expand_column) = expand_column {
            out.push(expanded_row(pass, pane, slot, &row, expand_column, columns, events));
        }
        if is_expand_tree {
            stack.extend(
                children
                    .iter()
                    .enumerate()
                    .rev()
                    .map(|(position, &child)| (child, position)),
            );
        }
    }
    out
}
