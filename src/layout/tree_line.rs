//! Tree indentation guide lines.

use super::cell::RowContext;
use crate::controller::{RenderPass, TableController};
use crate::render::{ClassList, Node, Style};
use crate::types::{Column, RowBuffer, Size};

/// Count `slot` plus every descendant reachable through expanded rows.
///
/// Collapsed rows and leaves count as 1.
pub fn count_tree_expand(
    rows: &RowBuffer,
    slot: usize,
    is_expanded: impl Fn(&str) -> bool,
) -> usize {
    let mut count = 0;
    let mut stack = vec![slot];
    while let Some(index) = stack.pop() {
        let Some(row) = rows.get(index) else {
            continue;
        };
        count += 1;
        if !row.children.is_empty() && is_expanded(&row.rowid) {
            stack.extend(row.children.iter().copied());
        }
    }
    count
}

/// Height of the guide line of a row at `sibling_index` among its siblings.
///
/// `expand_size` is the expanded extent of the previous sibling (1 for the
/// first sibling).
pub fn calc_tree_line(row_height: f64, expand_size: usize, sibling_index: usize, size_offset: f64) -> f64 {
    let adjustment = if sibling_index > 0 {
        1.0
    } else {
        12.0 - size_offset
    };
    row_height * expand_size as f64 - adjustment
}

/// Left offset of the guide line for a row at `level`.
pub fn tree_line_left(level: usize, indent: f64, size_offset: f64) -> f64 {
    let level_offset = if level > 0 { 2.0 - size_offset } else { 0.0 };
    level as f64 * indent + level_offset + 16.0
}

/// Guide line nodes for a tree-node cell, empty when lines are off.
pub fn render_line<C: TableController + ?Sized>(
    pass: &RenderPass<'_, C>,
    row: &RowContext<'_>,
    column: &Column,
) -> Vec<Node> {
    if let Some(custom) = pass.controller.render_tree_line(&row.params) {
        return custom;
    }
    let Some(tree) = pass.config.tree_config.as_ref() else {
        return Vec::new();
    };
    if !column.tree_node || !tree.show_line {
        return Vec::new();
    }

    let size_offset = Size::line_offset(pass.config.size);
    let height = if pass.controller.is_first_visible_row(row.rowid) {
        1.0
    } else {
        let expand_size = row
            .sibling_index
            .checked_sub(1)
            .and_then(|prev| row.items.get(prev))
            .map(|&prev| {
                count_tree_expand(pass.rows, prev, |rowid| {
                    pass.controller.is_tree_expanded(rowid)
                })
            })
            .unwrap_or(1);
        calc_tree_line(pass.view.row_height, expand_size, row.sibling_index, size_offset)
    };

    let mut style = Style::new();
    style.set_px("height", height);
    style.set_px("left", tree_line_left(row.level, tree.indent, size_offset));
    vec![Node::div(
        ClassList::from(&["vxe-tree--line-wrapper"][..]),
        vec![Node::element(
            "div",
            ClassList::from(&["vxe-tree--line"][..]),
            style,
            Vec::new(),
        )],
    )]
}
